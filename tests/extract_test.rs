use git_issue_prefix::domain::{
    extract_issue_id, prefix_commit_message, IssueExtractor, RuleKind,
};

fn extract(branch: &str) -> Option<String> {
    extract_issue_id(branch).map(|id| id.to_string())
}

#[test]
fn test_extracts_issue_marker_ids() {
    assert_eq!(extract("issue-123"), Some("Issue-123".to_string()));
    assert_eq!(extract("ISSUE-456"), Some("ISSUE-456".to_string()));
    assert_eq!(extract("feature/issue-789"), Some("Issue-789".to_string()));
    assert_eq!(
        extract("feature/issue-123-add-feature"),
        Some("Issue-123".to_string())
    );
}

#[test]
fn test_extracts_jira_style_ids() {
    assert_eq!(extract("PROJ-123"), Some("PROJ-123".to_string()));
    assert_eq!(extract("feature/PROJ-456"), Some("PROJ-456".to_string()));
    assert_eq!(extract("bugfix/ABC-789"), Some("ABC-789".to_string()));
    assert_eq!(
        extract("bugfix/PROJ-456-fix-bug"),
        Some("PROJ-456".to_string())
    );
}

#[test]
fn test_extracts_bare_numbers_for_known_shapes() {
    assert_eq!(extract("123"), Some("Issue-123".to_string()));
    assert_eq!(extract("feature/456"), Some("Issue-456".to_string()));
    assert_eq!(
        extract("hotfix/123-critical-fix"),
        Some("Issue-123".to_string())
    );
}

#[test]
fn test_returns_none_without_issue() {
    for branch in [
        "main",
        "develop",
        "feature/update-readme",
        "bugfix/update-42-readme",
    ] {
        assert_eq!(extract(branch), None, "branch {}", branch);
    }
}

#[test]
fn test_jira_pattern_is_returned_verbatim_wherever_it_appears() {
    let extractor = IssueExtractor::new().unwrap();
    for branch in ["XY-1", "feat/XY-1", "XY-1-thing", "a/b/XY-1/c", "wip_XY-1"] {
        let (kind, id) = extractor.extract_with_rule(branch).unwrap();
        assert_eq!(kind, RuleKind::Jira);
        assert_eq!(id.as_str(), "XY-1");
    }
}

#[test]
fn test_extracted_ids_prefix_idempotently() {
    let branches = ["issue-5", "ISSUE-5", "feature/ABC-77", "hotfix/9-x"];
    for branch in branches {
        let id = extract_issue_id(branch).unwrap();
        let once = prefix_commit_message("Some work", id.as_str());
        assert_eq!(prefix_commit_message(&once, id.as_str()), once);
        assert_eq!(
            prefix_commit_message(&once, &id.as_str().to_uppercase()),
            once
        );
        assert_eq!(
            prefix_commit_message(&once, &id.as_str().to_lowercase()),
            once
        );
    }
}
