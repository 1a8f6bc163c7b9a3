/// Separator placed between the issue id and the original message
pub const DEFAULT_SEPARATOR: &str = " | ";

/// Check whether `message` already starts with `<issue><separator>`.
///
/// The comparison ignores case, so `abc-123 | ...` counts as prefixed by
/// `ABC-123`.
pub fn has_issue_prefix(message: &str, issue: &str, separator: &str) -> bool {
    let expected = format!("{}{}", issue, separator).to_lowercase();
    message.to_lowercase().starts_with(&expected)
}

/// Prefix a commit message with an issue id, unless it already carries it.
///
/// # Examples
/// ```rust
/// use git_issue_prefix::domain::prefix_commit_message;
///
/// assert_eq!(prefix_commit_message("Update code", "ABC-123"), "ABC-123 | Update code");
/// assert_eq!(
///     prefix_commit_message("abc-123 | Update code", "ABC-123"),
///     "abc-123 | Update code"
/// );
/// ```
pub fn prefix_commit_message(message: &str, issue: &str) -> String {
    prefix_commit_message_with(message, issue, DEFAULT_SEPARATOR)
}

/// Same as [prefix_commit_message] with a custom separator
pub fn prefix_commit_message_with(message: &str, issue: &str, separator: &str) -> String {
    if has_issue_prefix(message, issue, separator) {
        return message.to_string();
    }
    format!("{}{}{}", issue, separator, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_plain_message() {
        assert_eq!(
            prefix_commit_message("Update code", "ABC-123"),
            "ABC-123 | Update code"
        );
        assert_eq!(
            prefix_commit_message("Fix bug", "Issue-456"),
            "Issue-456 | Fix bug"
        );
    }

    #[test]
    fn test_already_prefixed_is_unchanged() {
        assert_eq!(
            prefix_commit_message("ABC-123 | Update code", "ABC-123"),
            "ABC-123 | Update code"
        );
    }

    #[test]
    fn test_prefix_detection_ignores_case() {
        assert_eq!(
            prefix_commit_message("abc-123 | Update code", "ABC-123"),
            "abc-123 | Update code"
        );
        assert_eq!(
            prefix_commit_message("Issue-456 | Fix bug", "ISSUE-456"),
            "Issue-456 | Fix bug"
        );
    }

    #[test]
    fn test_id_without_separator_is_not_a_prefix() {
        assert_eq!(
            prefix_commit_message("ABC-123 update code", "ABC-123"),
            "ABC-123 | ABC-123 update code"
        );
        assert_eq!(
            prefix_commit_message("ABC-1234 | Other issue", "ABC-123"),
            "ABC-123 | ABC-1234 | Other issue"
        );
    }

    #[test]
    fn test_empty_message() {
        assert_eq!(prefix_commit_message("", "ABC-1"), "ABC-1 | ");
    }

    #[test]
    fn test_idempotent_across_casing() {
        let messages = ["Update code", "", "abc-123 | x", "multi\nline\n# comment"];
        for message in messages {
            let once = prefix_commit_message(message, "ABC-123");
            assert_eq!(prefix_commit_message(&once, "ABC-123"), once);
            assert_eq!(prefix_commit_message(&once, "abc-123"), once);
        }
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(
            prefix_commit_message_with("Update code", "ABC-1", ": "),
            "ABC-1: Update code"
        );
        assert_eq!(
            prefix_commit_message_with("abc-1: Update code", "ABC-1", ": "),
            "abc-1: Update code"
        );
        assert!(!has_issue_prefix("ABC-1 | Update", "ABC-1", ": "));
    }
}
