use std::fmt;

use regex::{Captures, Regex};

use crate::error::Result;

/// Canonical issue identifier derived from a branch name
///
/// Either a JIRA-style `PREFIX-NUMBER` code kept verbatim, or `Issue-NUMBER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IssueId(String);

impl IssueId {
    pub fn new(value: impl Into<String>) -> Self {
        IssueId(value.into())
    }

    fn numbered(digits: &str) -> Self {
        IssueId(format!("Issue-{}", digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for IssueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The extraction rules, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// `ABC-123` anywhere in the branch name
    Jira,
    /// `issue-123`, `issue_123`, `ISSUE123`, any casing
    IssueMarker,
    /// A bare number, only for a few branch shapes
    BareNumber,
}

impl RuleKind {
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Jira => "jira",
            RuleKind::IssueMarker => "issue-marker",
            RuleKind::BareNumber => "bare-number",
        }
    }
}

type Guard = fn(&str, &Captures<'_>) -> bool;
type Normalizer = fn(&str, &Captures<'_>) -> IssueId;

/// One ordered extraction rule: a pattern, a guard deciding whether the first
/// match is acceptable for this branch, and a normalizer producing the id.
pub struct IssueRule {
    kind: RuleKind,
    pattern: Regex,
    guard: Guard,
    normalize: Normalizer,
}

impl IssueRule {
    fn new(kind: RuleKind, pattern: &str, guard: Guard, normalize: Normalizer) -> Result<Self> {
        Ok(IssueRule {
            kind,
            pattern: Regex::new(pattern)?,
            guard,
            normalize,
        })
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// Apply this rule alone to a branch name.
    ///
    /// Only the leftmost match is considered; a rejected guard fails the rule.
    pub fn apply(&self, branch_name: &str) -> Option<IssueId> {
        let captures = self.pattern.captures(branch_name)?;
        if !(self.guard)(branch_name, &captures) {
            return None;
        }
        Some((self.normalize)(branch_name, &captures))
    }
}

impl fmt::Debug for IssueRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IssueRule")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

fn always(_branch_name: &str, _captures: &Captures<'_>) -> bool {
    true
}

fn whole_match(_branch_name: &str, captures: &Captures<'_>) -> IssueId {
    IssueId::new(&captures[0])
}

fn issue_marker(branch_name: &str, captures: &Captures<'_>) -> IssueId {
    let digits = &captures[1];
    // An exact `ISSUE-<n>` branch is already canonical
    if branch_name.strip_prefix("ISSUE-") == Some(digits) {
        return IssueId::new(branch_name);
    }
    IssueId::numbered(digits)
}

fn bare_number_shape(branch_name: &str, captures: &Captures<'_>) -> bool {
    let Some(digits) = captures.get(1) else {
        return false;
    };

    if digits.as_str() == branch_name {
        return true;
    }
    if branch_name.starts_with("feature/") && digits.end() == branch_name.len() {
        return true;
    }
    branch_name.starts_with("hotfix/")
}

fn numbered(_branch_name: &str, captures: &Captures<'_>) -> IssueId {
    IssueId::numbered(&captures[1])
}

/// Ordered, first-match-wins issue extraction over branch names
#[derive(Debug)]
pub struct IssueExtractor {
    rules: Vec<IssueRule>,
}

impl IssueExtractor {
    /// Build the extractor with the standard rule set
    pub fn new() -> Result<Self> {
        let rules = vec![
            IssueRule::new(RuleKind::Jira, r"[A-Z]+-[0-9]+", always, whole_match)?,
            IssueRule::new(
                RuleKind::IssueMarker,
                r"(?i-u:issue)[-_]?([0-9]+)",
                always,
                issue_marker,
            )?,
            IssueRule::new(
                RuleKind::BareNumber,
                r"(?:^|[^0-9])([0-9]+)(?:$|[\s/_-])",
                bare_number_shape,
                numbered,
            )?,
        ];

        Ok(IssueExtractor { rules })
    }

    pub fn rules(&self) -> &[IssueRule] {
        &self.rules
    }

    /// Extract the issue id, reporting which rule produced it
    pub fn extract_with_rule(&self, branch_name: &str) -> Option<(RuleKind, IssueId)> {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(branch_name).map(|id| (rule.kind(), id)))
    }

    pub fn extract(&self, branch_name: &str) -> Option<IssueId> {
        self.extract_with_rule(branch_name).map(|(_, id)| id)
    }
}

/// Extract an issue id from a branch name, or `None` if no rule matches
pub fn extract_issue_id(branch_name: &str) -> Option<IssueId> {
    IssueExtractor::new()
        .ok()
        .and_then(|extractor| extractor.extract(branch_name))
}
