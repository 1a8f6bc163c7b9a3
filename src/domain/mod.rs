//! Domain logic - pure branch and message rules independent of git and the file system

pub mod issue;
pub mod message;

pub use issue::{extract_issue_id, IssueExtractor, IssueId, IssueRule, RuleKind};
pub use message::{
    has_issue_prefix, prefix_commit_message, prefix_commit_message_with, DEFAULT_SEPARATOR,
};
