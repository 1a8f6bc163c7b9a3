use std::fmt;

use crate::domain::IssueId;

/// How a hook run ended when nothing went wrong.
///
/// None of these block the commit; they differ only in the line reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// Branch name could not be determined (no repository, detached HEAD, no git)
    BranchUnavailable,
    /// The branch name carries no issue id
    NoIssueFound { branch: String },
    /// The message was rewritten with the issue prefix
    Prefixed { issue: IssueId },
    /// The message already started with the issue prefix
    AlreadyPrefixed { issue: IssueId },
}

impl HookOutcome {
    /// Whether this outcome belongs on the error sink
    pub fn is_error(&self) -> bool {
        matches!(self, HookOutcome::BranchUnavailable)
    }

    pub fn exit_code(&self) -> i32 {
        0
    }
}

impl fmt::Display for HookOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookOutcome::BranchUnavailable => {
                write!(f, "Could not determine branch name. Skipping prefixing.")
            }
            HookOutcome::NoIssueFound { .. } => {
                write!(f, "No issue number found in branch. Skipping prefixing.")
            }
            HookOutcome::Prefixed { issue } => {
                write!(f, "Commit message prefixed with: {}", issue)
            }
            HookOutcome::AlreadyPrefixed { issue } => {
                write!(f, "Commit message already contains issue prefix: {}", issue)
            }
        }
    }
}
