use thiserror::Error;

/// Unified error type for git-issue-prefix operations
#[derive(Error, Debug)]
pub enum HookError {
    #[error("No commit message file path provided.")]
    MissingCommitMessagePath,

    #[error("Error reading or writing commit message file: {0}")]
    CommitMessageIo(#[source] std::io::Error),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Invalid issue pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Convenience type alias for Results in git-issue-prefix
pub type Result<T> = std::result::Result<T, HookError>;

impl HookError {
    /// Create a command error with context
    pub fn command(msg: impl Into<String>) -> Self {
        HookError::Command(msg.into())
    }

    /// Process exit code for a run that ended with this error.
    ///
    /// Every error is a hard failure; benign skips are modelled as
    /// [crate::outcome::HookOutcome] instead.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
