//! Branch lookup through an external git process
//!
//! The only git operation the hook needs is "which branch is checked out".
//! It is performed through the [CommandRunner] trait so that callers can
//! substitute an in-memory fake:
//!
//! - [command::SystemCommandRunner]: runs real processes via `std::process::Command`
//! - [mock::MockCommandRunner]: canned output for tests
//!
//! ```rust
//! use git_issue_prefix::git::{current_branch, MockCommandRunner};
//!
//! let runner = MockCommandRunner::with_output("feature/ABC-123\n");
//! assert_eq!(current_branch(&runner, "git"), Some("feature/ABC-123".to_string()));
//! ```

pub mod command;
pub mod mock;

pub use command::SystemCommandRunner;
pub use mock::MockCommandRunner;

use crate::error::Result;

/// Arguments that make git print the short name of the checked-out branch
pub const BRANCH_NAME_ARGS: [&str; 3] = ["rev-parse", "--abbrev-ref", "HEAD"];

/// Capability to execute an external command
pub trait CommandRunner {
    /// Run `program` with `args` and return its standard output.
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Raw stdout of a successful (zero exit) run
    /// * `Err` - If the program cannot be spawned or exits non-zero
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>>;
}

/// Get the current branch name, or `None` if it cannot be determined.
///
/// Every failure (missing binary, not a repository, detached HEAD, empty
/// output) collapses to `None`.
pub fn current_branch(runner: &dyn CommandRunner, git_program: &str) -> Option<String> {
    let stdout = runner.run(git_program, &BRANCH_NAME_ARGS).ok()?;
    let branch = String::from_utf8_lossy(&stdout).trim().to_string();

    match branch.as_str() {
        "" | "HEAD" => None,
        _ => Some(branch),
    }
}
