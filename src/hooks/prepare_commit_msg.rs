use std::path::Path;

use crate::domain::{prefix_commit_message_with, IssueExtractor, DEFAULT_SEPARATOR};
use crate::error::{HookError, Result};
use crate::fs::FileSystem;
use crate::git::{current_branch, CommandRunner};
use crate::outcome::HookOutcome;
use crate::ui::LogSink;

/// Tunables for a hook run
#[derive(Debug, Clone, PartialEq)]
pub struct HookOptions {
    /// Executable used to look up the current branch
    pub git_program: String,
    /// Text between the issue id and the message
    pub separator: String,
}

impl Default for HookOptions {
    fn default() -> Self {
        HookOptions {
            git_program: "git".to_string(),
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

/// The prepare-commit-msg hook, wired to its external capabilities.
///
/// Sequence: branch lookup, issue extraction, read the message file,
/// prefix, and write back only when the message changed. Each run reports
/// exactly one line and yields a process exit code.
pub struct PrepareCommitMsgHook<'a> {
    runner: &'a dyn CommandRunner,
    fs: &'a dyn FileSystem,
    sink: &'a dyn LogSink,
    options: HookOptions,
}

impl<'a> PrepareCommitMsgHook<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        fs: &'a dyn FileSystem,
        sink: &'a dyn LogSink,
    ) -> Self {
        PrepareCommitMsgHook {
            runner,
            fs,
            sink,
            options: HookOptions::default(),
        }
    }

    pub fn with_options(mut self, options: HookOptions) -> Self {
        self.options = options;
        self
    }

    /// Run the hook, report the outcome and return the exit code
    pub fn run(&self, commit_msg_file: &str) -> i32 {
        match self.execute(commit_msg_file) {
            Ok(outcome) => {
                let line = outcome.to_string();
                if outcome.is_error() {
                    self.sink.error(&line);
                } else {
                    self.sink.info(&line);
                }
                outcome.exit_code()
            }
            Err(err) => {
                self.sink.error(&err.to_string());
                err.exit_code()
            }
        }
    }

    /// Run the hook without reporting
    ///
    /// # Returns
    /// * `Ok(HookOutcome)` - The commit may proceed
    /// * `Err` - Missing path or an I/O failure on the message file
    pub fn execute(&self, commit_msg_file: &str) -> Result<HookOutcome> {
        if commit_msg_file.is_empty() {
            return Err(HookError::MissingCommitMessagePath);
        }

        let Some(branch) = current_branch(self.runner, &self.options.git_program) else {
            return Ok(HookOutcome::BranchUnavailable);
        };

        let Some(issue) = IssueExtractor::new()?.extract(&branch) else {
            return Ok(HookOutcome::NoIssueFound { branch });
        };

        let path = Path::new(commit_msg_file);
        let message = self
            .fs
            .read_to_string(path)
            .map_err(HookError::CommitMessageIo)?;

        let prefixed =
            prefix_commit_message_with(&message, issue.as_str(), &self.options.separator);
        if prefixed == message {
            return Ok(HookOutcome::AlreadyPrefixed { issue });
        }

        self.fs
            .write(path, &prefixed)
            .map_err(HookError::CommitMessageIo)?;

        Ok(HookOutcome::Prefixed { issue })
    }
}

/// Run the prepare-commit-msg hook with default options
pub fn run_prepare_commit_msg_hook(
    commit_msg_file: &str,
    runner: &dyn CommandRunner,
    fs: &dyn FileSystem,
    sink: &dyn LogSink,
) -> i32 {
    PrepareCommitMsgHook::new(runner, fs, sink).run(commit_msg_file)
}
