use crate::error::{HookError, Result};
use crate::git::CommandRunner;
use std::path::PathBuf;
use std::process::Command;

/// Runs commands as real child processes
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner {
    working_dir: Option<PathBuf>,
}

impl SystemCommandRunner {
    /// Run commands in the current working directory
    pub fn new() -> Self {
        SystemCommandRunner { working_dir: None }
    }

    /// Run commands in the given directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        SystemCommandRunner {
            working_dir: Some(dir.into()),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>> {
        let mut cmd = Command::new(program);
        cmd.args(args);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .map_err(|e| HookError::command(format!("Failed to execute {}: {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(HookError::command(format!(
                "{} {} failed with exit code {}: {}",
                program,
                args.join(" "),
                output.status.code().unwrap_or(-1),
                stderr.trim()
            )));
        }

        Ok(output.stdout)
    }
}
