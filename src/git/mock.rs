use crate::error::{HookError, Result};
use crate::git::CommandRunner;
use std::cell::RefCell;

/// Mock command runner for testing without spawning processes
pub struct MockCommandRunner {
    output: std::result::Result<Vec<u8>, String>,
    invocations: RefCell<Vec<String>>,
}

impl MockCommandRunner {
    /// Every invocation succeeds with `stdout`
    pub fn with_output(stdout: impl Into<Vec<u8>>) -> Self {
        MockCommandRunner {
            output: Ok(stdout.into()),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Every invocation fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockCommandRunner {
            output: Err(message.into()),
            invocations: RefCell::new(Vec::new()),
        }
    }

    /// Command lines seen so far, program and arguments joined by spaces
    pub fn invocations(&self) -> Vec<String> {
        self.invocations.borrow().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<Vec<u8>> {
        let mut line = program.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg);
        }
        self.invocations.borrow_mut().push(line);

        self.output.clone().map_err(HookError::command)
    }
}
