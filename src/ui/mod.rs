//! User-facing output - the informational and error sinks.
//!
//! Separates concerns:
//! - `formatter` - Console rendering of hook lines
//! - This module - The [LogSink] seam and an in-memory recorder for tests

use std::cell::RefCell;

pub mod formatter;

pub use formatter::{display_error, display_info, ConsoleSink};

/// Two independent output channels for single-line messages
pub trait LogSink {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Sink that keeps every line in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    info: RefCell<Vec<String>>,
    errors: RefCell<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info_lines(&self) -> Vec<String> {
        self.info.borrow().clone()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.errors.borrow().clone()
    }
}

impl LogSink for RecordingSink {
    fn info(&self, message: &str) {
        self.info.borrow_mut().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.borrow_mut().push(message.to_string());
    }
}
