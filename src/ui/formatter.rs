//! Console rendering for hook output.
//!
//! Informational lines go to stdout, errors to stderr. Colors are applied
//! by `console` only when the stream is a terminal, so hook frameworks that
//! capture the output see the bare message text.

use console::style;

use crate::ui::LogSink;

/// Print an informational line to stdout.
pub fn display_info(message: &str) {
    println!("{}", style(message).green());
}

/// Print an error line to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", style(message).red().for_stderr());
}

/// [LogSink] backed by the process's stdout and stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn info(&self, message: &str) {
        display_info(message);
    }

    fn error(&self, message: &str) {
        display_error(message);
    }
}
