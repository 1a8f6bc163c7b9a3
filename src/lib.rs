pub mod domain;
pub mod error;
pub mod fs;
pub mod git;
pub mod hooks;
pub mod outcome;
pub mod ui;

pub use error::{HookError, Result};
pub use outcome::HookOutcome;
