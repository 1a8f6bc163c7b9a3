//! Git hook entry points
//!
//! - prepare-commit-msg: prefix the commit message with the branch's issue id

pub mod prepare_commit_msg;

pub use prepare_commit_msg::{run_prepare_commit_msg_hook, HookOptions, PrepareCommitMsgHook};
