use std::process::ExitCode;

use clap::Parser;

use git_issue_prefix::fs::OsFileSystem;
use git_issue_prefix::git::SystemCommandRunner;
use git_issue_prefix::hooks::PrepareCommitMsgHook;
use git_issue_prefix::ui::ConsoleSink;

#[derive(clap::Parser)]
#[command(
    name = "git-issue-prefix",
    version,
    about = "prepare-commit-msg hook that prefixes commit messages with the issue id from the branch name"
)]
struct Args {
    #[arg(help = "Path to the commit message file, as passed by git")]
    commit_msg_file: Option<String>,

    // git passes these after the file path; they do not affect prefixing
    #[arg(id = "source", value_name = "SOURCE", hide = true)]
    _source: Option<String>,

    #[arg(id = "sha", value_name = "SHA", hide = true)]
    _sha: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let runner = SystemCommandRunner::new();
    let exit_code = PrepareCommitMsgHook::new(&runner, &OsFileSystem, &ConsoleSink)
        .run(args.commit_msg_file.as_deref().unwrap_or_default());

    ExitCode::from(exit_code as u8)
}
