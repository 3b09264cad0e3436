//! Shell completions command

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::Cli;

/// Write the completion script for `shell` to `out`
pub fn generate(shell: Shell, out: &mut dyn std::io::Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "skillget", out);
}

pub fn run(shell: Shell) {
    generate(shell, &mut std::io::stdout().lock());
}
