//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::Parser;
use clap_complete::Shell;

use crate::platform::InstallTarget;

/// skillget - install agent skills from GitHub
///
/// Fetch a skill directory from any GitHub repository path and expose it to
/// your AI coding tools.
#[derive(Parser, Debug)]
#[command(
    name = "skillget",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install agent skills from GitHub into your AI coding tools",
    long_about = "skillget fetches a skill directory from a GitHub repository, copies it into a \
                  shared skills store (~/.agents/skills) and links each selected tool's skills \
                  directory (Claude, Codex, Gemini, Copilot, Cursor, OpenCode) to that store.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  skillget anthropics/skills                                  \x1b[90m# Browse a repository\x1b[0m\n   \
                  skillget https://github.com/anthropics/skills/tree/main/pdf \x1b[90m# Install one skill\x1b[0m\n   \
                  skillget owner/repo/skills/foo --for claude codex           \x1b[90m# Skip the tool prompt\x1b[0m\n   \
                  skillget owner/repo --dry-run                               \x1b[90m# Show what would happen\x1b[0m\n   \
                  skillget --uninstall                                        \x1b[90m# Remove installed skills\x1b[0m\n"
)]
pub struct Cli {
    /// GitHub location: owner/repo[/path], github:owner/repo or a github.com URL
    /// (https://github.com/owner/repo/tree/<ref>/<path>)
    #[arg(value_name = "LOCATION")]
    pub location: Option<String>,

    /// Show what would be done without changing any files
    #[arg(long)]
    pub dry_run: bool,

    /// Interactively remove installed skills
    #[arg(long)]
    pub uninstall: bool,

    /// Delete retained log files and exit
    #[arg(long)]
    pub clean_logs: bool,

    /// Remove empty skills directories
    #[arg(long)]
    pub clean_skills: bool,

    /// Install only for these tools (skips the tool prompt)
    #[arg(
        long = "for",
        value_name = "TARGET",
        num_args = 1..,
        value_enum,
        ignore_case = true
    )]
    pub targets: Vec<InstallTarget>,

    /// Copy the skill into each tool directory instead of linking to the shared store
    #[arg(long)]
    pub legacy: bool,

    /// Skip the install confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<Shell>,

    /// Marks a relaunched, already elevated process
    #[arg(long, hide = true)]
    pub elevated: bool,
}
