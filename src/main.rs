//! skillget - install agent skills from GitHub
//!
//! Fetches a skill directory from a GitHub repository, copies it into a shared
//! skills store and links the skills directories of AI coding tools (Claude,
//! Codex, Gemini, Copilot, Cursor, OpenCode) to that store.

use clap::Parser;
use console::Style;
use miette::Diagnostic;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod frontmatter;
mod git;
mod installer;
mod logging;
mod operations;
mod platform;
mod source;
mod temp;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::Cli;
use config::RunContext;
use error::{Result, SkillError};
use logging::LogSession;

/// Dispatch in priority order: completions, log cleanup, skills cleanup,
/// uninstall, install.
fn run(cli: &Cli) -> Result<i32> {
    if let Some(shell) = cli.completions {
        commands::completions::run(shell);
        return Ok(0);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let ctx = RunContext::load(cli.dry_run, cli.elevated, args)?;

    if cli.clean_logs {
        return commands::maintenance::clean_logs(&ctx);
    }

    // Logging is best effort; a run never fails because of it
    let _session = match LogSession::start(&ctx.paths.log_dir) {
        Ok(session) => Some(session),
        Err(e) => {
            eprintln!(
                "{}",
                Style::new()
                    .yellow()
                    .apply_to(format!("Warning: logging disabled: {e}"))
            );
            None
        }
    };
    tracing::info!(dry_run = ctx.dry_run, elevated = ctx.elevated, "starting");

    if cli.clean_skills {
        return commands::maintenance::clean_skills(&ctx);
    }
    if cli.uninstall {
        return commands::uninstall::run(&ctx);
    }
    commands::install::run(cli, &ctx)
}

fn report(err: &SkillError) {
    match err {
        SkillError::Cancelled { reason } => {
            tracing::info!(reason = %reason, "cancelled");
            eprintln!("Cancelled: {reason}");
        }
        _ => {
            tracing::error!(error = %err, "fatal");
            eprintln!("{} {err}", Style::new().red().bold().apply_to("Error:"));
            if let Some(help) = err.help() {
                eprintln!("  {} {help}", Style::new().cyan().apply_to("help:"));
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            report(&e);
            e.exit_code()
        }
    };

    std::process::exit(code);
}
