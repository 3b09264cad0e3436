//! Install command

use console::Style;

use crate::cli::Cli;
use crate::config::RunContext;
use crate::error::{Result, SkillError};
use crate::git::SystemGit;
use crate::operations::{InstallOperation, InstallOptions, InstallOutcome};
use crate::platform;
use crate::ui::{Spinner, TerminalPrompter};

/// Run the install flow; returns the process exit code
pub fn run(cli: &Cli, ctx: &RunContext) -> Result<i32> {
    let location = cli.location.clone().ok_or(SkillError::MissingLocation)?;
    let options = InstallOptions {
        location,
        targets: cli.targets.clone(),
        legacy: cli.legacy,
        yes: cli.yes,
        show_progress: Spinner::terminal_attached(),
    };

    let git = SystemGit::from_env();
    let mut prompter = TerminalPrompter;
    let outcome =
        InstallOperation::new(ctx, &git, platform::native(), &mut prompter).execute(&options)?;

    match outcome {
        InstallOutcome::Installed {
            skill_name,
            locations,
        } => {
            let verb = if ctx.dry_run { "Would install" } else { "Installed" };
            println!();
            println!(
                "{} {verb} {}",
                Style::new().green().bold().apply_to("✓"),
                Style::new().bold().apply_to(&skill_name)
            );
            for location in locations {
                println!("  {}", Style::new().dim().apply_to(location.display()));
            }
            Ok(0)
        }
        InstallOutcome::Relaunched(code) => {
            println!("Elevated install finished with exit code {code}");
            Ok(code)
        }
    }
}
