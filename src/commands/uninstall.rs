//! Uninstall command

use crate::config::RunContext;
use crate::error::{EXIT_FAILURE, Result};
use crate::operations::UninstallOperation;
use crate::ui::TerminalPrompter;

pub fn run(ctx: &RunContext) -> Result<i32> {
    let mut prompter = TerminalPrompter;
    let summary = UninstallOperation::new(ctx, &mut prompter).execute()?;

    if summary.removed > 0 {
        let verb = if ctx.dry_run { "Would uninstall" } else { "Uninstalled" };
        println!("{verb} {} skill(s)", summary.removed);
    }
    if summary.failed > 0 {
        eprintln!("{} skill(s) could not be removed; see the log for details", summary.failed);
        return Ok(EXIT_FAILURE);
    }
    Ok(0)
}
