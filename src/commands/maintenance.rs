//! `--clean-logs` and `--clean-skills`

use crate::config::RunContext;
use crate::error::Result;
use crate::operations::maintenance;
use crate::ui::TerminalPrompter;

pub fn clean_logs(ctx: &RunContext) -> Result<i32> {
    let removed = maintenance::clean_logs(ctx, &mut TerminalPrompter)?;
    if removed > 0 && !ctx.dry_run {
        println!("Removed {removed} log file(s)");
    }
    Ok(0)
}

pub fn clean_skills(ctx: &RunContext) -> Result<i32> {
    maintenance::clean_skills(ctx, &mut TerminalPrompter)?;
    Ok(0)
}
