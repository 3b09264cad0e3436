//! Install target selection

use crate::config::RunContext;
use crate::error::Result;
use crate::platform::{InstallTarget, detect_all};
use crate::ui::Prompter;

/// Targets preselected in the prompt: configured defaults, else detected tools
fn default_targets(ctx: &RunContext) -> Vec<InstallTarget> {
    if ctx.default_targets.is_empty() {
        detect_all(&ctx.paths.home)
    } else {
        ctx.default_targets.clone()
    }
}

/// Targets to install for.
///
/// Targets given on the command line are used as-is (deduplicated, in
/// order). Otherwise the operator picks from every supported target; an
/// empty pick is returned as an empty list.
pub fn select_targets(
    requested: &[InstallTarget],
    ctx: &RunContext,
    prompter: &mut dyn Prompter,
) -> Result<Vec<InstallTarget>> {
    if !requested.is_empty() {
        let mut targets = Vec::with_capacity(requested.len());
        for target in requested {
            if !targets.contains(target) {
                targets.push(*target);
            }
        }
        return Ok(targets);
    }

    let defaults = default_targets(ctx);
    let options: Vec<String> = InstallTarget::ALL
        .iter()
        .map(|t| format!("{} ({})", t.display_name(), ctx.paths.target_dir(*t).display()))
        .collect();
    let default_indices: Vec<usize> = InstallTarget::ALL
        .iter()
        .enumerate()
        .filter(|(_, t)| defaults.contains(t))
        .map(|(i, _)| i)
        .collect();

    let picked = prompter.multi_select("Install for which tools?", &options, &default_indices)?;
    let targets: Vec<InstallTarget> = picked
        .into_iter()
        .filter_map(|i| InstallTarget::ALL.get(i).copied())
        .collect();
    tracing::info!(targets = ?targets, "targets selected");
    Ok(targets)
}
