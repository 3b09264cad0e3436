//! Interactive presentation layer
//!
//! This module handles:
//! - Operator interaction (text input, confirmation, multi-select) behind the
//!   [`Prompter`] trait, so flows can be driven by scripted input in tests
//! - Tree navigation for picking the skill directory
//! - Destination conflict resolution
//! - Skill preview and progress spinners

pub mod conflict;
pub mod navigator;
pub mod preview;
pub mod progress;

use console::Style;

use crate::error::Result;

pub use conflict::resolve_destination;
pub use navigator::{SkillSelection, TreeNavigator};
pub use preview::SkillPreview;
pub use progress::Spinner;

/// Operator interaction used by every interactive flow
///
/// Prompts block until the operator answers; there is no timeout.
pub trait Prompter {
    /// Print an informational line
    fn say(&mut self, line: &str);

    /// Print a warning line
    fn warn(&mut self, line: &str);

    /// Read one line of free text
    fn input(&mut self, message: &str) -> Result<String>;

    /// Ask a yes/no question
    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;

    /// Pick any number of `options`; returns selected indices in order.
    /// An empty result means nothing was selected.
    fn multi_select(
        &mut self,
        message: &str,
        options: &[String],
        defaults: &[usize],
    ) -> Result<Vec<usize>>;
}

/// Prompter reading from the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn say(&mut self, line: &str) {
        println!("{line}");
    }

    fn warn(&mut self, line: &str) {
        eprintln!("{}", Style::new().yellow().apply_to(format!("Warning: {line}")));
    }

    fn input(&mut self, message: &str) -> Result<String> {
        Ok(inquire::Text::new(message).prompt()?)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        Ok(inquire::Confirm::new(message)
            .with_default(default)
            .with_help_message("Press Enter to accept the default, or answer y/n")
            .prompt()?)
    }

    fn multi_select(
        &mut self,
        message: &str,
        options: &[String],
        defaults: &[usize],
    ) -> Result<Vec<usize>> {
        if options.is_empty() {
            return Ok(Vec::new());
        }

        println!();
        let selection = inquire::MultiSelect::new(message, options.to_vec())
            .with_default(defaults)
            .with_page_size(10)
            .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter  esc cancel")
            .raw_prompt_skippable()?;

        Ok(selection
            .map(|chosen| chosen.into_iter().map(|option| option.index).collect())
            .unwrap_or_default())
    }
}
