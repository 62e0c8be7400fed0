//! Console input port
//!
//! Commands ask questions through [`Prompt`] so the interactive flows can be
//! driven by a script in tests.

use dialoguer::Select;

use crate::error::Result;

/// Asks the user to choose among items.
pub trait Prompt {
    /// Returns the chosen index, or `None` when the user cancels.
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>>;
}

/// Terminal prompt backed by dialoguer.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn select(&mut self, prompt: &str, items: &[String]) -> Result<Option<usize>> {
        let choice = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact_opt()?;
        Ok(choice)
    }
}
