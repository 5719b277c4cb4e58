//! Interactive confirmation.

use dialoguer::Confirm as Dialog;

use crate::core::prompt::Confirm;
use crate::error::Result;

/// Asks on the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct Interactive;

impl Confirm for Interactive {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        Dialog::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(Into::into)
    }
}
