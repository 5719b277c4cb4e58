//! Human confirmation capability.
//!
//! Mutating shared state owned by another subsystem requires a yes/no answer.
//! Non-interactive callers must state their answer explicitly; consent is
//! never assumed.

use tracing::warn;

use crate::error::Result;

/// Yes/no confirmation.
pub trait Confirm {
    /// Ask `message`, with `default` as the suggested answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be obtained.
    fn confirm(&self, message: &str, default: bool) -> Result<bool>;
}

/// Answers without a human.
///
/// Returns the configured answer, or the caller's default when none is
/// configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractive {
    answer: Option<bool>,
}

impl NonInteractive {
    /// Always take the caller's default.
    pub fn use_default() -> Self {
        Self { answer: None }
    }

    /// Always answer `answer`.
    pub fn answer(answer: bool) -> Self {
        Self {
            answer: Some(answer),
        }
    }
}

impl Confirm for NonInteractive {
    fn confirm(&self, message: &str, default: bool) -> Result<bool> {
        let answer = self.answer.unwrap_or(default);
        warn!(prompt = %message, answer, "answering confirmation non-interactively");
        Ok(answer)
    }
}
