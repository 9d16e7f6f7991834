//! Caller-side input validation shared by chat, scan and tracking entry.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejected user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Input is empty or whitespace-only.
    Blank,
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "input must not be blank"),
        }
    }
}

impl Error for InputError {}

/// Returns `value` unchanged when it has any non-whitespace character.
pub fn require_non_blank(value: &str) -> Result<&str, InputError> {
    if value.trim().is_empty() {
        return Err(InputError::Blank);
    }
    Ok(value)
}
