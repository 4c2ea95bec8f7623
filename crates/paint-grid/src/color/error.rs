//! Error type for hex color parsing.

use std::fmt;

/// A color string that is not `#rgb` or `#rrggbb`.
///
/// Keeps the offending text (whitespace trimmed) so CLI and config errors
/// can quote it back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError {
    input: String,
    reason: Reason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reason {
    /// Digit count after the optional `#` was neither 3 nor 6
    Length(usize),
    /// A character outside `0-9a-fA-F`
    Digit(char),
}

impl ParseColorError {
    pub(crate) fn length(input: &str, digits: usize) -> Self {
        Self {
            input: input.to_string(),
            reason: Reason::Length(digits),
        }
    }

    pub(crate) fn digit(input: &str, bad: char) -> Self {
        Self {
            input: input.to_string(),
            reason: Reason::Digit(bad),
        }
    }

    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            Reason::Length(n) => write!(
                f,
                "invalid color '{}': expected 3 or 6 hex digits, found {n}",
                self.input
            ),
            Reason::Digit(c) => write!(
                f,
                "invalid color '{}': '{c}' is not a hex digit",
                self.input
            ),
        }
    }
}

impl std::error::Error for ParseColorError {}
