//! Error types for rulestring parsing.

use std::fmt;

/// Errors arising from rulestring parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleError {
    /// The text does not match `B<digits>/S<digits>`.
    Malformed {
        /// The rejected input.
        text: String,
        /// What the scanner needed at the point of failure.
        expected: &'static str,
    },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { text, expected } => {
                write!(
                    f,
                    "rule {text:?} does not match B<digits>/S<digits>: expected {expected}"
                )
            }
        }
    }
}

impl std::error::Error for RuleError {}
