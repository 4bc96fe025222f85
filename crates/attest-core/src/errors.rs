//! Contract-violation error types shared by every checking operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Canonical failure signal for the assertion toolkit.
///
/// `Display` yields the carried message verbatim; callers that intercept a
/// failure at a boundary can rely on the exact wording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "message")]
pub enum AttestError {
    /// A checked condition did not hold at runtime.
    #[error("{0}")]
    Failure(String),
    /// The caller invoked the wrong checking operation for the situation.
    ///
    /// The message names the operation that should have been used instead.
    #[error("{0}")]
    BadChoice(String),
}

impl AttestError {
    /// Creates a failed-expectation signal carrying the provided message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Creates a misuse signal carrying the provided message.
    pub fn bad_choice(message: impl Into<String>) -> Self {
        Self::BadChoice(message.into())
    }

    /// Returns the message carried by the failure signal.
    pub fn message(&self) -> &str {
        match self {
            Self::Failure(message) | Self::BadChoice(message) => message,
        }
    }

    /// Returns whether the signal marks a misuse of the toolkit itself
    /// rather than a failed runtime expectation.
    pub fn is_bad_choice(&self) -> bool {
        matches!(self, Self::BadChoice(_))
    }
}
