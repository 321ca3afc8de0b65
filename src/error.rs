//! Solver error type
//!
//! Every failure in the core is fatal to the current game. Nothing here is
//! retried; the driver aborts and reports upward.

use thiserror::Error;

/// Errors raised by the feedback evaluator, hypothesis set and strategies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// Bad input at a call boundary (length mismatch, empty alphabet, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The hypothesis set was pruned to nothing
    ///
    /// Under truthful feedback the secret always survives pruning, so this
    /// means the feedback was wrong or the evaluator disagrees with the
    /// scorer used by the driver.
    #[error("No candidate is consistent with the {observations} observed feedback(s)")]
    Contradiction { observations: usize },

    /// `suggest` was called with nothing to choose from
    #[error("No probe source available to suggest a guess")]
    Exhausted,
}

impl SolverError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

/// Result alias used across the crate
pub type Result<T, E = SolverError> = std::result::Result<T, E>;
