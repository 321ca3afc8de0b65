//! Guess history
//!
//! The board records every (guess, feedback) pair in play order, along with
//! how many hypotheses survived the turn.

use crate::core::{Code, Feedback};
use crate::error::{Result, SolverError};

/// One completed turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnRecord {
    pub guess: Code,
    pub feedback: Feedback,
    pub remaining_before: usize,
    pub remaining_after: usize,
}

/// Append-only log of turns for one game
#[derive(Debug, Clone)]
pub struct Board {
    code_length: usize,
    turns: Vec<TurnRecord>,
}

impl Board {
    #[must_use]
    pub const fn new(code_length: usize) -> Self {
        Self {
            code_length,
            turns: Vec::new(),
        }
    }

    /// Append a turn
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the guess has the wrong length
    /// or the feedback is impossible for this code length.
    pub fn record(&mut self, turn: TurnRecord) -> Result<()> {
        if turn.guess.len() != self.code_length {
            return Err(SolverError::invalid(format!(
                "guess has {} symbols, expected {}",
                turn.guess.len(),
                self.code_length
            )));
        }
        if !turn.feedback.fits(self.code_length) {
            return Err(SolverError::invalid(format!(
                "feedback {} is impossible for codes of length {}",
                turn.feedback, self.code_length
            )));
        }
        self.turns.push(turn);
        Ok(())
    }

    /// Drop the most recent turn (interactive undo)
    pub fn undo(&mut self) -> Option<TurnRecord> {
        self.turns.pop()
    }

    /// Forget every turn
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    #[inline]
    #[must_use]
    pub fn turns(&self) -> &[TurnRecord] {
        &self.turns
    }

    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&TurnRecord> {
        self.turns.last()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Whether the last recorded feedback was all black pegs
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last()
            .is_some_and(|turn| turn.feedback.is_solved(self.code_length))
    }
}
