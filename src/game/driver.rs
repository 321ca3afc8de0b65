//! Game loop
//!
//! Sequences suggest → evaluate → prune against a known secret and records
//! each turn on the board.

use super::{Board, GameConfig, TurnRecord};
use crate::core::{Code, Feedback};
use crate::error::{Result, SolverError};
use crate::solver::GuessStrategy;
use tracing::{debug, info, warn};

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// No guess made yet
    Initialized,
    /// At least one guess made, secret not found
    Pruning,
    /// The last guess matched the secret
    Solved,
    /// The turn limit was reached, or there was nothing left to probe
    Exhausted,
    /// Feedback ruled out every candidate
    Contradicted,
}

impl GameState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted | Self::Contradicted)
    }
}

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Solved,
    Exhausted,
}

/// Summary of a finished game
#[derive(Debug, Clone)]
pub struct GameReport {
    pub outcome: GameOutcome,
    pub secret: Code,
    pub turns: Vec<TurnRecord>,
}

impl GameReport {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self.outcome, GameOutcome::Solved)
    }

    /// Number of guesses played
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }
}

/// One game against a known secret
pub struct Game<'c, S: GuessStrategy> {
    config: &'c GameConfig,
    secret: Code,
    strategy: S,
    board: Board,
    state: GameState,
}

impl<'c, S: GuessStrategy> Game<'c, S> {
    /// Start a game
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the secret does not fit the
    /// configured code length or alphabet.
    pub fn new(config: &'c GameConfig, secret: Code, strategy: S) -> Result<Self> {
        let in_alphabet = secret
            .symbols()
            .iter()
            .all(|s| s.index() < config.alphabet().len());
        if secret.len() != config.code_length() || !in_alphabet {
            return Err(SolverError::invalid(format!(
                "secret must be {} symbols from the alphabet [{}]",
                config.code_length(),
                config.alphabet()
            )));
        }

        Ok(Self {
            config,
            secret,
            strategy,
            board: Board::new(config.code_length()),
            state: GameState::Initialized,
        })
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Code {
        &self.secret
    }

    /// Play a single turn and return the new state
    ///
    /// Calling this on a finished game is a no-op.
    ///
    /// # Errors
    /// Propagates strategy failures. A contradiction moves the game to
    /// `Contradicted`, an empty probe source to `Exhausted`; either way the
    /// game is over.
    pub fn play_turn(&mut self) -> Result<GameState> {
        if self.state.is_terminal() {
            return Ok(self.state);
        }

        let remaining_before = self.strategy.remaining();
        let guess = match self.strategy.suggest() {
            Ok(guess) => guess,
            Err(err) => {
                self.state = match err {
                    SolverError::Contradiction { .. } => GameState::Contradicted,
                    _ => GameState::Exhausted,
                };
                warn!(turn = self.board.len() + 1, error = %err, "game aborted");
                return Err(err);
            }
        };

        let feedback = Feedback::evaluate(&self.secret, &guess)?;
        self.strategy.prune(&guess, feedback)?;
        let remaining_after = self.strategy.remaining();

        debug!(
            turn = self.board.len() + 1,
            %feedback,
            remaining_before,
            remaining_after,
            "turn played"
        );

        self.board.record(TurnRecord {
            guess,
            feedback,
            remaining_before,
            remaining_after,
        })?;

        let out_of_turns = self
            .config
            .max_turns()
            .is_some_and(|limit| self.board.len() >= limit);

        self.state = if feedback.is_solved(self.config.code_length()) {
            GameState::Solved
        } else if out_of_turns {
            GameState::Exhausted
        } else {
            GameState::Pruning
        };

        Ok(self.state)
    }

    /// Play until the game ends
    ///
    /// # Errors
    /// Same as [`Game::play_turn`].
    pub fn run(mut self) -> Result<GameReport> {
        while !self.state.is_terminal() {
            self.play_turn()?;
        }

        let outcome = if self.state == GameState::Solved {
            GameOutcome::Solved
        } else {
            GameOutcome::Exhausted
        };

        info!(
            outcome = ?outcome,
            turns = self.board.len(),
            secret = %self.secret.display(self.config.alphabet()),
            "game finished"
        );

        Ok(GameReport {
            outcome,
            secret: self.secret,
            turns: self.board.turns().to_vec(),
        })
    }
}
