//! Solve command
//!
//! Plays one game against a known secret and returns the solution path.

use crate::core::{CandidateUniverse, Code, Feedback};
use crate::error::Result;
use crate::game::{Game, GameConfig, GameState};
use crate::solver::entropy::{GuessMetrics, calculate_metrics};
use crate::solver::{GuessStrategy, StrategyKind, StrategyOptions};

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub strategy: StrategyKind,
    pub secret: Code,
    pub guesses: Vec<GuessStep>,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: Code,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Scored against the hypotheses before the guess; `None` once only one remained
    pub metrics: Option<GuessMetrics>,
}

/// Solve `secret` with a freshly built strategy
///
/// # Errors
///
/// Returns an error if:
/// - The secret does not fit the configuration
/// - The strategy cannot provide a guess (contradiction or empty probe pool)
pub fn solve_code(
    config: &GameConfig,
    universe: &CandidateUniverse,
    secret: Code,
    kind: StrategyKind,
    options: &StrategyOptions,
) -> Result<SolveResult> {
    let strategy = kind.build(universe, options)?;
    let mut game = Game::new(config, secret, strategy)?;
    let mut guesses = Vec::new();

    while !game.state().is_terminal() {
        let before = game.strategy().hypotheses().candidates().to_vec();
        game.play_turn()?;

        let Some(turn) = game.board().last() else {
            break;
        };

        let metrics = (before.len() > 1).then(|| calculate_metrics(&turn.guess, &before));

        guesses.push(GuessStep {
            guess: turn.guess.clone(),
            feedback: turn.feedback,
            candidates_before: turn.remaining_before,
            candidates_after: turn.remaining_after,
            metrics,
        });
    }

    Ok(SolveResult {
        success: game.state() == GameState::Solved,
        strategy: kind,
        secret: game.secret().clone(),
        guesses,
    })
}
