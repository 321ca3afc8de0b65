//! Minimax-based Mastermind solver
//!
//! Implements worst-case minimization for probe selection.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
