//! Entropy-based Mastermind solver
//!
//! Implements Shannon entropy calculation for feedback distributions.
//! This is the foundation of information-theoretic solving.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_entropy, calculate_metrics, partition, shannon_entropy};
pub use selector::select_best_guess;
