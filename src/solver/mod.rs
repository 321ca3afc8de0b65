//! Mastermind solving algorithms
//!
//! The hypothesis set tracks which codes are still possible; the strategies
//! decide what to guess next.

pub mod entropy;
mod hypothesis;
pub mod minimax;
mod probe;
pub mod strategy;

pub use hypothesis::HypothesisSet;
pub use probe::ProbePool;
pub use strategy::{
    EntropyStrategy, GuessStrategy, MinimaxStrategy, RandomStrategy, StrategyKind, StrategyOptions,
    StrategyType,
};
