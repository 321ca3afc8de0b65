//! Mastermind Solver
//!
//! A Mastermind code breaker built on exact feedback scoring, hypothesis
//! pruning and entropy-maximizing probe selection.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_solver::core::{Alphabet, CandidateUniverse, Feedback};
//! use mastermind_solver::solver::{GuessStrategy, StrategyKind, StrategyOptions};
//!
//! let alphabet = Alphabet::new(["red", "green", "blue"]).unwrap();
//! let universe = CandidateUniverse::new(&alphabet, 3).unwrap();
//! let secret = alphabet.parse_code("blue red red", 3).unwrap();
//!
//! let mut strategy = StrategyKind::Entropy
//!     .build(&universe, &StrategyOptions::default())
//!     .unwrap();
//!
//! loop {
//!     let guess = strategy.suggest().unwrap();
//!     let feedback = Feedback::evaluate(&secret, &guess).unwrap();
//!     if feedback.is_solved(3) {
//!         break;
//!     }
//!     strategy.prune(&guess, feedback).unwrap();
//! }
//! ```

// Core domain types
pub mod core;

// Error type
pub mod error;

// Solving algorithms
pub mod solver;

// Game configuration, history and loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Diagnostic logging
pub mod logging;

pub use error::{Result, SolverError};
