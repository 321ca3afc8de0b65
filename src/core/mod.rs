//! Core domain types for Mastermind
//!
//! Codes, feedback scoring and the candidate universe. Everything here is
//! pure and deterministic.

mod code;
mod feedback;
mod universe;

pub use code::{Alphabet, Code, CodeDisplay, Symbol};
pub use feedback::Feedback;
pub use universe::CandidateUniverse;
