//! Minimax worst-case calculation for Mastermind feedback
//!
//! Given a probe and the hypothesis set, computes the largest number of
//! hypotheses that could survive any single feedback.

use crate::core::Code;
use crate::solver::entropy::partition;

/// Calculate the maximum remaining hypotheses for a probe
///
/// # Strategy
/// For each feedback the probe could receive:
/// - Count how many hypotheses would produce that feedback
/// - Return the maximum count (worst case)
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, CandidateUniverse};
/// use mastermind_solver::solver::minimax::calculate_max_remaining;
///
/// let alphabet = Alphabet::new(["A", "B"]).unwrap();
/// let universe = CandidateUniverse::new(&alphabet, 2).unwrap();
/// let probe = alphabet.parse_code("AB", 2).unwrap();
///
/// assert_eq!(calculate_max_remaining(&probe, universe.codes()), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(probe: &Code, hypotheses: &[Code]) -> usize {
    if hypotheses.is_empty() {
        return 0;
    }

    partition(probe, hypotheses).values().max().copied().unwrap_or(0)
}
