//! Pure entropy-based probe selection
//!
//! Selects the probe that maximizes Shannon entropy (expected information gain).

use super::calculator::calculate_entropy;
use crate::core::Code;
use rayon::prelude::*;
use std::cmp::Ordering;

/// Select best probe by maximizing entropy
///
/// Returns the probe with highest entropy and its entropy value, or `None` if
/// the pool is empty. Ties go to the probe that comes first in `probes`, no
/// matter how rayon splits the work.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, CandidateUniverse};
/// use mastermind_solver::solver::entropy::select_best_guess;
///
/// let alphabet = Alphabet::new(["A", "B", "C"]).unwrap();
/// let universe = CandidateUniverse::new(&alphabet, 2).unwrap();
/// let probes = vec![
///     alphabet.parse_code("AA", 2).unwrap(),
///     alphabet.parse_code("AB", 2).unwrap(),
/// ];
///
/// let (best, entropy) = select_best_guess(&probes, universe.codes()).unwrap();
/// assert_eq!(best, &probes[1]); // AB splits the universe more evenly than AA
/// assert!(entropy > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(probes: &'a [Code], hypotheses: &[Code]) -> Option<(&'a Code, f64)> {
    probes
        .par_iter()
        .enumerate()
        .map(|(index, probe)| (index, probe, calculate_entropy(probe, hypotheses)))
        .reduce_with(|best, next| {
            // Higher entropy wins; on a tie the earlier index wins
            match next.2.total_cmp(&best.2).then_with(|| best.0.cmp(&next.0)) {
                Ordering::Greater => next,
                _ => best,
            }
        })
        .map(|(_, probe, entropy)| (probe, entropy))
}
