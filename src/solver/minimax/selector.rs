//! Minimax-based probe selection
//!
//! Selects the probe that minimizes the worst-case number of remaining hypotheses.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// Select best probe by minimizing worst-case remaining hypotheses
///
/// Among probes with the same worst case, one that could itself be the secret
/// is preferred, then the first in scan order. Returns `None` if the pool is
/// empty.
///
/// # Examples
/// ```
/// use mastermind_solver::core::Alphabet;
/// use mastermind_solver::solver::minimax::select_best_guess;
///
/// let alphabet = Alphabet::new(["A", "B", "C"]).unwrap();
/// let hypotheses = vec![
///     alphabet.parse_code("AB", 2).unwrap(),
///     alphabet.parse_code("BA", 2).unwrap(),
/// ];
/// let probes = vec![
///     alphabet.parse_code("CC", 2).unwrap(),
///     alphabet.parse_code("AB", 2).unwrap(),
/// ];
///
/// let (best, worst_case) = select_best_guess(&probes, &hypotheses).unwrap();
/// assert_eq!(best, &probes[1]);
/// assert_eq!(worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(probes: &'a [Code], hypotheses: &[Code]) -> Option<(&'a Code, usize)> {
    let is_hypothesis: FxHashSet<&Code> = hypotheses.iter().collect();

    probes
        .par_iter()
        .enumerate()
        .map(|(index, probe)| {
            let worst_case = calculate_max_remaining(probe, hypotheses);
            // Lower key is better
            ((worst_case, !is_hypothesis.contains(probe), index), probe)
        })
        .min_by_key(|(key, _)| *key)
        .map(|((worst_case, _, _), probe)| (probe, worst_case))
}
