//! Shannon entropy calculation for Mastermind feedback
//!
//! Given a probe and the hypothesis set, computes the expected information gain.

use crate::core::{Code, Feedback};
use rustc_hash::FxHashMap;

/// Comprehensive metrics for evaluating a probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this probe
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a probe against the hypotheses
///
/// Returns the expected information gain in bits.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the fraction of hypotheses that would answer with feedback x.
///
/// # Examples
/// ```
/// use mastermind_solver::core::{Alphabet, CandidateUniverse};
/// use mastermind_solver::solver::entropy::calculate_entropy;
///
/// let alphabet = Alphabet::new(["A", "B"]).unwrap();
/// let universe = CandidateUniverse::new(&alphabet, 2).unwrap();
/// let probe = alphabet.parse_code("AB", 2).unwrap();
///
/// // AB splits {AA, AB, BA, BB} into (1,0) x2, (2,0) x1, (0,2) x1 = 1.5 bits
/// let entropy = calculate_entropy(&probe, universe.codes());
/// assert!((entropy - 1.5).abs() < 1e-9);
/// ```
#[must_use]
pub fn calculate_entropy(probe: &Code, hypotheses: &[Code]) -> f64 {
    if hypotheses.is_empty() {
        return 0.0;
    }

    shannon_entropy(&partition(probe, hypotheses))
}

/// Group hypotheses by the feedback they would give for `probe`
///
/// Each hypothesis plays the secret, matching how the hypothesis set prunes.
#[must_use]
pub fn partition(probe: &Code, hypotheses: &[Code]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for hypothesis in hypotheses {
        let feedback = Feedback::calculate(hypothesis.symbols(), probe.symbols());
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

/// Calculate Shannon entropy from a feedback distribution
///
/// H = -Σ p * log₂(p)
///
/// Bucket sizes are summed in sorted order, so two distributions with the
/// same shape produce bit-identical results regardless of hash order.
///
/// # Properties
/// - Returns 0.0 for a certain outcome (one bucket with p=1)
/// - Maximized for a uniform distribution
/// - Always in range [0, log₂(n)] for n buckets
#[must_use]
pub fn shannon_entropy<S>(counts: &std::collections::HashMap<Feedback, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let mut sizes: Vec<usize> = counts.values().copied().filter(|&c| c > 0).collect();
    sizes.sort_unstable();

    let total = sizes.iter().sum::<usize>() as f64;
    if total == 0.0 {
        return 0.0;
    }

    sizes
        .into_iter()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate comprehensive metrics for a probe
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(probe: &Code, hypotheses: &[Code]) -> GuessMetrics {
    if hypotheses.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = partition(probe, hypotheses);
    let total = hypotheses.len() as f64;

    let expected_remaining: f64 = counts
        .values()
        .map(|&size| {
            let p = size as f64 / total;
            p * size as f64
        })
        .sum();

    let max_partition = counts.values().copied().max().unwrap_or(0);

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition,
    }
}
