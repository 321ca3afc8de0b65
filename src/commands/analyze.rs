//! Probe analysis command
//!
//! Scores one probe against the full candidate universe and compares it
//! with the best available opening.

use crate::core::{CandidateUniverse, Code, Feedback};
use crate::error::{Result, SolverError};
use crate::solver::entropy::{GuessMetrics, calculate_metrics, partition, select_best_guess};

/// Result of analyzing a probe
pub struct AnalysisResult {
    pub probe: Code,
    pub metrics: GuessMetrics,
    pub expected_reduction: f64,
    pub total_candidates: usize,
    /// Feedback buckets, best feedback first
    pub buckets: Vec<(Feedback, usize)>,
    /// Highest-entropy opening in the universe and its score
    pub best_probe: Code,
    pub best_entropy: f64,
}

impl AnalysisResult {
    /// Fraction of the best opening's information this probe achieves
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        if self.best_entropy > 0.0 {
            self.metrics.entropy / self.best_entropy
        } else {
            1.0
        }
    }
}

/// Analyze `probe` as an opening guess
///
/// # Errors
///
/// Returns an error if the probe does not belong to the universe.
pub fn analyze_code(universe: &CandidateUniverse, probe: Code) -> Result<AnalysisResult> {
    if !universe.contains(&probe) {
        return Err(SolverError::invalid(format!(
            "probe must be {} symbols from the alphabet",
            universe.code_length()
        )));
    }

    let codes = universe.codes();
    let metrics = calculate_metrics(&probe, codes);

    let mut buckets: Vec<(Feedback, usize)> = partition(&probe, codes).into_iter().collect();
    buckets.sort_unstable_by(|a, b| b.0.cmp(&a.0));

    let (best_probe, best_entropy) = select_best_guess(codes, codes)
        .map_or_else(|| (probe.clone(), metrics.entropy), |(c, e)| (c.clone(), e));

    Ok(AnalysisResult {
        expected_reduction: metrics.entropy.exp2(),
        total_candidates: codes.len(),
        probe,
        metrics,
        buckets,
        best_probe,
        best_entropy,
    })
}
