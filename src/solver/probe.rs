//! Probe pools for the scoring strategies
//!
//! A probe does not have to be a possible secret; it only has to split the
//! hypothesis set well. Restricting the pool trades guess quality for speed.

use super::HypothesisSet;
use crate::core::Code;
use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// Where the entropy and minimax strategies look for their next guess
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProbePool {
    /// Every code in the candidate universe, current hypotheses scanned first
    #[default]
    Universe,
    /// Only codes still in the hypothesis set
    Hypotheses,
    /// The universe while more than `threshold` hypotheses remain, then the hypothesis set
    Adaptive { threshold: usize },
    /// A fixed list supplied by the caller
    Fixed(Vec<Code>),
}

impl ProbePool {
    /// Default switch-over point for `Adaptive`
    pub const DEFAULT_THRESHOLD: usize = 64;

    /// Resolve the pool for the current turn, in scan order
    ///
    /// Selectors break ties by scan order, so putting the hypotheses ahead of
    /// the rest of the universe makes an equally informative probe that could
    /// also be the secret win.
    #[must_use]
    pub fn probes<'p>(
        &'p self,
        universe: &'p [Code],
        hypotheses: &'p HypothesisSet,
    ) -> Cow<'p, [Code]> {
        match self {
            Self::Universe => hypotheses_first(universe, hypotheses),
            Self::Hypotheses => Cow::Borrowed(hypotheses.candidates()),
            Self::Adaptive { threshold } => {
                if hypotheses.len() > *threshold {
                    hypotheses_first(universe, hypotheses)
                } else {
                    Cow::Borrowed(hypotheses.candidates())
                }
            }
            Self::Fixed(codes) => Cow::Borrowed(codes),
        }
    }

    /// Short label for logs and reports
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Universe => "universe",
            Self::Hypotheses => "hypotheses",
            Self::Adaptive { .. } => "adaptive",
            Self::Fixed(_) => "fixed",
        }
    }
}

/// The universe reordered so that current hypotheses come first
fn hypotheses_first<'p>(universe: &'p [Code], hypotheses: &'p HypothesisSet) -> Cow<'p, [Code]> {
    // Nothing pruned yet (or nothing left): universe order already qualifies
    if hypotheses.len() == universe.len() || hypotheses.is_empty() {
        return Cow::Borrowed(universe);
    }

    let members: FxHashSet<&Code> = hypotheses.candidates().iter().collect();
    let mut ordered = Vec::with_capacity(universe.len());
    ordered.extend_from_slice(hypotheses.candidates());
    ordered.extend(universe.iter().filter(|c| !members.contains(c)).cloned());
    Cow::Owned(ordered)
}
