//! Guess selection strategies
//!
//! Defines the `GuessStrategy` trait and concrete implementations. Each
//! strategy owns the hypothesis set for exactly one game.

use super::{HypothesisSet, ProbePool, entropy, minimax};
use crate::core::{CandidateUniverse, Code, Feedback};
use crate::error::{Result, SolverError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::fmt;
use tracing::debug;

/// A policy that proposes guesses and learns from feedback
pub trait GuessStrategy {
    /// Propose the next guess
    ///
    /// # Errors
    /// `SolverError::Contradiction` if feedback has ruled out every candidate,
    /// `SolverError::Exhausted` if there is nothing to choose from.
    fn suggest(&mut self) -> Result<Code>;

    /// Discard hypotheses inconsistent with `feedback` for `guess`
    ///
    /// # Errors
    /// `SolverError::InvalidInput` if `guess` has the wrong length.
    fn prune(&mut self, guess: &Code, feedback: Feedback) -> Result<()>;

    /// Read-only view of the current hypothesis set
    fn hypotheses(&self) -> &HypothesisSet;

    /// Number of hypotheses still consistent with all feedback
    fn remaining(&self) -> usize {
        self.hypotheses().len()
    }
}

/// Strategy selector used by the CLI and the benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum StrategyKind {
    /// Uniformly random consistent candidate
    #[value(alias = "random-consistent")]
    Random,
    /// Maximize Shannon entropy of the feedback partition
    #[default]
    #[value(alias = "entropy-efficient")]
    Entropy,
    /// Minimize the worst-case partition
    Minimax,
}

impl StrategyKind {
    pub const ALL: [Self; 3] = [Self::Random, Self::Entropy, Self::Minimax];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Entropy => "entropy",
            Self::Minimax => "minimax",
        }
    }

    /// Create a strategy kind from its name
    ///
    /// Supported names: "random", "random-consistent", "entropy",
    /// "entropy-efficient", "minimax".
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "random" | "random-consistent" => Some(Self::Random),
            "entropy" | "entropy-efficient" => Some(Self::Entropy),
            "minimax" => Some(Self::Minimax),
            _ => None,
        }
    }

    /// Build a fresh strategy for one game
    ///
    /// # Errors
    /// `SolverError::InvalidInput` if a fixed probe pool holds codes outside
    /// the universe.
    pub fn build<'a>(
        self,
        universe: &'a CandidateUniverse,
        options: &StrategyOptions,
    ) -> Result<StrategyType<'a>> {
        Ok(match self {
            Self::Random => StrategyType::Random(RandomStrategy::new(universe, options.seed)),
            Self::Entropy => {
                StrategyType::Entropy(EntropyStrategy::new(universe, options.probe_pool.clone())?)
            }
            Self::Minimax => {
                StrategyType::Minimax(MinimaxStrategy::new(universe, options.probe_pool.clone())?)
            }
        })
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Knobs shared by all strategies
#[derive(Debug, Clone, Default)]
pub struct StrategyOptions {
    /// Seed for the random strategy; `None` draws from the OS
    pub seed: Option<u64>,
    /// Probe pool for the scoring strategies
    pub probe_pool: ProbePool,
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType<'a> {
    Random(RandomStrategy),
    Entropy(EntropyStrategy<'a>),
    Minimax(MinimaxStrategy<'a>),
}

impl StrategyType<'_> {
    #[must_use]
    pub const fn kind(&self) -> StrategyKind {
        match self {
            Self::Random(_) => StrategyKind::Random,
            Self::Entropy(_) => StrategyKind::Entropy,
            Self::Minimax(_) => StrategyKind::Minimax,
        }
    }
}

impl GuessStrategy for StrategyType<'_> {
    fn suggest(&mut self) -> Result<Code> {
        match self {
            Self::Random(s) => s.suggest(),
            Self::Entropy(s) => s.suggest(),
            Self::Minimax(s) => s.suggest(),
        }
    }

    fn prune(&mut self, guess: &Code, feedback: Feedback) -> Result<()> {
        match self {
            Self::Random(s) => s.prune(guess, feedback),
            Self::Entropy(s) => s.prune(guess, feedback),
            Self::Minimax(s) => s.prune(guess, feedback),
        }
    }

    fn hypotheses(&self) -> &HypothesisSet {
        match self {
            Self::Random(s) => s.hypotheses(),
            Self::Entropy(s) => s.hypotheses(),
            Self::Minimax(s) => s.hypotheses(),
        }
    }
}

/// Random-consistent strategy
///
/// Picks a uniformly random candidate from the hypothesis set. Since the
/// secret is always in the set, every suggestion could be the winner.
pub struct RandomStrategy {
    hypotheses: HypothesisSet,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a random strategy, seeded for reproducibility if `seed` is given
    #[must_use]
    pub fn new(universe: &CandidateUniverse, seed: Option<u64>) -> Self {
        Self {
            hypotheses: HypothesisSet::new(universe),
            rng: seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64),
        }
    }
}

impl GuessStrategy for RandomStrategy {
    fn suggest(&mut self) -> Result<Code> {
        self.hypotheses.ensure_viable()?;
        self.hypotheses
            .candidates()
            .choose(&mut self.rng)
            .cloned()
            .ok_or(SolverError::Exhausted)
    }

    fn prune(&mut self, guess: &Code, feedback: Feedback) -> Result<()> {
        self.hypotheses.prune(guess, feedback).map(|_| ())
    }

    fn hypotheses(&self) -> &HypothesisSet {
        &self.hypotheses
    }
}

/// Pure entropy maximization strategy
///
/// Always selects the probe with the highest Shannon entropy over the
/// hypothesis set. Probes come from the configured `ProbePool`.
pub struct EntropyStrategy<'a> {
    universe: &'a [Code],
    hypotheses: HypothesisSet,
    pool: ProbePool,
}

impl<'a> EntropyStrategy<'a> {
    /// # Errors
    /// `SolverError::InvalidInput` if a fixed pool holds codes outside the universe.
    pub fn new(universe: &'a CandidateUniverse, pool: ProbePool) -> Result<Self> {
        validate_pool(universe, &pool)?;
        Ok(Self {
            universe: universe.codes(),
            hypotheses: HypothesisSet::new(universe),
            pool,
        })
    }

    #[must_use]
    pub const fn pool(&self) -> &ProbePool {
        &self.pool
    }
}

impl GuessStrategy for EntropyStrategy<'_> {
    fn suggest(&mut self) -> Result<Code> {
        self.hypotheses.ensure_viable()?;

        // One hypothesis left: it must be the secret
        if let Some(only) = self.hypotheses.sole_candidate() {
            return Ok(only.clone());
        }

        let probes = self.pool.probes(self.universe, &self.hypotheses);
        let (best, entropy) = entropy::select_best_guess(&probes, self.hypotheses.candidates())
            .ok_or(SolverError::Exhausted)?;

        debug!(
            entropy,
            probes = probes.len(),
            remaining = self.hypotheses.len(),
            pool = self.pool.label(),
            "selected max-entropy probe"
        );
        Ok(best.clone())
    }

    fn prune(&mut self, guess: &Code, feedback: Feedback) -> Result<()> {
        self.hypotheses.prune(guess, feedback).map(|_| ())
    }

    fn hypotheses(&self) -> &HypothesisSet {
        &self.hypotheses
    }
}

/// Pure minimax strategy
///
/// Always selects the probe that minimizes worst-case remaining hypotheses.
pub struct MinimaxStrategy<'a> {
    universe: &'a [Code],
    hypotheses: HypothesisSet,
    pool: ProbePool,
}

impl<'a> MinimaxStrategy<'a> {
    /// # Errors
    /// `SolverError::InvalidInput` if a fixed pool holds codes outside the universe.
    pub fn new(universe: &'a CandidateUniverse, pool: ProbePool) -> Result<Self> {
        validate_pool(universe, &pool)?;
        Ok(Self {
            universe: universe.codes(),
            hypotheses: HypothesisSet::new(universe),
            pool,
        })
    }
}

impl GuessStrategy for MinimaxStrategy<'_> {
    fn suggest(&mut self) -> Result<Code> {
        self.hypotheses.ensure_viable()?;

        if let Some(only) = self.hypotheses.sole_candidate() {
            return Ok(only.clone());
        }

        let probes = self.pool.probes(self.universe, &self.hypotheses);
        let (best, worst_case) = minimax::select_best_guess(&probes, self.hypotheses.candidates())
            .ok_or(SolverError::Exhausted)?;

        debug!(
            worst_case,
            probes = probes.len(),
            remaining = self.hypotheses.len(),
            pool = self.pool.label(),
            "selected minimax probe"
        );
        Ok(best.clone())
    }

    fn prune(&mut self, guess: &Code, feedback: Feedback) -> Result<()> {
        self.hypotheses.prune(guess, feedback).map(|_| ())
    }

    fn hypotheses(&self) -> &HypothesisSet {
        &self.hypotheses
    }
}

fn validate_pool(universe: &CandidateUniverse, pool: &ProbePool) -> Result<()> {
    let ProbePool::Fixed(codes) = pool else {
        return Ok(());
    };

    match codes.iter().find(|c| !universe.contains(c)) {
        Some(bad) => Err(SolverError::invalid(format!(
            "probe of length {} does not belong to the candidate universe",
            bad.len()
        ))),
        None => Ok(()),
    }
}
