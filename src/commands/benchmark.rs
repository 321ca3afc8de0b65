//! Benchmark command
//!
//! Plays a batch of secrets with each requested strategy and collects
//! turn statistics.

use crate::core::{CandidateUniverse, Code};
use crate::error::Result;
use crate::game::{Game, GameConfig};
use crate::solver::{StrategyKind, StrategyOptions};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run for one strategy
pub struct BenchmarkResult {
    pub strategy: StrategyKind,
    pub total_games: usize,
    pub solved: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Turns taken → number of solved games
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.total_games - self.solved
    }
}

/// Draw `count` secrets reproducibly from `seed`
#[must_use]
pub fn random_secrets(config: &GameConfig, count: usize, seed: u64) -> Vec<Code> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| config.random_secret(&mut rng)).collect()
}

/// Play every secret with one strategy
///
/// Each game gets a fresh strategy. With a base seed, game `i` seeds its
/// random strategy with `seed + i` so runs are reproducible.
///
/// # Errors
/// Returns the first strategy failure; truthful feedback never contradicts,
/// so this only happens with a misconfigured probe pool.
pub fn run_benchmark(
    config: &GameConfig,
    universe: &CandidateUniverse,
    secrets: &[Code],
    kind: StrategyKind,
    options: &StrategyOptions,
    show_progress: bool,
) -> Result<BenchmarkResult> {
    let pb = if show_progress {
        progress_bar(secrets.len(), kind)
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for (i, secret) in secrets.iter().enumerate() {
        let game_options = StrategyOptions {
            seed: options.seed.map(|s| s.wrapping_add(i as u64)),
            probe_pool: options.probe_pool.clone(),
        };
        let strategy = kind.build(universe, &game_options)?;
        let report = Game::new(config, secret.clone(), strategy)?.run()?;

        let guesses = report.turn_count();
        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        max_guesses = max_guesses.max(guesses);

        if report.is_solved() {
            solved += 1;
            *distribution.entry(guesses).or_insert(0) += 1;
        }

        pb.inc(1);
        if i % 16 == 0 {
            pb.set_message(format!("avg {:.2}", total_guesses as f64 / (i + 1) as f64));
        }
    }

    pb.finish_and_clear();

    let duration = start.elapsed();
    let total_games = secrets.len();
    let average_guesses = if total_games == 0 {
        0.0
    } else {
        total_guesses as f64 / total_games as f64
    };

    info!(
        strategy = %kind,
        games = total_games,
        solved,
        average = average_guesses,
        "benchmark finished"
    );

    Ok(BenchmarkResult {
        strategy: kind,
        total_games,
        solved,
        total_guesses,
        average_guesses,
        min_guesses: if total_games == 0 { 0 } else { min_guesses },
        max_guesses,
        distribution,
        duration,
        games_per_second: total_games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Run the same secrets through several strategies
///
/// # Errors
/// Same as [`run_benchmark`].
pub fn compare_strategies(
    config: &GameConfig,
    universe: &CandidateUniverse,
    secrets: &[Code],
    kinds: &[StrategyKind],
    options: &StrategyOptions,
    show_progress: bool,
) -> Result<Vec<BenchmarkResult>> {
    kinds
        .iter()
        .map(|&kind| run_benchmark(config, universe, secrets, kind, options, show_progress))
        .collect()
}

fn progress_bar(len: usize, kind: StrategyKind) -> ProgressBar {
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} {prefix:>8} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_prefix(kind.name());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn small_config() -> GameConfig {
        GameConfig::new(Alphabet::new(["A", "B", "C", "D"]).unwrap(), 3, Some(10)).unwrap()
    }

    fn seeded() -> StrategyOptions {
        StrategyOptions {
            seed: Some(3),
            ..StrategyOptions::default()
        }
    }

    #[test]
    fn benchmark_runs() {
        let config = small_config();
        let universe = config.universe().unwrap();
        let secrets = random_secrets(&config, 10, 1);

        let result = run_benchmark(
            &config,
            &universe,
            &secrets,
            StrategyKind::Entropy,
            &seeded(),
            false,
        )
        .unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.solved, 10);
        assert_eq!(result.failed(), 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 10);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let config = small_config();
        let universe = config.universe().unwrap();
        let secrets = random_secrets(&config, 12, 2);

        let result = run_benchmark(
            &config,
            &universe,
            &secrets,
            StrategyKind::Random,
            &seeded(),
            false,
        )
        .unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
    }

    #[test]
    fn benchmark_empty_secret_list() {
        let config = small_config();
        let universe = config.universe().unwrap();

        let result = run_benchmark(
            &config,
            &universe,
            &[],
            StrategyKind::Minimax,
            &seeded(),
            false,
        )
        .unwrap();

        assert_eq!(result.total_games, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
        assert!(result.average_guesses.abs() < f64::EPSILON);
    }

    #[test]
    fn random_secrets_are_reproducible() {
        let config = small_config();
        assert_eq!(random_secrets(&config, 5, 99), random_secrets(&config, 5, 99));
        assert_eq!(random_secrets(&config, 5, 99).len(), 5);
    }

    #[test]
    fn compare_covers_each_strategy() {
        let config = small_config();
        let universe = config.universe().unwrap();
        let secrets = random_secrets(&config, 4, 8);

        let results = compare_strategies(
            &config,
            &universe,
            &secrets,
            &StrategyKind::ALL,
            &seeded(),
            false,
        )
        .unwrap();

        assert_eq!(results.len(), 3);
        for (result, kind) in results.iter().zip(StrategyKind::ALL) {
            assert_eq!(result.strategy, kind);
            assert_eq!(result.total_games, 4);
        }
    }
}
