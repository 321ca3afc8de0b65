//! Property-based tests for hypothesis pruning and the strategies
//!
//! Tests the following properties:
//! 1. Soundness: the secret survives every truthful prune
//! 2. Consistency: every survivor agrees with all recorded feedback
//! 3. Monotonic shrink: each prune yields a subset of the previous set
//! 4. Termination: random-consistent finishes within k^n turns
//! 5. Quality: entropy beats random-consistent on average
//! 6. Contradiction: inconsistent feedback is reported on the next suggest

use mastermind_solver::SolverError;
use mastermind_solver::core::{Alphabet, CandidateUniverse, Code, Feedback};
use mastermind_solver::game::{Game, GameConfig};
use mastermind_solver::solver::{
    GuessStrategy, HypothesisSet, ProbePool, RandomStrategy, StrategyKind, StrategyOptions,
};
use proptest::prelude::*;
use std::collections::HashSet;

fn alphabet(size: usize) -> Alphabet {
    Alphabet::new((0..size).map(|i| format!("s{i}"))).expect("valid alphabet")
}

fn code(alphabet: &Alphabet, indices: &[usize]) -> Code {
    let symbols: Vec<_> = indices
        .iter()
        .map(|&i| alphabet.symbol(i).expect("index in range"))
        .collect();
    Code::new(symbols)
}

/// Small game: alphabet size, secret and a handful of guesses
fn small_game() -> impl Strategy<Value = (usize, Vec<usize>, Vec<Vec<usize>>)> {
    (2usize..=5, 1usize..=4).prop_flat_map(|(k, n)| {
        (
            Just(k),
            prop::collection::vec(0..k, n),
            prop::collection::vec(prop::collection::vec(0..k, n), 1..6),
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn proptest_pruning_is_sound_and_consistent((k, secret, guesses) in small_game()) {
        let alphabet = alphabet(k);
        let universe = CandidateUniverse::new(&alphabet, secret.len()).unwrap();
        let secret = code(&alphabet, &secret);
        let mut set = HypothesisSet::new(&universe);
        let mut history = Vec::new();

        for guess in &guesses {
            let guess = code(&alphabet, guess);
            let feedback = Feedback::evaluate(&secret, &guess).unwrap();
            set.prune(&guess, feedback).unwrap();
            history.push((guess, feedback));

            prop_assert!(set.contains(&secret));
            for candidate in set.candidates() {
                for (g, f) in &history {
                    prop_assert_eq!(Feedback::evaluate(candidate, g).unwrap(), *f);
                }
            }
        }
        prop_assert!(set.ensure_viable().is_ok());
    }

    #[test]
    fn proptest_pruning_shrinks_monotonically((k, secret, guesses) in small_game()) {
        let alphabet = alphabet(k);
        let universe = CandidateUniverse::new(&alphabet, secret.len()).unwrap();
        let secret = code(&alphabet, &secret);
        let mut set = HypothesisSet::new(&universe);

        for guess in &guesses {
            let before: HashSet<Code> = set.candidates().iter().cloned().collect();
            let guess = code(&alphabet, guess);
            let feedback = Feedback::evaluate(&secret, &guess).unwrap();

            let removed = set.prune(&guess, feedback).unwrap();

            prop_assert_eq!(before.len(), set.len() + removed);
            prop_assert!(set.candidates().iter().all(|c| before.contains(c)));
        }
    }

    #[test]
    fn proptest_random_consistent_terminates(
        (k, secret, _) in small_game(),
        seed in any::<u64>(),
    ) {
        let config = GameConfig::new(alphabet(k), secret.len(), None).unwrap();
        let universe = config.universe().unwrap();
        let secret = code(config.alphabet(), &secret);
        let strategy = RandomStrategy::new(&universe, Some(seed));

        let report = Game::new(&config, secret.clone(), strategy).unwrap().run().unwrap();

        prop_assert!(report.is_solved());
        prop_assert!(report.turn_count() <= universe.len());
        prop_assert_eq!(&report.turns.last().unwrap().guess, &secret);

        // Every guess but the last was consistent and then eliminated
        let guesses: HashSet<&Code> = report.turns.iter().map(|t| &t.guess).collect();
        prop_assert_eq!(guesses.len(), report.turn_count());
    }

    #[test]
    fn proptest_suggestions_stay_in_context(
        (k, secret, _) in small_game(),
        seed in any::<u64>(),
    ) {
        let alphabet = alphabet(k);
        let universe = CandidateUniverse::new(&alphabet, secret.len()).unwrap();
        let secret = code(&alphabet, &secret);
        let options = StrategyOptions { seed: Some(seed), probe_pool: ProbePool::Hypotheses };

        for kind in StrategyKind::ALL {
            let mut strategy = kind.build(&universe, &options).unwrap();
            for _ in 0..universe.len() {
                let guess = strategy.suggest().unwrap();
                prop_assert!(strategy.hypotheses().contains(&guess));
                let feedback = Feedback::evaluate(&secret, &guess).unwrap();
                if feedback.is_solved(secret.len()) {
                    break;
                }
                strategy.prune(&guess, feedback).unwrap();
            }
        }
    }
}

fn average_turns(config: &GameConfig, secrets: &[Code], kind: StrategyKind, seeds: &[u64]) -> f64 {
    let universe = config.universe().unwrap();
    let mut total = 0;
    let mut games = 0;

    for &seed in seeds {
        let options = StrategyOptions {
            seed: Some(seed),
            ..StrategyOptions::default()
        };
        for secret in secrets {
            let strategy = kind.build(&universe, &options).unwrap();
            let report = Game::new(config, secret.clone(), strategy).unwrap().run().unwrap();
            assert!(report.is_solved());
            total += report.turn_count();
            games += 1;
        }
    }

    total as f64 / games as f64
}

#[test]
fn entropy_beats_random_consistent_on_average() {
    let config = GameConfig::new(alphabet(6), 4, None).unwrap();
    let secrets = mastermind_solver::commands::random_secrets(&config, 150, 2024);

    let entropy = average_turns(&config, &secrets, StrategyKind::Entropy, &[0]);
    let random = average_turns(&config, &secrets, StrategyKind::Random, &[1, 2, 3, 4, 5]);

    assert!(
        entropy < random,
        "entropy averaged {entropy:.3} turns, random-consistent {random:.3}"
    );
}

#[test]
fn inconsistent_feedback_is_a_contradiction() {
    let alphabet = Alphabet::new(["R", "G", "B"]).unwrap();
    let universe = CandidateUniverse::new(&alphabet, 4).unwrap();
    let guess = alphabet.parse_code("RGBR", 4).unwrap();

    for kind in StrategyKind::ALL {
        let mut strategy = kind.build(&universe, &StrategyOptions::default()).unwrap();
        strategy.prune(&guess, Feedback::new(3, 1)).unwrap();
        assert_eq!(strategy.remaining(), 0);
        assert_eq!(
            strategy.suggest(),
            Err(SolverError::Contradiction { observations: 1 })
        );
    }
}

#[test]
fn contradicting_observations_are_detected() {
    let alphabet = Alphabet::new(["A", "B", "C"]).unwrap();
    let universe = CandidateUniverse::new(&alphabet, 3).unwrap();
    let mut strategy = StrategyKind::Entropy
        .build(&universe, &StrategyOptions::default())
        .unwrap();

    // No code has zero A's yet all three positions A
    let aaa = alphabet.parse_code("AAA", 3).unwrap();
    strategy.prune(&aaa, Feedback::new(0, 0)).unwrap();
    assert!(strategy.remaining() > 0);
    strategy.prune(&aaa, Feedback::new(3, 0)).unwrap();

    assert_eq!(
        strategy.suggest(),
        Err(SolverError::Contradiction { observations: 2 })
    );
}

#[test]
fn two_symbol_scenario_narrows_to_secret() {
    let alphabet = Alphabet::new(["A", "B"]).unwrap();
    let universe = CandidateUniverse::new(&alphabet, 2).unwrap();
    let mut set = HypothesisSet::new(&universe);

    let aa = alphabet.parse_code("AA", 2).unwrap();
    set.prune(&aa, Feedback::new(1, 0)).unwrap();
    let remaining: HashSet<Code> = set.candidates().iter().cloned().collect();
    let expected: HashSet<Code> = ["AB", "BA"]
        .iter()
        .map(|s| alphabet.parse_code(s, 2).unwrap())
        .collect();
    assert_eq!(remaining, expected);

    let ba = alphabet.parse_code("BA", 2).unwrap();
    set.prune(&ba, Feedback::new(0, 2)).unwrap();
    assert_eq!(set.sole_candidate(), Some(&alphabet.parse_code("AB", 2).unwrap()));
}
