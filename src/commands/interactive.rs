//! Interactive CLI mode
//!
//! The user holds the secret; the solver suggests guesses and the user
//! answers with black/white peg counts.

use crate::core::{CandidateUniverse, Code, Feedback};
use crate::error::{Result, SolverError};
use crate::game::{Board, GameConfig, TurnRecord};
use crate::output::formatters::{colored_code, feedback_pegs};
use crate::solver::entropy::calculate_metrics;
use crate::solver::{GuessStrategy, StrategyKind, StrategyOptions, StrategyType};
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Solver state for one interactive game
///
/// Undo rebuilds the strategy and replays the board, so the hypothesis set
/// itself never grows back.
pub struct Session<'u> {
    universe: &'u CandidateUniverse,
    kind: StrategyKind,
    options: StrategyOptions,
    strategy: StrategyType<'u>,
    board: Board,
    pending: Option<Code>,
    max_turns: Option<usize>,
}

impl<'u> Session<'u> {
    /// # Errors
    /// Returns an error if the strategy cannot be built.
    pub fn new(
        universe: &'u CandidateUniverse,
        kind: StrategyKind,
        options: StrategyOptions,
    ) -> Result<Self> {
        Ok(Self {
            universe,
            kind,
            strategy: kind.build(universe, &options)?,
            options,
            board: Board::new(universe.code_length()),
            pending: None,
            max_turns: None,
        })
    }

    /// Stop suggesting once `max_turns` guesses have been answered
    #[must_use]
    pub fn with_turn_limit(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    /// True when the turn limit is reached without solving the game
    #[must_use]
    pub fn is_out_of_turns(&self) -> bool {
        !self.board.is_solved() && self.max_turns.is_some_and(|limit| self.board.len() >= limit)
    }

    /// The guess awaiting feedback, computing it if needed
    ///
    /// # Errors
    /// `SolverError::Contradiction` if earlier feedback was inconsistent,
    /// `SolverError::Exhausted` once the turn limit is used up.
    pub fn suggestion(&mut self) -> Result<Code> {
        if self.is_out_of_turns() {
            return Err(SolverError::Exhausted);
        }
        if let Some(guess) = &self.pending {
            return Ok(guess.clone());
        }
        let guess = self.strategy.suggest()?;
        self.pending = Some(guess.clone());
        Ok(guess)
    }

    /// Apply feedback for the pending guess; returns true if it solved the game
    ///
    /// # Errors
    /// `SolverError::InvalidInput` if there is no pending guess or the
    /// feedback is impossible for this code length.
    pub fn submit(&mut self, feedback: Feedback) -> Result<bool> {
        let code_length = self.board.code_length();
        if !feedback.fits(code_length) {
            return Err(SolverError::invalid(format!(
                "feedback {feedback} is impossible for codes of length {code_length}"
            )));
        }
        let guess = self
            .pending
            .take()
            .ok_or_else(|| SolverError::invalid("no guess awaiting feedback"))?;

        let remaining_before = self.strategy.remaining();
        self.strategy.prune(&guess, feedback)?;
        self.board.record(TurnRecord {
            guess,
            feedback,
            remaining_before,
            remaining_after: self.strategy.remaining(),
        })?;

        Ok(feedback.is_solved(code_length))
    }

    /// Take back the last feedback; returns false if there was nothing to undo
    ///
    /// # Errors
    /// Returns an error if the strategy cannot be rebuilt.
    pub fn undo(&mut self) -> Result<bool> {
        if self.board.undo().is_none() {
            return Ok(false);
        }

        self.strategy = self.kind.build(self.universe, &self.options)?;
        for turn in self.board.turns() {
            self.strategy.prune(&turn.guess, turn.feedback)?;
        }
        self.pending = None;
        Ok(true)
    }

    /// Start over with a fresh strategy
    ///
    /// # Errors
    /// Returns an error if the strategy cannot be rebuilt.
    pub fn reset(&mut self) -> Result<()> {
        self.strategy = self.kind.build(self.universe, &self.options)?;
        self.board.clear();
        self.pending = None;
        Ok(())
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.strategy.remaining()
    }

    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        self.strategy.hypotheses().candidates()
    }
}

/// Run the interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or the
/// strategy cannot be built.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_interactive(
    config: &GameConfig,
    universe: &CandidateUniverse,
    kind: StrategyKind,
    options: StrategyOptions,
) -> anyhow::Result<()> {
    let alphabet = config.alphabet();
    let code_length = config.code_length();

    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "  Mastermind Solver - Interactive Mode".bright_cyan().bold());
    println!("{}\n", "═".repeat(60).bright_cyan());
    println!("Think of a secret of {code_length} from: {alphabet}");
    println!("After each guess, enter black and white pegs, e.g. '2 1'.");
    println!("Commands: 'win', 'undo', 'new', 'quit'\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut session = Session::new(universe, kind, options)?.with_turn_limit(config.max_turns());

    loop {
        let turn = session.board().len() + 1;
        let remaining = session.remaining();

        let guess = match session.suggestion() {
            Ok(guess) => guess,
            Err(e)
                if session.is_out_of_turns()
                    || matches!(e, SolverError::Contradiction { .. }) =>
            {
                let message = if session.is_out_of_turns() {
                    "Out of turns without cracking the code."
                } else {
                    "No code fits that feedback. Some answer was probably wrong."
                };
                println!("\n{}", message.red());
                println!("Type 'undo' to go back, or 'new' to start over.\n");
                let Some(line) = prompt(&mut lines, "Command")? else {
                    return Ok(());
                };
                match line.as_str() {
                    "undo" | "u" => {
                        session.undo()?;
                    }
                    "new" | "n" => session.reset()?,
                    "quit" | "q" | "exit" => return Ok(()),
                    _ => {}
                }
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        println!("{}", "─".repeat(60));
        println!("Turn {turn}: {remaining} candidates remaining");
        println!("{}", "─".repeat(60));

        let metrics = calculate_metrics(&guess, session.candidates());
        println!("\nSuggested guess: {}", colored_code(&guess, alphabet));
        if remaining > 1 {
            println!("   Entropy:          {:.3} bits", metrics.entropy);
            println!("   Expected remain:  {:.1} candidates", metrics.expected_remaining);
            println!("   Worst case:       {} candidates", metrics.max_partition);
        }
        println!();

        if (2..=10).contains(&remaining) {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.display(alphabet));
            }
            println!();
        }

        let Some(input) = prompt(&mut lines, "Feedback (black white)")? else {
            return Ok(());
        };

        let feedback = match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                session.reset()?;
                println!("\nNew game started!\n");
                continue;
            }
            "undo" | "u" => {
                if session.undo()? {
                    println!("Undone! Back to turn {}\n", session.board().len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
                continue;
            }
            "win" | "correct" | "solved" => Feedback::solved(code_length),
            other => {
                let Some(feedback) = Feedback::parse(other) else {
                    println!("{}", "Invalid feedback! Enter two numbers, e.g. '1 2'.\n".red());
                    continue;
                };
                feedback
            }
        };

        match session.submit(feedback) {
            Ok(true) => {
                print_victory(&session, config);
                let again = prompt(&mut lines, "Play again? (yes/no)")?;
                if matches!(again.as_deref(), Some("yes" | "y")) {
                    session.reset()?;
                    println!("\nNew game started!\n");
                } else {
                    println!("\nThanks for playing!\n");
                    return Ok(());
                }
            }
            Ok(false) => {}
            Err(e) => println!("{}\n", e.to_string().red()),
        }
    }
}

fn print_victory(session: &Session<'_>, config: &GameConfig) {
    let turns = session.board().len();
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!("{}", "    C O D E   C R A C K E D".bright_green().bold());
    println!("{}", "═".repeat(60).bright_cyan());
    println!(
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );
    println!("\n  Guess history:");
    for (i, turn) in session.board().turns().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_code(&turn.guess, config.alphabet()),
            feedback_pegs(turn.feedback, config.code_length())
        );
    }
    println!("\n{}\n", "═".repeat(60).bright_cyan());
}

/// Prompt and read one trimmed, lowercased line; `None` on end of input
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, label: &str) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    lines
        .next()
        .transpose()
        .map(|line| line.map(|l| l.trim().to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn setup() -> (Alphabet, CandidateUniverse) {
        let alphabet = Alphabet::new(["A", "B"]).unwrap();
        let universe = CandidateUniverse::new(&alphabet, 2).unwrap();
        (alphabet, universe)
    }

    #[test]
    fn session_plays_to_solution() {
        let (alphabet, universe) = setup();
        let secret = alphabet.parse_code("BA", 2).unwrap();
        let mut session =
            Session::new(&universe, StrategyKind::Entropy, StrategyOptions::default()).unwrap();

        for _ in 0..4 {
            let guess = session.suggestion().unwrap();
            let feedback = Feedback::evaluate(&secret, &guess).unwrap();
            if session.submit(feedback).unwrap() {
                assert_eq!(session.board().last().unwrap().guess, secret);
                return;
            }
        }
        panic!("session did not solve BA");
    }

    #[test]
    fn suggestion_is_stable_until_feedback() {
        let (_, universe) = setup();
        let options = StrategyOptions {
            seed: Some(4),
            ..StrategyOptions::default()
        };
        let mut session = Session::new(&universe, StrategyKind::Random, options).unwrap();
        assert_eq!(session.suggestion().unwrap(), session.suggestion().unwrap());
    }

    #[test]
    fn submit_without_pending_guess_fails() {
        let (_, universe) = setup();
        let mut session =
            Session::new(&universe, StrategyKind::Minimax, StrategyOptions::default()).unwrap();
        assert!(session.submit(Feedback::new(0, 0)).is_err());
    }

    #[test]
    fn impossible_feedback_is_rejected() {
        let (_, universe) = setup();
        let mut session =
            Session::new(&universe, StrategyKind::Entropy, StrategyOptions::default()).unwrap();
        session.suggestion().unwrap();
        assert!(session.submit(Feedback::new(1, 1)).is_err());
        assert!(session.board().is_empty());
    }

    #[test]
    fn undo_restores_candidates() {
        let (alphabet, universe) = setup();
        let mut session =
            Session::new(&universe, StrategyKind::Entropy, StrategyOptions::default()).unwrap();

        let guess = session.suggestion().unwrap();
        let secret = alphabet.parse_code("AB", 2).unwrap();
        let feedback = Feedback::evaluate(&secret, &guess).unwrap();
        if session.submit(feedback).unwrap() {
            return;
        }
        assert!(session.remaining() < 4);

        assert!(session.undo().unwrap());
        assert_eq!(session.remaining(), 4);
        assert!(session.board().is_empty());
        assert!(!session.undo().unwrap());
    }

    #[test]
    fn contradiction_then_reset() {
        let (_, universe) = setup();
        let mut session =
            Session::new(&universe, StrategyKind::Entropy, StrategyOptions::default()).unwrap();

        // Same guess answered two different ways
        let guess = session.suggestion().unwrap();
        session.submit(Feedback::new(0, 0)).unwrap();
        session.pending = Some(guess);
        session.submit(Feedback::new(1, 0)).unwrap();

        assert!(matches!(
            session.suggestion(),
            Err(SolverError::Contradiction { observations: 2 })
        ));

        session.reset().unwrap();
        assert_eq!(session.remaining(), 4);
        assert!(session.suggestion().is_ok());
    }

    #[test]
    fn turn_limit_stops_suggestions_until_undo() {
        let (_, universe) = setup();
        let mut session = Session::new(&universe, StrategyKind::Entropy, StrategyOptions::default())
            .unwrap()
            .with_turn_limit(Some(1));

        // A secret the opening guess cannot hit
        let guess = session.suggestion().unwrap();
        let secret = universe.codes().iter().find(|c| **c != guess).unwrap().clone();
        let feedback = Feedback::evaluate(&secret, &guess).unwrap();
        assert!(!session.submit(feedback).unwrap());

        assert!(session.is_out_of_turns());
        assert!(matches!(session.suggestion(), Err(SolverError::Exhausted)));
        assert!(matches!(session.suggestion(), Err(SolverError::Exhausted)));

        assert!(session.undo().unwrap());
        assert!(!session.is_out_of_turns());
        assert_eq!(session.suggestion().unwrap(), guess);
    }

    #[test]
    fn solved_game_is_not_out_of_turns() {
        let (_, universe) = setup();
        let mut session = Session::new(&universe, StrategyKind::Entropy, StrategyOptions::default())
            .unwrap()
            .with_turn_limit(Some(1));
        let guess = session.suggestion().unwrap();
        assert!(session.submit(Feedback::solved(guess.len())).unwrap());
        assert!(!session.is_out_of_turns());
    }
}
