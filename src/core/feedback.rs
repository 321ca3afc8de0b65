//! Mastermind feedback calculation and representation
//!
//! Feedback is a pair of peg counts:
//! - black = symbols matching in value and position
//! - white = remaining symbols matching in value only, counted with multiset
//!   semantics so duplicates are never over-counted

use super::{Alphabet, Code, Symbol};
use crate::error::{Result, SolverError};
use std::fmt;

/// Feedback for a guess scored against a reference code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Feedback {
    black: u8,
    white: u8,
}

impl Feedback {
    /// Create feedback from raw peg counts
    #[inline]
    #[must_use]
    pub const fn new(black: u8, white: u8) -> Self {
        Self { black, white }
    }

    /// The winning feedback for codes of `code_length`
    ///
    /// # Panics
    /// Panics if `code_length` exceeds `Code::MAX_LENGTH`.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // bounded by Code::MAX_LENGTH
    pub const fn solved(code_length: usize) -> Self {
        assert!(code_length <= Code::MAX_LENGTH, "code length out of range");
        Self::new(code_length as u8, 0)
    }

    /// Exact matches
    #[inline]
    #[must_use]
    pub const fn black(self) -> u8 {
        self.black
    }

    /// Value-only matches
    #[inline]
    #[must_use]
    pub const fn white(self) -> u8 {
        self.white
    }

    /// True when every position matched
    #[inline]
    #[must_use]
    pub const fn is_solved(self, code_length: usize) -> bool {
        self.black as usize == code_length
    }

    /// Check the counts could come from codes of `code_length`
    #[must_use]
    pub const fn fits(self, code_length: usize) -> bool {
        let total = self.black as usize + self.white as usize;
        // n-1 blacks and 1 white is impossible: the last symbol would match too
        total <= code_length && !(self.black as usize + 1 == code_length && self.white == 1)
    }

    /// Score `guess` against `reference`
    ///
    /// # Algorithm
    /// 1. Count exact position matches (black)
    /// 2. Tally the unmatched reference symbols
    /// 3. Walk the unmatched guess symbols in order; each one whose tally is
    ///    still positive earns a white peg and consumes one from the tally
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the codes differ in length or
    /// are longer than `Code::MAX_LENGTH`.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, Feedback};
    ///
    /// let alphabet = Alphabet::new(["A", "B"]).unwrap();
    /// let secret = alphabet.parse_code("AB", 2).unwrap();
    /// let guess = alphabet.parse_code("BA", 2).unwrap();
    ///
    /// assert_eq!(Feedback::evaluate(&secret, &guess).unwrap(), Feedback::new(0, 2));
    /// ```
    pub fn evaluate(reference: &Code, guess: &Code) -> Result<Self> {
        if reference.len() != guess.len() {
            return Err(SolverError::invalid(format!(
                "cannot compare codes of length {} and {}",
                reference.len(),
                guess.len()
            )));
        }
        if reference.len() > Code::MAX_LENGTH {
            return Err(SolverError::invalid(format!(
                "code length {} exceeds the maximum of {}",
                reference.len(),
                Code::MAX_LENGTH
            )));
        }
        Ok(Self::calculate(reference.symbols(), guess.symbols()))
    }

    /// Unchecked scoring for hot loops where lengths are already known equal
    #[inline]
    pub(crate) fn calculate(reference: &[Symbol], guess: &[Symbol]) -> Self {
        debug_assert_eq!(reference.len(), guess.len());

        let mut tally = [0u8; Alphabet::MAX_SYMBOLS];
        let mut black = 0u8;

        // First pass: exact matches; everything else goes into the tally
        for (r, g) in reference.iter().zip(guess) {
            if r == g {
                black += 1;
            } else {
                tally[r.index()] += 1;
            }
        }

        // Second pass: unmatched guess symbols consume the tally
        let mut white = 0u8;
        for (r, g) in reference.iter().zip(guess) {
            if r != g {
                let available = &mut tally[g.index()];
                if *available > 0 {
                    *available -= 1;
                    white += 1;
                }
            }
        }

        Self { black, white }
    }

    /// Parse feedback such as `"2 1"`, `"2,1"` or `"2b1w"`
    ///
    /// A single number is read as black pegs with no whites. Counts may carry
    /// a `b` or `w` suffix; anything else makes the input invalid.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Feedback;
    ///
    /// assert_eq!(Feedback::parse("2 1"), Some(Feedback::new(2, 1)));
    /// assert_eq!(Feedback::parse("1B 3W"), Some(Feedback::new(1, 3)));
    /// assert_eq!(Feedback::parse("4"), Some(Feedback::new(4, 0)));
    /// assert_eq!(Feedback::parse("two"), None);
    /// assert_eq!(Feedback::parse("-1 2"), None);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut counts: Vec<(u8, Option<char>)> = Vec::new();
        let mut digits = String::new();

        let lowered = s.to_ascii_lowercase();
        for c in lowered.chars().chain(std::iter::once(' ')) {
            match c {
                '0'..='9' => digits.push(c),
                'b' | 'w' if !digits.is_empty() => {
                    counts.push((digits.parse().ok()?, Some(c)));
                    digits.clear();
                }
                c if c == ',' || c.is_whitespace() => {
                    if !digits.is_empty() {
                        counts.push((digits.parse().ok()?, None));
                        digits.clear();
                    }
                }
                _ => return None,
            }
        }

        match counts.as_slice() {
            [(black, None | Some('b'))] => Some(Self::new(*black, 0)),
            [(white, Some('w'))] => Some(Self::new(0, *white)),
            [(black, None | Some('b')), (white, None | Some('w'))] => {
                Some(Self::new(*black, *white))
            }
            _ => None,
        }
    }
}

impl std::str::FromStr for Feedback {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).ok_or_else(|| SolverError::invalid(format!("invalid feedback: {s}")))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.black, self.white)
    }
}
