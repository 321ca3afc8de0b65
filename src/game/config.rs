//! Game configuration
//!
//! Validated parameters for one game: the alphabet, the code length and the
//! optional turn limit.

use crate::core::{Alphabet, CandidateUniverse, Code};
use crate::error::{Result, SolverError};
use rand::Rng;

/// Parameters shared by every game in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    alphabet: Alphabet,
    code_length: usize,
    max_turns: Option<usize>,
}

impl GameConfig {
    /// Classic Mastermind code length
    pub const DEFAULT_CODE_LENGTH: usize = 4;

    /// Classic Mastermind turn limit
    pub const DEFAULT_MAX_TURNS: usize = 10;

    /// Build a validated configuration
    ///
    /// `max_turns = None` plays until the secret is found.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `code_length` is zero or too
    /// long, the universe would be too large, or `max_turns` is zero.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    /// use mastermind_solver::game::GameConfig;
    ///
    /// let config = GameConfig::new(Alphabet::default(), 4, Some(10)).unwrap();
    /// assert_eq!(config.universe_size(), 1296);
    /// assert!(GameConfig::new(Alphabet::default(), 0, None).is_err());
    /// ```
    pub fn new(alphabet: Alphabet, code_length: usize, max_turns: Option<usize>) -> Result<Self> {
        // Rejects zero length, overlong codes and oversized universes
        CandidateUniverse::size_of(alphabet.len(), code_length)?;

        if max_turns == Some(0) {
            return Err(SolverError::invalid("turn limit must be at least 1"));
        }

        Ok(Self {
            alphabet,
            code_length,
            max_turns,
        })
    }

    #[inline]
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn max_turns(&self) -> Option<usize> {
        self.max_turns
    }

    /// Number of codes in the universe (validated at construction)
    #[must_use]
    pub fn universe_size(&self) -> usize {
        (0..self.code_length).fold(1, |size, _| size * self.alphabet.len())
    }

    /// Enumerate the candidate universe for this configuration
    ///
    /// # Errors
    /// Only fails if the configuration was built around the validator.
    pub fn universe(&self) -> Result<CandidateUniverse> {
        CandidateUniverse::new(&self.alphabet, self.code_length)
    }

    /// Parse a code written in this game's alphabet
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` for unknown symbols or a wrong length.
    pub fn parse_code(&self, text: &str) -> Result<Code> {
        self.alphabet.parse_code(text, self.code_length)
    }

    /// Draw a secret uniformly from the universe
    pub fn random_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Code {
        let symbols: Vec<_> = (0..self.code_length)
            .filter_map(|_| self.alphabet.symbol(rng.random_range(0..self.alphabet.len())))
            .collect();
        Code::new(symbols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            code_length: Self::DEFAULT_CODE_LENGTH,
            max_turns: Some(Self::DEFAULT_MAX_TURNS),
        }
    }
}
