//! Candidate universe enumeration
//!
//! All `alphabet_size ^ code_length` codes, generated once per game in
//! lexicographic order and read-only afterwards.

use super::{Alphabet, Code, Symbol};
use crate::error::{Result, SolverError};

/// Every code of a given length over a given alphabet
#[derive(Debug, Clone)]
pub struct CandidateUniverse {
    alphabet_size: usize,
    code_length: usize,
    codes: Vec<Code>,
}

impl CandidateUniverse {
    /// Largest universe we are willing to materialize
    pub const MAX_SIZE: usize = 1 << 20;

    /// Enumerate the universe
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `code_length` is zero or above
    /// `Code::MAX_LENGTH`, or if the universe would exceed `MAX_SIZE` codes.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, CandidateUniverse};
    ///
    /// let alphabet = Alphabet::new(["A", "B", "C"]).unwrap();
    /// let universe = CandidateUniverse::new(&alphabet, 2).unwrap();
    /// assert_eq!(universe.len(), 9);
    /// ```
    pub fn new(alphabet: &Alphabet, code_length: usize) -> Result<Self> {
        let size = Self::size_of(alphabet.len(), code_length)?;
        let alphabet_size = alphabet.len();

        let mut codes = Vec::with_capacity(size);
        let mut digits = vec![0usize; code_length];

        // Odometer: the last position turns fastest
        'outer: loop {
            codes.push(Code::new(
                digits
                    .iter()
                    .map(|&d| Symbol::new(d as u8))
                    .collect::<Vec<_>>(),
            ));

            for position in (0..code_length).rev() {
                digits[position] += 1;
                if digits[position] < alphabet_size {
                    continue 'outer;
                }
                digits[position] = 0;
            }
            break;
        }

        debug_assert_eq!(codes.len(), size);

        Ok(Self {
            alphabet_size,
            code_length,
            codes,
        })
    }

    /// Size of the universe for the given parameters
    ///
    /// # Errors
    /// Same validation as [`CandidateUniverse::new`].
    pub fn size_of(alphabet_size: usize, code_length: usize) -> Result<usize> {
        if code_length == 0 {
            return Err(SolverError::invalid("code length must be positive"));
        }
        if code_length > Code::MAX_LENGTH {
            return Err(SolverError::invalid(format!(
                "code length {code_length} exceeds the maximum of {}",
                Code::MAX_LENGTH
            )));
        }
        if alphabet_size == 0 {
            return Err(SolverError::invalid("alphabet must not be empty"));
        }

        u32::try_from(code_length)
            .ok()
            .and_then(|exp| alphabet_size.checked_pow(exp))
            .filter(|&size| size <= Self::MAX_SIZE)
            .ok_or_else(|| {
                SolverError::invalid(format!(
                    "{alphabet_size}^{code_length} candidates exceeds the limit of {}",
                    Self::MAX_SIZE
                ))
            })
    }

    /// All codes in lexicographic order
    #[inline]
    #[must_use]
    pub fn codes(&self) -> &[Code] {
        &self.codes
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Never true for a constructed universe
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    #[inline]
    #[must_use]
    pub const fn alphabet_size(&self) -> usize {
        self.alphabet_size
    }

    /// Check whether a code belongs to this universe
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        code.len() == self.code_length
            && code.symbols().iter().all(|s| s.index() < self.alphabet_size)
    }
}
