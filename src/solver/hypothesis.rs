//! Hypothesis set maintenance
//!
//! Tracks the codes still consistent with every (guess, feedback) pair seen so
//! far. The set starts as the full universe and only ever shrinks.

use crate::core::{CandidateUniverse, Code, Feedback};
use crate::error::{Result, SolverError};
use tracing::{debug, warn};

/// Candidate secrets consistent with all observed feedback
#[derive(Debug, Clone)]
pub struct HypothesisSet {
    candidates: Vec<Code>,
    code_length: usize,
    observations: usize,
}

impl HypothesisSet {
    /// Start from the whole universe
    #[must_use]
    pub fn new(universe: &CandidateUniverse) -> Self {
        Self {
            candidates: universe.codes().to_vec(),
            code_length: universe.code_length(),
            observations: 0,
        }
    }

    /// Discard every candidate that would not have produced `feedback` for `guess`
    ///
    /// Each candidate plays the role of the secret: it is kept iff
    /// `evaluate(candidate, guess) == feedback`. Returns the number of
    /// candidates removed.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if `guess` has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::{Alphabet, CandidateUniverse, Feedback};
    /// use mastermind_solver::solver::HypothesisSet;
    ///
    /// let alphabet = Alphabet::new(["A", "B"]).unwrap();
    /// let universe = CandidateUniverse::new(&alphabet, 2).unwrap();
    /// let mut set = HypothesisSet::new(&universe);
    ///
    /// let guess = alphabet.parse_code("AA", 2).unwrap();
    /// set.prune(&guess, Feedback::new(1, 0)).unwrap();
    /// assert_eq!(set.len(), 2); // AB and BA
    /// ```
    pub fn prune(&mut self, guess: &Code, feedback: Feedback) -> Result<usize> {
        if guess.len() != self.code_length {
            return Err(SolverError::invalid(format!(
                "guess has {} symbols, expected {}",
                guess.len(),
                self.code_length
            )));
        }

        let before = self.candidates.len();
        self.candidates
            .retain(|candidate| Feedback::calculate(candidate.symbols(), guess.symbols()) == feedback);
        self.observations += 1;

        let after = self.candidates.len();
        debug!(before, after, %feedback, observation = self.observations, "pruned hypothesis set");
        if after == 0 {
            warn!(
                observations = self.observations,
                %feedback,
                "hypothesis set is empty; feedback is inconsistent"
            );
        }

        Ok(before - after)
    }

    /// Fail unless at least one candidate remains
    ///
    /// # Errors
    /// `SolverError::Contradiction` if pruning emptied the set,
    /// `SolverError::Exhausted` if it was never populated.
    pub fn ensure_viable(&self) -> Result<()> {
        match (self.candidates.is_empty(), self.observations) {
            (false, _) => Ok(()),
            (true, 0) => Err(SolverError::Exhausted),
            (true, observations) => Err(SolverError::Contradiction { observations }),
        }
    }

    /// The only remaining candidate, if exactly one is left
    #[must_use]
    pub fn sole_candidate(&self) -> Option<&Code> {
        match self.candidates.as_slice() {
            [only] => Some(only),
            _ => None,
        }
    }

    /// Remaining candidates
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Code] {
        &self.candidates
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.candidates.contains(code)
    }

    #[inline]
    #[must_use]
    pub const fn code_length(&self) -> usize {
        self.code_length
    }

    /// Number of `prune` calls applied so far
    #[inline]
    #[must_use]
    pub const fn observations(&self) -> usize {
        self.observations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Alphabet;

    fn setup(names: &[&str], length: usize) -> (Alphabet, CandidateUniverse) {
        let alphabet = Alphabet::new(names.iter().copied()).unwrap();
        let universe = CandidateUniverse::new(&alphabet, length).unwrap();
        (alphabet, universe)
    }

    #[test]
    fn starts_with_full_universe() {
        let (_, universe) = setup(&["A", "B", "C"], 3);
        let set = HypothesisSet::new(&universe);
        assert_eq!(set.len(), 27);
        assert_eq!(set.observations(), 0);
        assert!(set.ensure_viable().is_ok());
    }

    #[test]
    fn prune_keeps_exactly_consistent_candidates() {
        let (alphabet, universe) = setup(&["R", "G", "B"], 4);
        let mut set = HypothesisSet::new(&universe);
        let secret = alphabet.parse_code("RGBR", 4).unwrap();
        let guess = alphabet.parse_code("RRGG", 4).unwrap();
        let feedback = Feedback::evaluate(&secret, &guess).unwrap();

        let removed = set.prune(&guess, feedback).unwrap();
        assert_eq!(removed + set.len(), universe.len());
        assert!(set.contains(&secret));

        for code in universe.codes() {
            let consistent = Feedback::evaluate(code, &guess).unwrap() == feedback;
            assert_eq!(set.contains(code), consistent);
        }
    }

    #[test]
    fn two_symbol_scenario_narrows_to_secret() {
        let (alphabet, universe) = setup(&["A", "B"], 2);
        let mut set = HypothesisSet::new(&universe);

        set.prune(&alphabet.parse_code("AA", 2).unwrap(), Feedback::new(1, 0))
            .unwrap();
        assert_eq!(set.len(), 2);

        set.prune(&alphabet.parse_code("BA", 2).unwrap(), Feedback::new(0, 2))
            .unwrap();
        assert_eq!(set.sole_candidate(), Some(&alphabet.parse_code("AB", 2).unwrap()));
    }

    #[test]
    fn impossible_feedback_empties_set() {
        let (alphabet, universe) = setup(&["R", "G", "B"], 4);
        let mut set = HypothesisSet::new(&universe);

        // Three exact matches and one misplaced symbol cannot happen
        set.prune(&alphabet.parse_code("RGBR", 4).unwrap(), Feedback::new(3, 1))
            .unwrap();
        assert!(set.is_empty());
        assert_eq!(
            set.ensure_viable(),
            Err(SolverError::Contradiction { observations: 1 })
        );
    }

    #[test]
    fn prune_rejects_wrong_length() {
        let (alphabet, universe) = setup(&["A", "B"], 3);
        let mut set = HypothesisSet::new(&universe);
        let guess = alphabet.parse_code("AB", 2).unwrap();
        assert!(matches!(
            set.prune(&guess, Feedback::new(0, 0)),
            Err(SolverError::InvalidInput(_))
        ));
        assert_eq!(set.observations(), 0);
        assert_eq!(set.len(), 8);
    }

    #[test]
    fn non_winning_guess_drops_out_of_set() {
        let (alphabet, universe) = setup(&["A", "B", "C"], 2);
        let mut set = HypothesisSet::new(&universe);
        let guess = alphabet.parse_code("AB", 2).unwrap();
        set.prune(&guess, Feedback::new(1, 0)).unwrap();
        assert!(!set.contains(&guess));
    }
}
