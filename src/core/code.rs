//! Mastermind code representation
//!
//! A `Code` is an immutable sequence of `Symbol`s. Symbols are indices into an
//! `Alphabet`, which owns the display names ("red", "green", ...). Comparison
//! is by value only; the ordering derives exist so codes can be sorted for
//! stable output.

use crate::error::{Result, SolverError};
use std::fmt;

/// One value from the game alphabet
///
/// Only an `Alphabet` hands these out, so the index is always below
/// `Alphabet::MAX_SYMBOLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(u8);

impl Symbol {
    #[inline]
    pub(crate) const fn new(index: u8) -> Self {
        debug_assert!((index as usize) < Alphabet::MAX_SYMBOLS);
        Self(index)
    }

    /// Position of this symbol in its alphabet
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Ordered set of symbol names available in a game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    names: Vec<String>,
}

impl Alphabet {
    /// Largest supported alphabet
    pub const MAX_SYMBOLS: usize = 36;

    /// Palette used when no alphabet is configured
    pub const DEFAULT_PALETTE: [&'static str; 6] = ["blue", "green", "red", "white", "black", "pink"];

    /// Build an alphabet from symbol names
    ///
    /// Names are trimmed and lowercased. Duplicates and blank names are rejected.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the alphabet is empty, has more than
    /// `MAX_SYMBOLS` entries, or contains blank or duplicate names.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(["R", "G", "B"]).unwrap();
    /// assert_eq!(alphabet.len(), 3);
    /// assert!(Alphabet::new(Vec::<String>::new()).is_err());
    /// ```
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut validated: Vec<String> = Vec::new();
        for name in names {
            let name = name.into().trim().to_lowercase();
            if name.is_empty() {
                return Err(SolverError::invalid("alphabet contains a blank symbol name"));
            }
            if validated.contains(&name) {
                return Err(SolverError::invalid(format!(
                    "alphabet contains '{name}' more than once"
                )));
            }
            validated.push(name);
        }

        if validated.is_empty() {
            return Err(SolverError::invalid("alphabet must not be empty"));
        }
        if validated.len() > Self::MAX_SYMBOLS {
            return Err(SolverError::invalid(format!(
                "alphabet has {} symbols, at most {} are supported",
                validated.len(),
                Self::MAX_SYMBOLS
            )));
        }

        Ok(Self { names: validated })
    }

    /// Parse a comma-separated list such as `"red,green,blue"`
    ///
    /// # Errors
    /// Same conditions as [`Alphabet::new`].
    pub fn parse(list: &str) -> Result<Self> {
        Self::new(list.split(',').filter(|s| !s.trim().is_empty()))
    }

    /// Number of symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed alphabet
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over all symbols in order
    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.names.len()).map(|i| Symbol::new(i as u8))
    }

    /// Symbol at `index`, if within the alphabet
    #[must_use]
    pub fn symbol(&self, index: usize) -> Option<Symbol> {
        (index < self.names.len()).then(|| Symbol::new(index as u8))
    }

    /// Display name of a symbol
    #[must_use]
    pub fn name(&self, symbol: Symbol) -> &str {
        self.names.get(symbol.index()).map_or("?", String::as_str)
    }

    /// Find a symbol by name (case-insensitive)
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        let name = name.trim().to_lowercase();
        self.names
            .iter()
            .position(|n| *n == name)
            .map(|i| Symbol::new(i as u8))
    }

    /// True when every symbol name is a single character
    ///
    /// Such alphabets accept compact codes like `"RGBR"`.
    #[must_use]
    pub fn is_compact(&self) -> bool {
        self.names.iter().all(|n| n.chars().count() == 1)
    }

    /// Parse a code from text
    ///
    /// Symbols are separated by commas or whitespace. Compact alphabets also
    /// accept an unseparated run of characters.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` for unknown symbols or a wrong length.
    ///
    /// # Examples
    /// ```
    /// use mastermind_solver::core::Alphabet;
    ///
    /// let alphabet = Alphabet::new(["R", "G", "B"]).unwrap();
    /// let a = alphabet.parse_code("R G B R", 4).unwrap();
    /// let b = alphabet.parse_code("rgbr", 4).unwrap();
    /// assert_eq!(a, b);
    /// assert!(alphabet.parse_code("R G", 4).is_err());
    /// ```
    pub fn parse_code(&self, text: &str, code_length: usize) -> Result<Code> {
        if code_length == 0 || code_length > Code::MAX_LENGTH {
            return Err(SolverError::invalid(format!(
                "code length must be between 1 and {}, got {code_length}",
                Code::MAX_LENGTH
            )));
        }

        let tokens: Vec<&str> = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let symbols: Vec<Symbol> = if tokens.len() == 1 && code_length > 1 && self.is_compact() {
            let mut buf = [0u8; 4];
            tokens[0]
                .chars()
                .map(|c| self.lookup_or_err(c.encode_utf8(&mut buf)))
                .collect::<Result<_>>()?
        } else {
            tokens
                .iter()
                .map(|t| self.lookup_or_err(t))
                .collect::<Result<_>>()?
        };

        if symbols.len() != code_length {
            return Err(SolverError::invalid(format!(
                "expected {code_length} symbols, got {}",
                symbols.len()
            )));
        }

        Code::try_new(symbols)
    }

    fn lookup_or_err(&self, name: &str) -> Result<Symbol> {
        self.lookup(name).ok_or_else(|| {
            SolverError::invalid(format!(
                "unknown symbol '{name}' (expected one of: {})",
                self.names.join(", ")
            ))
        })
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            names: Self::DEFAULT_PALETTE.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(","))
    }
}

/// A fixed-length sequence of symbols, used as guess, secret and candidate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code(Box<[Symbol]>);

impl Code {
    /// Longest supported code
    pub const MAX_LENGTH: usize = 32;

    /// Create a code from symbols
    ///
    /// Codes longer than [`Code::MAX_LENGTH`] can be built but not scored;
    /// use [`Code::try_new`] to reject them up front.
    pub fn new(symbols: impl Into<Box<[Symbol]>>) -> Self {
        Self(symbols.into())
    }

    /// Create a code, checking its length against [`Code::MAX_LENGTH`]
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the code is empty or too long.
    pub fn try_new(symbols: impl Into<Box<[Symbol]>>) -> Result<Self> {
        let code = Self::new(symbols);
        if code.is_empty() || code.len() > Self::MAX_LENGTH {
            return Err(SolverError::invalid(format!(
                "code length must be between 1 and {}, got {}",
                Self::MAX_LENGTH,
                code.len()
            )));
        }
        Ok(code)
    }

    /// Number of positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.0
    }

    /// Symbol at a position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.0[position]
    }

    /// Render the code with the names from `alphabet`
    #[must_use]
    pub const fn display<'a>(&'a self, alphabet: &'a Alphabet) -> CodeDisplay<'a> {
        CodeDisplay {
            code: self,
            alphabet,
        }
    }
}

/// Helper returned by [`Code::display`]
pub struct CodeDisplay<'a> {
    code: &'a Code,
    alphabet: &'a Alphabet,
}

impl fmt::Display for CodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = if self.alphabet.is_compact() { "" } else { " " };
        for (i, &symbol) in self.code.symbols().iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            f.write_str(self.alphabet.name(symbol))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb() -> Alphabet {
        Alphabet::new(["R", "G", "B"]).unwrap()
    }

    #[test]
    fn alphabet_normalizes_names() {
        let alphabet = Alphabet::new([" Red ", "GREEN"]).unwrap();
        assert_eq!(alphabet.name(Symbol::new(0)), "red");
        assert_eq!(alphabet.name(Symbol::new(1)), "green");
    }

    #[test]
    fn alphabet_rejects_duplicates_case_insensitive() {
        assert!(Alphabet::new(["red", "RED"]).is_err());
    }

    #[test]
    fn alphabet_rejects_blank_and_empty() {
        assert!(Alphabet::new(["red", "  "]).is_err());
        assert!(Alphabet::parse("").is_err());
        assert!(Alphabet::parse(" , ,").is_err());
    }

    #[test]
    fn alphabet_rejects_oversized() {
        let names: Vec<String> = (0..=Alphabet::MAX_SYMBOLS).map(|i| format!("c{i}")).collect();
        assert!(Alphabet::new(names).is_err());
    }

    #[test]
    fn alphabet_parse_comma_list() {
        let alphabet = Alphabet::parse("red, green,blue").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.lookup("Blue"), Some(Symbol::new(2)));
        assert_eq!(alphabet.lookup("pink"), None);
        assert_eq!(alphabet.to_string(), "red,green,blue");
    }

    #[test]
    fn default_alphabet_is_six_colors() {
        let alphabet = Alphabet::default();
        assert_eq!(alphabet.len(), 6);
        assert!(!alphabet.is_compact());
    }

    #[test]
    fn parse_code_separated_and_compact() {
        let alphabet = rgb();
        let expected = Code::new(vec![
            Symbol::new(0),
            Symbol::new(1),
            Symbol::new(2),
            Symbol::new(0),
        ]);
        assert_eq!(alphabet.parse_code("R,G,B,R", 4).unwrap(), expected);
        assert_eq!(alphabet.parse_code("r g b r", 4).unwrap(), expected);
        assert_eq!(alphabet.parse_code("RGBR", 4).unwrap(), expected);
    }

    #[test]
    fn parse_code_rejects_unknown_symbol() {
        let err = rgb().parse_code("R G Y R", 4).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput(_)));
    }

    #[test]
    fn parse_code_rejects_oversized_length() {
        let alphabet = rgb();
        let err = alphabet.parse_code(&"R".repeat(300), 300).unwrap_err();
        assert!(matches!(err, SolverError::InvalidInput(_)));
        assert!(alphabet.parse_code(&"R".repeat(33), 33).is_err());
        assert!(alphabet.parse_code("", 0).is_err());
        assert_eq!(alphabet.parse_code(&"R".repeat(32), 32).unwrap().len(), 32);
    }

    #[test]
    fn try_new_checks_length() {
        let r = Symbol::new(0);
        assert!(Code::try_new(vec![r; Code::MAX_LENGTH]).is_ok());
        assert!(matches!(
            Code::try_new(vec![r; Code::MAX_LENGTH + 1]),
            Err(SolverError::InvalidInput(_))
        ));
        assert!(Code::try_new(Vec::new()).is_err());
    }

    #[test]
    fn parse_code_named_symbols() {
        let alphabet = Alphabet::default();
        let code = alphabet.parse_code("blue green red pink", 4).unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.symbol_at(3), Symbol::new(5));
    }

    #[test]
    fn code_equality_by_value() {
        let alphabet = rgb();
        let a = alphabet.parse_code("RGB", 3).unwrap();
        let b = alphabet.parse_code("R G B", 3).unwrap();
        let c = alphabet.parse_code("RBG", 3).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: std::collections::HashSet<Code> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn code_display_uses_alphabet_names() {
        let compact = rgb();
        let code = compact.parse_code("RGBR", 4).unwrap();
        assert_eq!(code.display(&compact).to_string(), "rgbr");

        let named = Alphabet::default();
        let code = named.parse_code("blue,red", 2).unwrap();
        assert_eq!(code.display(&named).to_string(), "blue red");
    }
}
