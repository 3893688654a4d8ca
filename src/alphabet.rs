//! Symbol <-> index bijection for a user-defined alphabet

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use rand::Rng;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("alphabet can not be empty")]
    Empty,
    #[error("alphabet has repeated symbol: '{0}'")]
    DuplicateSymbol(char),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TextError {
    #[error("text can not be empty")]
    Empty,
    #[error("text contains symbol not from the alphabet: '{0}'")]
    UnknownSymbol(char),
}

/// Ordered, duplicate-free set of symbols
///
/// The first symbol maps to 0, the second to 1, and so on. The number of
/// symbols is the alphabet's power, the modulus of every cipher.
#[derive(Clone, Debug)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from a string of distinct symbols
    ///
    /// errors: returns Error on empty input or repeated symbols
    pub fn new(alphabet: &str) -> Result<Self, Error> {
        let symbols: Vec<char> = alphabet.chars().collect();
        if symbols.is_empty() {
            return Err(Error::Empty);
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(Error::DuplicateSymbol(c));
            }
        }

        Ok(Self { symbols, index })
    }

    /// Number of symbols in the alphabet
    pub fn power(&self) -> usize {
        self.symbols.len()
    }

    /// Power as a signed modulus for the arithmetic in [`crate::arith`]
    pub fn modulus(&self) -> i64 {
        self.symbols.len() as i64
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.index.contains_key(&symbol)
    }

    /// Position of `symbol`, or None for symbols outside the alphabet
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// Symbol at `position`, or None past the end
    pub fn symbol_at(&self, position: usize) -> Option<char> {
        self.symbols.get(position).copied()
    }

    /// Symbol for an already-reduced residue
    ///
    /// Arithmetic results must be reduced into `[0, power)` before lookup.
    pub(crate) fn symbol(&self, residue: i64) -> char {
        debug_assert!(residue >= 0 && residue < self.modulus());
        self.symbols[residue as usize]
    }

    /// Symbol mapped to the last position
    pub fn last(&self) -> char {
        self.symbols[self.symbols.len() - 1]
    }

    /// Uniformly chosen symbol
    pub fn random_symbol<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.symbols[rng.gen_range(0, self.symbols.len())]
    }

    /// Map every symbol of `text` to its position
    ///
    /// errors: returns TextError with the first symbol not in the alphabet
    pub fn indices(&self, text: &str) -> Result<Vec<usize>, TextError> {
        text.chars()
            .map(|c| self.index_of(c).ok_or(TextError::UnknownSymbol(c)))
            .collect()
    }

    /// Map positions back to symbols
    pub(crate) fn text(&self, residues: impl IntoIterator<Item = i64>) -> String {
        residues.into_iter().map(|r| self.symbol(r)).collect()
    }

    /// Check that `text` is non-empty and made only of alphabet symbols
    ///
    /// errors: returns TextError on empty text, or the first offending symbol
    pub fn validate_text(&self, text: &str) -> Result<(), TextError> {
        if text.is_empty() {
            return Err(TextError::Empty);
        }

        match text.chars().find(|&c| !self.contains(c)) {
            Some(c) => Err(TextError::UnknownSymbol(c)),
            None => Ok(()),
        }
    }
}
