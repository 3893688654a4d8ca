//! Key parsing and validation, one function per cipher
//!
//! Raw key text comes straight from the key file. Each parser checks the
//! shape its cipher needs against the alphabet and returns a typed key; the
//! cipher engine trusts those keys and never validates them again.
//!
//! A key is only meaningful with the alphabet it was parsed against.

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use hashbrown::HashSet;
use thiserror::Error;
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::arith::{are_coprime, mod_inverse, Matrix2};

/// Number of symbols in a Hill key (2x2 matrix)
pub const HILL_KEY_LEN: usize = 4;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("key has the wrong number of symbols: {0}")]
    WrongLength(usize),
    #[error("key contains symbol not from the alphabet: '{0}'")]
    UnknownSymbol(char),
    #[error("key contains duplicate symbol: '{0}'")]
    DuplicateSymbol(char),
    #[error("multiplicative coefficient {0} is not coprime with the alphabet power")]
    NonInvertibleCoefficient(usize),
    #[error("matrix determinant is zero, key is not invertible")]
    SingularMatrix,
    #[error("matrix determinant {0} is not coprime with the alphabet power")]
    NonInvertibleDeterminant(i64),
    #[error("key contains an invalid column number: '{0}'")]
    InvalidNumber(String),
    #[error("key repeats column {0}")]
    DuplicateColumn(usize),
    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),
}

/// Shift for the Caesar cipher, in `[0, power)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shift(usize);

impl Shift {
    pub fn get(&self) -> usize {
        self.0
    }
}

/// Affine coefficients, `k1` coprime with the power
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AffineKey {
    k1: usize,
    k2: usize,
}

impl AffineKey {
    pub fn k1(&self) -> usize {
        self.k1
    }

    pub fn k2(&self) -> usize {
        self.k2
    }
}

/// Full permutation of `[0, power)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionKey(Vec<usize>);

impl SubstitutionKey {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Inverse permutation, `inverse[key[i]] = i`
    pub fn inverse(&self) -> Vec<usize> {
        let mut inv = vec![0_usize; self.0.len()];
        for (i, &k) in self.0.iter().enumerate() {
            inv[k] = i;
        }
        inv
    }
}

/// How a permutation key was written, which decides the padding symbol
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PermutationKind {
    /// Keyword of distinct alphabet symbols, padded with the last symbol
    Keyword,
    /// Explicit 1-based column numbers, padded with random symbols
    Numeric,
}

/// Column order for the columnar transposition
///
/// `order()[i]` is the output column of input column `i`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationKey {
    order: Vec<usize>,
    kind: PermutationKind,
}

impl PermutationKey {
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn kind(&self) -> PermutationKind {
        self.kind
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.order.len()
    }
}

/// Non-empty keyword, as alphabet positions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VigenereKey(Vec<usize>);

impl VigenereKey {
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// 2x2 matrix with determinant invertible modulo the power
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HillKey(Matrix2);

impl HillKey {
    pub fn matrix(&self) -> &Matrix2 {
        &self.0
    }
}

/// Validated key for one of the six ciphers
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Caesar(Shift),
    Affine(AffineKey),
    Substitution(SubstitutionKey),
    Permutation(PermutationKey),
    Vigenere(VigenereKey),
    Hill(HillKey),
}

// Look up every key symbol, failing on the first unknown one
fn key_indices(key: &str, alphabet: &Alphabet) -> Result<Vec<usize>, Error> {
    key.chars()
        .map(|c| alphabet.index_of(c).ok_or(Error::UnknownSymbol(c)))
        .collect()
}

// Reject the first symbol seen twice
fn check_distinct(key: &str) -> Result<(), Error> {
    let mut seen = HashSet::new();
    for c in key.chars() {
        if !seen.insert(c) {
            return Err(Error::DuplicateSymbol(c));
        }
    }
    Ok(())
}

/// Parse a Caesar key: exactly one alphabet symbol, its position is the shift
pub fn caesar(key: &str, alphabet: &Alphabet) -> Result<Shift, Error> {
    let len = key.chars().count();
    if len != 1 {
        return Err(Error::WrongLength(len));
    }

    Ok(Shift(key_indices(key, alphabet)?[0]))
}

/// Parse an Affine key: two symbols `(k1, k2)` without delimiters
///
/// errors: returns Error::NonInvertibleCoefficient unless `k1` has an inverse modulo the power
pub fn affine(key: &str, alphabet: &Alphabet) -> Result<AffineKey, Error> {
    let len = key.chars().count();
    if len != 2 {
        return Err(Error::WrongLength(len));
    }

    let idx = key_indices(key, alphabet)?;
    let (k1, k2) = (idx[0], idx[1]);

    // coprimality alone admits k1 = 0 for a single-symbol alphabet, which has no inverse
    let power = alphabet.modulus();
    if !are_coprime(k1 as i64, power) || mod_inverse(k1 as i64, power).is_err() {
        return Err(Error::NonInvertibleCoefficient(k1));
    }

    debug!(k1, k2, "affine key");
    Ok(AffineKey { k1, k2 })
}

/// Parse a substitution key: every alphabet symbol exactly once
pub fn substitution(key: &str, alphabet: &Alphabet) -> Result<SubstitutionKey, Error> {
    let len = key.chars().count();
    if len != alphabet.power() {
        return Err(Error::WrongLength(len));
    }

    let idx = key_indices(key, alphabet)?;
    check_distinct(key)?;

    Ok(SubstitutionKey(idx))
}

/// Rank of each position after a stable sort by value
///
/// `ranks(&[2, 0, 1]) == [2, 0, 1]`, `ranks(&[7, 3]) == [1, 0]`
fn ranks(values: &[usize]) -> Vec<usize> {
    let mut positions: Vec<usize> = (0..values.len()).collect();
    positions.sort_by_key(|&i| values[i]);

    let mut order = vec![0_usize; values.len()];
    for (rank, &i) in positions.iter().enumerate() {
        order[i] = rank;
    }
    order
}

/// Parse a keyword permutation key
///
/// Columns are ordered by where each key symbol sits in the alphabet.
pub fn permutation(key: &str, alphabet: &Alphabet) -> Result<PermutationKey, Error> {
    let len = key.chars().count();
    if len == 0 || len > alphabet.power() {
        return Err(Error::WrongLength(len));
    }

    let idx = key_indices(key, alphabet)?;
    check_distinct(key)?;

    let order = ranks(&idx);
    debug!(?order, "permutation order");

    Ok(PermutationKey {
        order,
        kind: PermutationKind::Keyword,
    })
}

/// Parse a numeric permutation key, e.g. "3 1 2" or "3,1,2"
///
/// Numbers are 1-based output columns and must cover `1..=n` exactly, with `n <= power`.
pub fn permutation_numeric(key: &str, alphabet: &Alphabet) -> Result<PermutationKey, Error> {
    let tokens: Vec<&str> = key
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    let len = tokens.len();
    if len == 0 || len > alphabet.power() {
        return Err(Error::WrongLength(len));
    }

    let mut seen = vec![false; len];
    let mut order = Vec::with_capacity(len);
    for token in tokens {
        let column: usize = token
            .parse()
            .map_err(|_| Error::InvalidNumber(token.to_string()))?;
        if column == 0 || column > len {
            return Err(Error::ColumnOutOfRange(column));
        }
        if seen[column - 1] {
            return Err(Error::DuplicateColumn(column));
        }
        seen[column - 1] = true;
        order.push(column - 1);
    }

    debug!(?order, "permutation order");
    Ok(PermutationKey {
        order,
        kind: PermutationKind::Numeric,
    })
}

/// Parse a Vigenère keyword: one or more alphabet symbols, repeats allowed
pub fn vigenere(key: &str, alphabet: &Alphabet) -> Result<VigenereKey, Error> {
    if key.is_empty() {
        return Err(Error::WrongLength(0));
    }

    Ok(VigenereKey(key_indices(key, alphabet)?))
}

/// Parse a Hill key: four symbols laid row-major into a 2x2 matrix
///
/// errors: returns Error when the determinant (mod power) is zero or shares a factor with the power
pub fn hill(key: &str, alphabet: &Alphabet) -> Result<HillKey, Error> {
    let len = key.chars().count();
    if len != HILL_KEY_LEN {
        return Err(Error::WrongLength(len));
    }

    let idx = key_indices(key, alphabet)?;
    let matrix = Matrix2::from_row_major([
        idx[0] as i64,
        idx[1] as i64,
        idx[2] as i64,
        idx[3] as i64,
    ]);

    let power = alphabet.modulus();
    let det = matrix.det_mod(power);
    if det == 0 {
        return Err(Error::SingularMatrix);
    }
    if !are_coprime(det, power) {
        return Err(Error::NonInvertibleDeterminant(det));
    }

    debug!(?matrix, det, "hill key");
    Ok(HillKey(matrix))
}
