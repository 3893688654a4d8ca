//! The six classical ciphers and the dispatch over validated keys
//!
//! Every transform is a pure function of the text, key and alphabet. Only
//! encoding may consume randomness, and only to pick padding symbols.

use alloc::string::String;

use rand::Rng;
use thiserror::Error;
use tracing::{trace, warn};

use crate::alphabet::{Alphabet, TextError};
use crate::arith;
use crate::key::{self, Key, PermutationKind};

pub mod affine;
pub mod caesar;
pub mod hill;
pub mod permutation;
pub mod substitution;
pub mod vigenere;

/// Errors from encoding and decoding
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    Key(#[from] key::Error),
    /// Validation and transform disagree, a key slipped through unchecked
    #[error("internal invariant violated: {0}")]
    Arithmetic(#[from] arith::Error),
    #[error("text length {len} is not a multiple of the block length {block}")]
    BlockLength { len: usize, block: usize },
    #[error("padding count {padding} exceeds the text length {len}")]
    Padding { padding: usize, len: usize },
}

/// Cipher selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cipher {
    Caesar,
    Affine,
    Substitution,
    Hill,
    /// Columnar transposition with a keyword key
    Permutation,
    /// Columnar transposition with a numeric key
    PermutationNumeric,
    Vigenere,
}

impl Cipher {
    /// Parse and validate a raw key for this cipher
    pub fn parse_key(self, key: &str, alphabet: &Alphabet) -> Result<Key, key::Error> {
        Ok(match self {
            Cipher::Caesar => Key::Caesar(key::caesar(key, alphabet)?),
            Cipher::Affine => Key::Affine(key::affine(key, alphabet)?),
            Cipher::Substitution => Key::Substitution(key::substitution(key, alphabet)?),
            Cipher::Hill => Key::Hill(key::hill(key, alphabet)?),
            Cipher::Permutation => Key::Permutation(key::permutation(key, alphabet)?),
            Cipher::PermutationNumeric => {
                Key::Permutation(key::permutation_numeric(key, alphabet)?)
            }
            Cipher::Vigenere => Key::Vigenere(key::vigenere(key, alphabet)?),
        })
    }

    /// Whether the cipher accepts symbols outside the alphabet
    pub fn passes_unknown_symbols(self) -> bool {
        self == Cipher::Vigenere
    }
}

/// Encoder output
///
/// `padding` trailing symbols were appended to fill the last block, and must
/// be handed to [`decode`] to recover the original text length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Encoded {
    pub text: String,
    pub padding: usize,
}

impl Encoded {
    fn unpadded(text: String) -> Self {
        Self { text, padding: 0 }
    }
}

/// Encode `text` with a validated key
///
/// `rng` picks padding symbols for the Hill cipher and numeric permutation keys.
pub fn encode<R: Rng + ?Sized>(
    text: &str,
    key: &Key,
    alphabet: &Alphabet,
    rng: &mut R,
) -> Result<Encoded, Error> {
    trace!(len = text.chars().count(), power = alphabet.power(), "encode");

    let encoded = match key {
        Key::Caesar(shift) => Encoded::unpadded(caesar::encrypt(text, shift, alphabet)?),
        Key::Affine(k) => Encoded::unpadded(affine::encrypt(text, k, alphabet)?),
        Key::Substitution(k) => Encoded::unpadded(substitution::encrypt(text, k, alphabet)?),
        Key::Vigenere(k) => Encoded::unpadded(vigenere::encrypt(text, k, alphabet)),
        Key::Permutation(k) => {
            let pad = match k.kind() {
                PermutationKind::Keyword => alphabet.last(),
                PermutationKind::Numeric => alphabet.random_symbol(rng),
            };
            permutation::encrypt(text, k, alphabet, pad)?
        }
        Key::Hill(k) => hill::encrypt(text, k, alphabet, alphabet.random_symbol(rng))?,
    };

    if encoded.padding > 0 {
        warn!(
            padding = encoded.padding,
            "text padded to fill the last block, decode needs the padding count"
        );
    }

    Ok(encoded)
}

/// Decode `text` with a validated key, stripping `padding` trailing symbols
///
/// `padding` is ignored by the ciphers that never pad.
pub fn decode(text: &str, key: &Key, alphabet: &Alphabet, padding: usize) -> Result<String, Error> {
    trace!(len = text.chars().count(), padding, "decode");

    match key {
        Key::Caesar(shift) => Ok(caesar::decrypt(text, shift, alphabet)?),
        Key::Affine(k) => affine::decrypt(text, k, alphabet),
        Key::Substitution(k) => Ok(substitution::decrypt(text, k, alphabet)?),
        Key::Vigenere(k) => Ok(vigenere::decrypt(text, k, alphabet)),
        Key::Permutation(k) => permutation::decrypt(text, k, alphabet, padding),
        Key::Hill(k) => hill::decrypt(text, k, alphabet, padding),
    }
}

// Drop `padding` trailing symbols
pub(crate) fn strip_padding(mut text: String, padding: usize) -> Result<String, Error> {
    let len = text.chars().count();
    if padding > len {
        return Err(Error::Padding { padding, len });
    }

    let cut = text
        .char_indices()
        .nth(len - padding)
        .map_or(text.len(), |(i, _)| i);
    text.truncate(cut);
    Ok(text)
}
