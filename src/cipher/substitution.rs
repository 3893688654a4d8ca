//! Monoalphabetic substitution: the key is a permutation of the alphabet

use alloc::string::String;

use crate::alphabet::{Alphabet, TextError};
use crate::key::SubstitutionKey;

// Replace each symbol at position i with the symbol at position table[i]
fn substitute(text: &str, table: &[usize], alphabet: &Alphabet) -> Result<String, TextError> {
    let idx = alphabet.indices(text)?;
    Ok(alphabet.text(idx.into_iter().map(|i| table[i] as i64)))
}

pub fn encrypt(text: &str, key: &SubstitutionKey, alphabet: &Alphabet) -> Result<String, TextError> {
    substitute(text, key.as_slice(), alphabet)
}

/// Decrypt through the inverse permutation, built once per call
pub fn decrypt(text: &str, key: &SubstitutionKey, alphabet: &Alphabet) -> Result<String, TextError> {
    substitute(text, &key.inverse(), alphabet)
}
