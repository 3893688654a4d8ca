//! Shift (Caesar) cipher: `c = p + k (mod power)`

use alloc::string::String;

use crate::alphabet::{Alphabet, TextError};
use crate::arith::true_mod;
use crate::key::Shift;

// Shift every symbol by `delta` positions
fn shift_by(text: &str, delta: i64, alphabet: &Alphabet) -> Result<String, TextError> {
    let m = alphabet.modulus();
    let idx = alphabet.indices(text)?;
    Ok(alphabet.text(idx.into_iter().map(|p| true_mod(p as i64 + delta, m))))
}

/// Encrypt by shifting every symbol forward by the key's position
pub fn encrypt(text: &str, key: &Shift, alphabet: &Alphabet) -> Result<String, TextError> {
    shift_by(text, key.get() as i64, alphabet)
}

/// Decrypt by shifting back, i.e. encrypting with the negated key
pub fn decrypt(text: &str, key: &Shift, alphabet: &Alphabet) -> Result<String, TextError> {
    shift_by(text, -(key.get() as i64), alphabet)
}
