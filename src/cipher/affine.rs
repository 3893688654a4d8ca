//! Affine cipher: `c = k1*p + k2 (mod power)`

use alloc::string::String;

use tracing::error;

use super::Error;
use crate::alphabet::{Alphabet, TextError};
use crate::arith::{mod_inverse, true_mod};
use crate::key::AffineKey;

pub fn encrypt(text: &str, key: &AffineKey, alphabet: &Alphabet) -> Result<String, TextError> {
    let m = alphabet.modulus();
    let (k1, k2) = (key.k1() as i64, key.k2() as i64);

    let idx = alphabet.indices(text)?;
    Ok(alphabet.text(idx.into_iter().map(|p| true_mod(k1 * p as i64 + k2, m))))
}

/// Decrypt with `p = k1^-1 * (c - k2) (mod power)`
///
/// errors: returns Error::Arithmetic if `k1` has no inverse, which key validation rules out
pub fn decrypt(text: &str, key: &AffineKey, alphabet: &Alphabet) -> Result<String, Error> {
    let m = alphabet.modulus();
    let k2 = key.k2() as i64;
    let k1_inv = mod_inverse(key.k1() as i64, m).map_err(|e| {
        error!(k1 = key.k1(), power = m, "affine key without inverse reached decrypt");
        Error::Arithmetic(e)
    })?;

    let idx = alphabet.indices(text)?;
    Ok(alphabet.text(idx.into_iter().map(|c| true_mod(k1_inv * (c as i64 - k2), m))))
}
