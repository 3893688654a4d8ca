//! 2x2 Hill cipher over symbol pairs
//!
//! Each pair `[p1 p2]` is multiplied as a row vector by the key matrix mod
//! power. Decryption runs the same product with the inverse matrix.

use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, error};

use super::{strip_padding, Encoded, Error};
use crate::alphabet::{Alphabet, TextError};
use crate::arith::Matrix2;
use crate::key::HillKey;

fn apply_pairs(idx: &[usize], matrix: &Matrix2, alphabet: &Alphabet) -> String {
    let m = alphabet.modulus();
    let mut residues = Vec::with_capacity(idx.len());
    for pair in idx.chunks_exact(2) {
        let (c1, c2) = matrix.apply(pair[0] as i64, pair[1] as i64, m);
        residues.push(c1);
        residues.push(c2);
    }
    alphabet.text(residues)
}

/// Encrypt, appending `pad` when the text has odd length
///
/// errors: returns Error::Text if the text or `pad` is not from the alphabet
pub fn encrypt(text: &str, key: &HillKey, alphabet: &Alphabet, pad: char) -> Result<Encoded, Error> {
    let mut idx = alphabet.indices(text)?;

    let padding = idx.len() % 2;
    if padding == 1 {
        idx.push(alphabet.index_of(pad).ok_or(TextError::UnknownSymbol(pad))?);
    }

    Ok(Encoded {
        text: apply_pairs(&idx, key.matrix(), alphabet),
        padding,
    })
}

/// Decrypt with the inverse key matrix and drop `padding` trailing symbols
///
/// errors: returns Error for odd-length text, or Error::Arithmetic if the key
/// has no inverse, which key validation rules out
pub fn decrypt(
    text: &str,
    key: &HillKey,
    alphabet: &Alphabet,
    padding: usize,
) -> Result<String, Error> {
    let idx = alphabet.indices(text)?;
    if idx.len() % 2 != 0 {
        return Err(Error::BlockLength {
            len: idx.len(),
            block: 2,
        });
    }

    let inverse = key.matrix().invert_mod(alphabet.modulus()).map_err(|e| {
        error!(matrix = ?key.matrix(), "hill key without inverse reached decrypt");
        Error::Arithmetic(e)
    })?;
    debug!(?inverse, "hill inverse");

    strip_padding(apply_pairs(&idx, &inverse, alphabet), padding)
}
