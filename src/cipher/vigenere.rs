//! Polyalphabetic (Vigenère) cipher
//!
//! The keyword repeats against text positions: the symbol at position `i`
//! is shifted by `keyword[i mod L]`. Symbols outside the alphabet are copied
//! through unchanged but still occupy their position. A variant that advances
//! the keyword only on alphabet symbols gives different output on text with
//! punctuation.

use alloc::string::String;

use crate::alphabet::Alphabet;
use crate::arith::true_mod;
use crate::key::VigenereKey;

// sign is +1 to encrypt, -1 to decrypt
fn shift_cycled(text: &str, key: &VigenereKey, alphabet: &Alphabet, sign: i64) -> String {
    let keyword = key.as_slice();
    let m = alphabet.modulus();

    text.chars()
        .enumerate()
        .map(|(i, c)| match alphabet.index_of(c) {
            Some(p) => {
                let k = keyword[i % keyword.len()] as i64;
                alphabet.symbol(true_mod(p as i64 + sign * k, m))
            }
            None => c,
        })
        .collect()
}

pub fn encrypt(text: &str, key: &VigenereKey, alphabet: &Alphabet) -> String {
    shift_cycled(text, key, alphabet, 1)
}

pub fn decrypt(text: &str, key: &VigenereKey, alphabet: &Alphabet) -> String {
    shift_cycled(text, key, alphabet, -1)
}
