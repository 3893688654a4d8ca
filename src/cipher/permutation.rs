//! Columnar transposition
//!
//! Text is laid into rows as wide as the key, and within every row input
//! column `i` moves to output column `order[i]`. The last row is padded up
//! to full width.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use super::{strip_padding, Encoded, Error};
use crate::alphabet::Alphabet;
use crate::key::PermutationKey;

/// Number of symbols needed to fill the last row
pub fn padding_len(len: usize, width: usize) -> usize {
    (width - len % width) % width
}

/// Encrypt, filling the last row with `pad`
///
/// errors: returns Error::Text if the text has a symbol outside the alphabet
pub fn encrypt(
    text: &str,
    key: &PermutationKey,
    alphabet: &Alphabet,
    pad: char,
) -> Result<Encoded, Error> {
    alphabet.indices(text)?;
    let order = key.order();
    let width = key.width();

    let mut symbols: Vec<char> = text.chars().collect();
    let padding = padding_len(symbols.len(), width);
    symbols.extend(core::iter::repeat(pad).take(padding));

    let mut out = String::with_capacity(text.len() + padding * pad.len_utf8());
    let mut row = vec![pad; width];
    for chunk in symbols.chunks_exact(width) {
        for (i, &c) in chunk.iter().enumerate() {
            row[order[i]] = c;
        }
        out.extend(row.iter());
    }

    Ok(Encoded { text: out, padding })
}

/// Undo the column reorder and drop `padding` trailing symbols
///
/// errors: returns Error when the text has a symbol outside the alphabet, does
/// not fill whole rows, or padding exceeds its length
pub fn decrypt(
    text: &str,
    key: &PermutationKey,
    alphabet: &Alphabet,
    padding: usize,
) -> Result<String, Error> {
    alphabet.indices(text)?;
    let order = key.order();
    let width = key.width();

    let symbols: Vec<char> = text.chars().collect();
    if symbols.len() % width != 0 {
        return Err(Error::BlockLength {
            len: symbols.len(),
            block: width,
        });
    }

    let mut out = String::with_capacity(text.len());
    for chunk in symbols.chunks_exact(width) {
        out.extend(order.iter().map(|&j| chunk[j]));
    }

    strip_padding(out, padding)
}
