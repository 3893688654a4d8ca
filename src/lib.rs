//! Classical ciphers over a user-defined alphabet
//!
//! Shift (Caesar), affine, monoalphabetic substitution, columnar
//! transposition, Vigenère and 2x2 Hill, all computed modulo the power of
//! an alphabet built from an arbitrary string of distinct symbols.
//!
//! ```
//! use classic_ciphers::{decode, encode, Alphabet, Cipher};
//!
//! let alphabet = Alphabet::new("ABC").unwrap();
//! let key = Cipher::Caesar.parse_key("B", &alphabet).unwrap();
//!
//! let encoded = encode("AB", &key, &alphabet, &mut rand::thread_rng()).unwrap();
//! assert_eq!(encoded.text, "BC");
//! assert_eq!(decode(&encoded.text, &key, &alphabet, encoded.padding).unwrap(), "AB");
//! ```

#![no_std]

extern crate alloc;

pub mod alphabet;
pub mod arith;
pub mod cipher;
pub mod key;

pub use alphabet::Alphabet;
pub use cipher::{decode, encode, Cipher, Encoded};
pub use key::Key;
