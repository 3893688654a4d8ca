//! One run's alphabet, text and raw key, loaded from the configured files

use std::path::PathBuf;

use classic_ciphers::alphabet::{self, TextError};
use classic_ciphers::{cipher, decode, encode, key, Alphabet, Cipher, Encoded};
use thiserror::Error;
use tracing::{info, warn};

use crate::files;

/// Used when the alphabet file is missing or unreadable
pub const DEFAULT_ALPHABET: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ ";

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    File(#[from] files::Error),
    #[error(transparent)]
    Alphabet(#[from] alphabet::Error),
    #[error(transparent)]
    Text(#[from] TextError),
    #[error(transparent)]
    Key(#[from] key::Error),
    #[error(transparent)]
    Cipher(#[from] cipher::Error),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// Where a session reads its inputs and writes its results
#[derive(Clone, Debug)]
pub struct Paths {
    pub alphabet: PathBuf,
    pub input: PathBuf,
    pub key: PathBuf,
    pub encrypt_out: PathBuf,
    pub decrypt_out: PathBuf,
}

/// Result of one cipher run
#[derive(Debug)]
pub struct Outcome {
    pub text: String,
    pub padding: usize,
    pub written_to: PathBuf,
}

pub struct Session {
    pub alphabet: Alphabet,
    pub text: String,
    pub key: String,
    paths: Paths,
}

impl Session {
    /// Read the alphabet, text and key files
    ///
    /// Falls back to [`DEFAULT_ALPHABET`] when the alphabet file can't be read.
    /// Text is checked against the alphabet per cipher, in [`Session::run`].
    pub fn load(paths: Paths) -> Result<Self, Error> {
        let raw = match files::read_single_line(&paths.alphabet) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{}, now using default alphabet", e);
                DEFAULT_ALPHABET.to_string()
            }
        };
        let alphabet = Alphabet::new(&raw)?;

        let text = files::read_single_line(&paths.input)?;
        let key = files::read_single_line(&paths.key)?;

        info!(power = alphabet.power(), "session loaded");
        Ok(Self {
            alphabet,
            text,
            key,
            paths,
        })
    }

    #[cfg(test)]
    pub fn from_parts(alphabet: Alphabet, text: String, key: String, paths: Paths) -> Self {
        Self {
            alphabet,
            text,
            key,
            paths,
        }
    }

    /// Validate the key and text for `cipher`, run it, and write the result file
    pub fn run(&self, cipher: Cipher, op: Operation, padding: usize) -> Result<Outcome, Error> {
        let key = cipher.parse_key(&self.key, &self.alphabet)?;
        if !cipher.passes_unknown_symbols() {
            self.alphabet.validate_text(&self.text)?;
        } else if self.text.is_empty() {
            return Err(TextError::Empty.into());
        }

        let (Encoded { text, padding }, path) = match op {
            Operation::Encrypt => (
                encode(&self.text, &key, &self.alphabet, &mut rand::thread_rng())?,
                &self.paths.encrypt_out,
            ),
            Operation::Decrypt => (
                Encoded {
                    text: decode(&self.text, &key, &self.alphabet, padding)?,
                    padding: 0,
                },
                &self.paths.decrypt_out,
            ),
        };

        files::write_result(path, &text)?;
        info!(?cipher, ?op, path = %path.display(), "result written");

        Ok(Outcome {
            text,
            padding,
            written_to: path.clone(),
        })
    }
}
