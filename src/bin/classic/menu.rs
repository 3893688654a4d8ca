//! Interactive cipher menu
//!
//! Choices are read as whitespace-separated tokens, so answers may be typed
//! on one line or several. End of input ends the session.

use std::io::{self, BufRead, Write};

use classic_ciphers::Cipher;

use crate::session::{Operation, Session};

const CIPHERS: [(u32, &str, Cipher); 6] = [
    (1, "Caesar cipher", Cipher::Caesar),
    (2, "Affine cipher", Cipher::Affine),
    (3, "Simple substitution cipher", Cipher::Substitution),
    (4, "Hill cipher", Cipher::Hill),
    (5, "Permutation cipher", Cipher::Permutation),
    (6, "Vigenere cipher", Cipher::Vigenere),
];

/// Whitespace token reader over a line-oriented input
struct Tokens<R> {
    input: R,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Self {
        Self {
            input,
            pending: Vec::new(),
        }
    }

    // None at end of input
    fn next(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending = line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop())
    }

    // Keep asking until the answer parses and passes `accept`
    fn choose<W: Write>(
        &mut self,
        out: &mut W,
        retry: &str,
        accept: impl Fn(u32) -> bool,
    ) -> io::Result<Option<u32>> {
        loop {
            let token = match self.next()? {
                Some(token) => token,
                None => return Ok(None),
            };
            match token.parse::<u32>() {
                Ok(n) if accept(n) => return Ok(Some(n)),
                _ => writeln!(out, "{}", retry)?,
            }
        }
    }
}

/// Run the menu until the user picks 0 or input ends
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, session: &Session) -> io::Result<()> {
    let mut tokens = Tokens::new(input);

    loop {
        writeln!(out, "---------------------------")?;
        writeln!(out, "Choose the cryptographic system:")?;
        for (n, name, _) in CIPHERS.iter() {
            writeln!(out, "{}: {}", n, name)?;
        }
        writeln!(out, "0: Exit")?;

        let choice = match tokens.choose(
            &mut out,
            "the wrong choice of cryptosystem, try again:",
            |n| n <= 6,
        )? {
            Some(0) | None => break,
            Some(n) => n,
        };
        let cipher = match CIPHERS.iter().find(|(n, _, _)| *n == choice) {
            Some((_, _, cipher)) => *cipher,
            None => continue,
        };

        writeln!(out, "Choose the operation:")?;
        writeln!(out, "1: Encryption")?;
        writeln!(out, "2: Decryption")?;
        let op = match tokens.choose(
            &mut out,
            "the wrong choice of operation, try again:",
            |n| n == 1 || n == 2,
        )? {
            Some(1) => Operation::Encrypt,
            Some(_) => Operation::Decrypt,
            None => break,
        };

        let mut padding = 0;
        if op == Operation::Decrypt && matches!(cipher, Cipher::Hill | Cipher::Permutation) {
            writeln!(out, "Number of padding symbols added at encryption (0 if none):")?;
            padding = match tokens.choose(&mut out, "enter a non-negative number:", |_| true)? {
                Some(n) => n as usize,
                None => break,
            };
        }

        match session.run(cipher, op, padding) {
            Ok(outcome) => {
                writeln!(out, "{}", outcome.text)?;
                if outcome.padding > 0 {
                    writeln!(
                        out,
                        "{} padding symbol(s) appended, keep this count for decryption",
                        outcome.padding
                    )?;
                }
                writeln!(out, "Result written to {}", outcome.written_to.display())?;
            }
            // key and text problems only cancel this choice
            Err(e) => writeln!(out, "{}", e)?,
        }
    }

    writeln!(out, "Ending process")?;
    Ok(())
}
