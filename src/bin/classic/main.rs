//! Encrypt and decrypt single-line text files with classical ciphers
//!
//! Reads the alphabet, text and key from files, runs one cipher (given on
//! the command line, or picked from an interactive menu) and writes the
//! result to the encrypt or decrypt file.

use std::io;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use classic_ciphers::Cipher;
use tracing_subscriber::{fmt, EnvFilter};

mod files;
mod menu;
mod session;

use session::{Operation, Paths, Session};

#[derive(Parser, Debug)]
#[command(name = "classic", version, about = "Classical ciphers over a custom alphabet")]
struct Cli {
    /// File holding the alphabet, one line of distinct symbols
    #[arg(long, default_value = "alphabet.txt")]
    alphabet: PathBuf,

    /// File holding the text to encrypt or decrypt
    #[arg(long, default_value = "in.txt")]
    input: PathBuf,

    /// File holding the key
    #[arg(long, default_value = "key.txt")]
    key: PathBuf,

    /// Where encryption results are written
    #[arg(long, default_value = "encrypt.txt")]
    encrypt_out: PathBuf,

    /// Where decryption results are written
    #[arg(long, default_value = "decrypt.txt")]
    decrypt_out: PathBuf,

    /// Cipher to run; without it an interactive menu is shown
    #[arg(long, value_enum, requires = "op")]
    cipher: Option<CipherArg>,

    #[arg(long, value_enum, requires = "cipher")]
    op: Option<OpArg>,

    /// Trailing padding symbols to strip when decrypting
    #[arg(long, default_value_t = 0)]
    padding: usize,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CipherArg {
    Caesar,
    Affine,
    Substitution,
    Hill,
    Permutation,
    PermutationNumeric,
    Vigenere,
}

impl From<CipherArg> for Cipher {
    fn from(arg: CipherArg) -> Self {
        match arg {
            CipherArg::Caesar => Cipher::Caesar,
            CipherArg::Affine => Cipher::Affine,
            CipherArg::Substitution => Cipher::Substitution,
            CipherArg::Hill => Cipher::Hill,
            CipherArg::Permutation => Cipher::Permutation,
            CipherArg::PermutationNumeric => Cipher::PermutationNumeric,
            CipherArg::Vigenere => Cipher::Vigenere,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OpArg {
    Encrypt,
    Decrypt,
}

impl From<OpArg> for Operation {
    fn from(arg: OpArg) -> Self {
        match arg {
            OpArg::Encrypt => Operation::Encrypt,
            OpArg::Decrypt => Operation::Decrypt,
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries results and the menu
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = Paths {
        alphabet: cli.alphabet,
        input: cli.input,
        key: cli.key,
        encrypt_out: cli.encrypt_out,
        decrypt_out: cli.decrypt_out,
    };

    let session = match Session::load(paths) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("error during initialization: {}", e);
            process::exit(1);
        }
    };

    let alphabet: String = session.alphabet.symbols().iter().collect();
    println!(
        "Your alphabet: {} It's power: {}",
        alphabet,
        session.alphabet.power()
    );

    match (cli.cipher, cli.op) {
        (Some(cipher), Some(op)) => match session.run(cipher.into(), op.into(), cli.padding) {
            Ok(outcome) => {
                println!("{}", outcome.text);
                if outcome.padding > 0 {
                    println!(
                        "{} padding symbol(s) appended, decrypt with --padding {}",
                        outcome.padding, outcome.padding
                    );
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        },
        _ => {
            let stdin = io::stdin();
            if let Err(e) = menu::run(stdin.lock(), io::stdout(), &session) {
                eprintln!("error: {}", e);
                process::exit(1);
            }
        }
    }
}
