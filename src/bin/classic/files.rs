//! Single-line input files and result files

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unable to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("unable to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("file {} has more than one row", .0.display())]
    MultipleLines(PathBuf),
}

/// Read the only line of a file, without its line ending
///
/// An empty file reads as an empty string.
pub fn read_single_line(path: &Path) -> Result<String, Error> {
    let read_err = |source| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_err)?;
    let mut lines = BufReader::new(file).lines();

    let first = match lines.next() {
        Some(line) => line.map_err(read_err)?,
        None => String::new(),
    };
    if lines.next().is_some() {
        return Err(Error::MultipleLines(path.to_path_buf()));
    }

    Ok(first)
}

/// Write a result verbatim, replacing any previous contents
pub fn write_result(path: &Path, text: &str) -> Result<(), Error> {
    fs::write(path, text).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
