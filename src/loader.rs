//! Dataset loading
//!
//! Reads whitespace/newline-delimited doubles from a file into memory. The
//! caller declares how many values it expects; reading stops once that many
//! have been parsed, and a file holding fewer than declared is an error.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Error while loading a dataset from disk.
#[derive(Debug)]
pub enum LoadError {
    /// Underlying I/O failure (unreadable path, read error)
    Io(io::Error),
    /// A token failed to parse as a double
    Parse {
        /// 1-based line number of the offending token
        line: usize,
        /// The token that failed to parse
        token: String,
    },
    /// The file held fewer values than declared
    TooFew {
        /// Declared element count
        expected: usize,
        /// Values actually present
        found: usize,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(err) => write!(f, "could not read data file: {}", err),
            LoadError::Parse { line, token } => {
                write!(f, "failed to parse value {:?} at line {}", token, line)
            }
            LoadError::TooFew { expected, found } => {
                write!(f, "expected {} values, file holds only {}", expected, found)
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// Load `expected` whitespace-delimited doubles from `path`.
///
/// Stops reading as soon as `expected` values have been parsed; trailing
/// file content is ignored.
pub fn load_values(path: impl AsRef<Path>, expected: usize) -> Result<Vec<f64>, LoadError> {
    if expected == 0 {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut data = Vec::with_capacity(expected);
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| LoadError::Parse {
                line: lineno + 1,
                token: token.to_string(),
            })?;
            data.push(value);
            if data.len() == expected {
                return Ok(data);
            }
        }
    }

    Err(LoadError::TooFew {
        expected,
        found: data.len(),
    })
}
