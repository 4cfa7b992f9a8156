//! Address-trace ingestion.
//!
//! Traces are plain text: one address per line, hexadecimal with an
//! optional `0x` prefix. `#` starts a comment and blank lines are skipped.
//! The reader produces addresses and nothing else; hit/miss bookkeeping
//! stays with the driver.

use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// A trace that could not be read or parsed.
#[derive(Debug)]
pub enum TraceError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// A line that is neither blank, comment, nor a hex address.
    Parse { line: usize, text: String },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::Io(e) => write!(f, "trace i/o error: {}", e),
            TraceError::Parse { line, text } => {
                write!(f, "trace line {}: invalid address {:?}", line, text)
            }
        }
    }
}

impl Error for TraceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TraceError::Io(e) => Some(e),
            TraceError::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for TraceError {
    fn from(e: io::Error) -> Self {
        TraceError::Io(e)
    }
}

/// Reads a whole trace file into memory.
pub fn read_trace(path: impl AsRef<Path>) -> Result<Vec<u64>, TraceError> {
    parse_trace(BufReader::new(File::open(path)?))
}

/// Parses addresses from any buffered reader; see the module docs for the
/// accepted format. Line numbers in errors are 1-based.
pub fn parse_trace(reader: impl BufRead) -> Result<Vec<u64>, TraceError> {
    let mut addrs = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);

        match u64::from_str_radix(digits, 16) {
            Ok(addr) => addrs.push(addr),
            Err(_) => {
                return Err(TraceError::Parse {
                    line: idx + 1,
                    text: text.to_string(),
                });
            }
        }
    }

    Ok(addrs)
}
