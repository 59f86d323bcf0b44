//! Text reading and writing with an explicit encoding

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{DrydocError, Result};

/// Text encoding for document I/O.
///
/// Only UTF-8 is supported; other labels are rejected with
/// [`DrydocError::EncodingUnsupported`] so callers fail up front rather
/// than mis-decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Encoding {
    #[default]
    Utf8,
}

impl FromStr for Encoding {
    type Err = DrydocError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Encoding::Utf8),
            other => Err(DrydocError::EncodingUnsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf-8"),
        }
    }
}

/// Read a file as text. Invalid byte sequences become U+FFFD.
pub fn read_text(path: &Path, encoding: Encoding) -> Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(decode(&bytes, encoding))
}

/// Read all of standard input as text.
pub fn read_stdin(encoding: Encoding) -> Result<String> {
    let mut bytes = Vec::new();
    std::io::stdin().read_to_end(&mut bytes)?;
    Ok(decode(&bytes, encoding))
}

/// Write text to a file.
pub fn write_text(path: &Path, text: &str, encoding: Encoding) -> Result<()> {
    match encoding {
        Encoding::Utf8 => std::fs::write(path, text)?,
    }
    Ok(())
}

fn decode(bytes: &[u8], encoding: Encoding) -> String {
    match encoding {
        Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
    }
}
