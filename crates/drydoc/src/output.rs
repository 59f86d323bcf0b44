use std::io::{self, Write};

/// Write rendered text to stdout exactly as produced, without appending a
/// newline; trailing-newline handling belongs to the document model.
pub fn write_stdout(s: &str) -> io::Result<()> {
    let mut out = io::stdout().lock();
    out.write_all(s.as_bytes())?;
    out.flush()
}
