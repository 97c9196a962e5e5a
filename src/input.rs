use anyhow::{Context, Result, bail};
use std::io::BufRead;
use std::path::PathBuf;

/// Yields one path per input line, trimmed of surrounding whitespace.
///
/// Lines are pulled lazily so a failure on one path stops the reader before
/// anything after it is consumed.
pub fn read_paths<R: BufRead>(reader: R) -> impl Iterator<Item = Result<PathBuf>> {
    reader.lines().map(|line| -> Result<PathBuf> {
        let line = line.context("Failed to read path from standard input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            bail!("Empty path in input");
        }
        Ok(PathBuf::from(trimmed))
    })
}
