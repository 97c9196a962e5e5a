use anyhow::{Context, Result, bail};
use log::{debug, info};
use std::fs::{File, OpenOptions};
use std::io::{self, BufRead, Read, Seek, Write};
use std::path::Path;

use crate::decorator::{Decoration, display_name};
use crate::input::read_paths;

const BLANK_LINE: &str = "\n";

/// Decorates every path read from `input`, in order, stopping at the first
/// failure. Returns the number of files rewritten.
pub fn ingest<R: BufRead>(input: R, decoration: &dyn Decoration) -> Result<usize> {
    let mut decorated = 0;

    for path in read_paths(input) {
        let path = path?;
        decorate(&path, decoration)?;
        info!("Decorated {}", path.display());
        decorated += 1;
    }

    Ok(decorated)
}

/// Wraps the file at `path` with the header and trailer of `decoration`,
/// replacing its contents.
pub fn decorate(path: &Path, decoration: &dyn Decoration) -> Result<()> {
    // Write access is checked by the open itself, before anything is read
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .with_context(|| format!("Failed to open {} for writing", path.display()))?;

    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if bytes.is_empty() {
        bail!("{} is empty, nothing to decorate", path.display());
    }
    if content_inspector::inspect(&bytes).is_binary() {
        bail!("{} looks like a binary file", path.display());
    }

    let content = String::from_utf8(bytes)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;

    let output = compose(&display_name(path), &content, decoration);
    overwrite(&mut file, &output).with_context(|| format!("Failed to write {}", path.display()))
}

/// Builds the decorated text: header, optional separator, the original lines
/// untouched, trailer and a final blank line.
pub fn compose(display_name: &str, content: &str, decoration: &dyn Decoration) -> String {
    // split_inclusive keeps each terminator, so CRLF content is not rewritten
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let starts_blank = lines.first().is_some_and(|line| is_blank(line));

    debug!(
        "{display_name}: {} lines, separator {}",
        lines.len(),
        if starts_blank { "skipped" } else { "inserted" }
    );

    let mut output = String::with_capacity(content.len() + 512);
    for line in decoration.header(display_name) {
        output.push_str(&line);
    }
    if !starts_blank {
        output.push_str(BLANK_LINE);
    }
    for line in &lines {
        output.push_str(line);
    }
    for line in decoration.trailer() {
        output.push_str(&line);
    }
    output.push_str(BLANK_LINE);
    output
}

fn is_blank(line: &str) -> bool {
    line == "\n" || line == "\r\n"
}

/// Truncates the already open file and writes `contents` into the same inode,
/// so owner, hard links and extended attributes stay as they were.
fn overwrite(file: &mut File, contents: &str) -> io::Result<()> {
    file.set_len(0)?;
    file.rewind()?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
