//! Bounded input acquisition: hex on the command line, a binary file, or
//! binary stdin. The size bound is enforced before any byte reaches a decoder.

use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::warn;

/// Where the payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Hex(String),
    File(PathBuf),
    Stdin,
}

/// Read the payload from `source`, refusing anything longer than `max` bytes.
pub fn read_payload(source: &Source, max: usize) -> Result<Vec<u8>> {
    match source {
        Source::Hex(text) => parse_hex(text, max),
        Source::File(path) => {
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            if let Ok(meta) = file.metadata() {
                if meta.len() > max as u64 {
                    warn!(path = %path.display(), len = meta.len(), max, "input rejected");
                    bail!("input is {} bytes, limit is {max}", meta.len());
                }
            }
            read_bounded(file, max).with_context(|| format!("cannot read {}", path.display()))
        }
        Source::Stdin => read_bounded(io::stdin().lock(), max).context("cannot read stdin"),
    }
}

/// Decode hex text, ignoring whitespace and an optional `0x` prefix.
pub fn parse_hex(text: &str, max: usize) -> Result<Vec<u8>> {
    let cleaned: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = cleaned
        .strip_prefix("0x")
        .or_else(|| cleaned.strip_prefix("0X"))
        .unwrap_or(&cleaned);
    if digits.len() / 2 > max {
        warn!(len = digits.len() / 2, max, "input rejected");
        bail!("input is {} bytes, limit is {max}", digits.len() / 2);
    }
    hex::decode(digits).context("input is not valid hex")
}

fn read_bounded(reader: impl Read, max: usize) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.take((max as u64).saturating_add(1)).read_to_end(&mut buf)?;
    if buf.len() > max {
        warn!(max, "input rejected");
        bail!("input exceeds limit of {max} bytes");
    }
    Ok(buf)
}
