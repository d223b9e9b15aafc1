//! catbuffer-inspect
//!
//! Decode a ledger entity from hex or binary input, print it, and check that
//! re-encoding reproduces the input byte for byte.

pub mod config;
pub mod family;
pub mod input;
pub mod summary;

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};

pub use config::{Config, ConfigError, OutputMode};
pub use family::{decode, Decoded, Family, Registries};

/// Byte-exact comparison of a decoded entity with the input it came from.
pub fn verify_roundtrip(decoded: &Decoded, input: &[u8]) -> Result<()> {
    let encoded = decoded.to_bytes();
    if encoded == input {
        return Ok(());
    }
    let at = encoded
        .iter()
        .zip(input)
        .position(|(a, b)| a != b)
        .unwrap_or_else(|| encoded.len().min(input.len()));
    warn!(family = %decoded.family(), at, "round-trip mismatch");
    bail!(
        "re-encoded {} differs from input at byte {at} ({} bytes in, {} bytes out)",
        decoded.family(),
        input.len(),
        encoded.len()
    )
}

/// Decode `input` as `family` and render it per `config`.
pub fn inspect(
    family: Family,
    input: &[u8],
    config: &Config,
    registries: &Registries,
) -> Result<String> {
    if input.len() > config.max_input_bytes {
        warn!(len = input.len(), max = config.max_input_bytes, "input rejected");
        bail!("input is {} bytes, limit is {}", input.len(), config.max_input_bytes);
    }
    let decoded = decode(family, input, registries)
        .with_context(|| format!("cannot decode {} bytes as {family}", input.len()))?;
    debug!(%family, kind = %decoded.kind(), size = decoded.size(), "decoded");
    if config.verify_roundtrip {
        verify_roundtrip(&decoded, input)?;
    }
    Ok(summary::format_output(&decoded, config.output))
}

/// Lines listing the registered discriminators of `family`.
pub fn list_kinds(family: Family, registries: &Registries) -> Result<Vec<String>> {
    match registries.kinds(family) {
        Some(kinds) => Ok(kinds),
        None => bail!("{family} has a single fixed layout and no registry"),
    }
}
