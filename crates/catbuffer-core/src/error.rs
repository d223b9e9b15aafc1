//! Error types for the codec engine.
//!
//! Every decode step and every fallible constructor returns
//! [`ProtocolError`]. Decoding is fail-fast: the first error aborts the
//! whole record and is surfaced to the caller unchanged.

use thiserror::Error;

/// Errors that can arise when decoding a byte stream or constructing a
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Buffer too short for the fixed or computed layout.
    #[error("buffer truncated at offset {offset}: needed {needed} bytes, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A scalar does not match any declared enumeration member (or a
    /// flag-set scalar carries undeclared bits).
    #[error("unknown {name} value: {raw:#x}")]
    UnknownEnumValue { name: &'static str, raw: u64 },

    /// A discriminator has no registered body layout.
    #[error("unknown {family} variant: {raw}")]
    UnknownVariant { family: &'static str, raw: String },

    /// A record was constructed from inconsistent parts.
    #[error("invalid construction: {0}")]
    InvalidConstruction(String),

    /// A size prefix disagrees with the number of bytes actually consumed.
    #[error("size mismatch: declared {declared} bytes, consumed {actual}")]
    SizeMismatch { declared: usize, actual: usize },

    /// A reserved or padding field was not zero.
    #[error("reserved field `{field}` is not zero")]
    NonZeroReserved { field: &'static str },

    /// A whole-buffer decode left bytes behind.
    #[error("{remaining} trailing bytes after record")]
    TrailingBytes { remaining: usize },

    /// A collection does not fit its declared count or size prefix.
    #[error("{count} does not fit a prefix with maximum {max}")]
    CountOverflow { count: usize, max: u64 },
}

impl ProtocolError {
    /// Shorthand for [`ProtocolError::InvalidConstruction`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        ProtocolError::InvalidConstruction(msg.into())
    }

    /// `true` for errors caused by running out of input, which a caller
    /// may be able to fix by supplying more bytes.
    pub fn is_truncation(&self) -> bool {
        matches!(self, ProtocolError::Truncated { .. })
    }
}

/// Result alias used across the engine.
pub type Result<T> = std::result::Result<T, ProtocolError>;
