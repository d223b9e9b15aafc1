//! catbuffer-core
//!
//! Reusable codec engine for a byte-exact, little-endian ledger wire format:
//! - byte cursor and encode/decode/size contracts
//! - primitive scalars and fixed-length byte buffers
//! - closed enumerations and flag-sets
//! - collections (fixed count, count prefixed, size prefixed, remaining)
//! - declarative composite records
//! - layered envelope + body records with an injectable body registry
//!
//! Nothing here knows about any concrete entity; see `catbuffer-schema`.

pub mod codec;
pub mod collection;
pub mod enums;
pub mod error;
pub mod flags;
pub mod layered;
pub mod primitives;
pub mod reader;
pub mod record;

pub use codec::{Decode, Encode};
pub use collection::LengthPrefix;
pub use error::{ProtocolError, Result};
pub use layered::{Envelope, Layered, Registry, Variant};
pub use reader::Reader;

pub use bytes::{Bytes, BytesMut};

#[doc(hidden)]
pub use bitflags;
#[doc(hidden)]
pub use hex;
