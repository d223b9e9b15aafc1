//! Transfer body.
//!
//! ```text
//! [recipient 24][message_size u16][mosaics_count u8][reserved u32][reserved u8]
//! [mosaics: mosaics_count x 16][message: message_size bytes]
//! ```
//!
//! The message size is written before the mosaic count even though the
//! message itself comes last.

use catbuffer_core::record;

use crate::types::{UnresolvedAddress, UnresolvedMosaic};

record! {
    pub struct TransferBody {
        recipient_address: UnresolvedAddress,
        count message_size: u16 => message,
        count mosaics_count: u8 => mosaics,
        reserved transfer_reserved_1: u32,
        reserved transfer_reserved_2: u8,
        mosaics: Vec<UnresolvedMosaic> = counted(mosaics_count),
        message: Vec<u8> = counted(message_size),
    }
}
