//! Mosaic state entry.

use catbuffer_core::record;

use crate::flags::MosaicFlags;
use crate::types::{Address, Amount, BlockDuration, Height, MosaicId, StateHeader};

record! {
    pub struct MosaicProperties {
        pub flags: MosaicFlags,
        pub divisibility: u8,
        pub duration: BlockDuration,
    }
}

record! {
    pub struct MosaicDefinition {
        pub start_height: Height,
        pub owner_address: Address,
        pub revision: u32,
        pub properties: MosaicProperties,
    }
}

record! {
    pub struct MosaicEntry {
        pub header: StateHeader,
        pub mosaic_id: MosaicId,
        pub supply: Amount,
        pub definition: MosaicDefinition,
    }
}
