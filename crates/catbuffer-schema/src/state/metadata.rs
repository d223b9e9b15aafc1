//! Metadata state entry.

use catbuffer_core::record;

use crate::enums::MetadataType;
use crate::types::{Address, ScopedMetadataKey, StateHeader};

record! {
    /// Size-prefixed metadata value.
    pub struct MetadataValue {
        count value_size: u16 => data,
        data: Vec<u8> = counted(value_size),
    }
}

record! {
    pub struct MetadataEntry {
        pub header: StateHeader,
        pub source_address: Address,
        pub target_address: Address,
        pub scoped_metadata_key: ScopedMetadataKey,
        /// Mosaic or namespace id; zero for account metadata.
        pub target_id: u64,
        pub metadata_type: MetadataType,
        pub value: MetadataValue,
    }
}
