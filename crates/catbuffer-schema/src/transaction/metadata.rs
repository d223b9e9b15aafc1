//! Metadata bodies: attach a keyed value to an account, mosaic or namespace.
//!
//! `value_size_delta` is the signed change against the previous value; the
//! ledger uses it, the codec only carries it.

use catbuffer_core::record;

use crate::types::{NamespaceId, ScopedMetadataKey, UnresolvedAddress, UnresolvedMosaicId};

record! {
    pub struct AccountMetadataBody {
        target_address: UnresolvedAddress,
        scoped_metadata_key: ScopedMetadataKey,
        value_size_delta: i16,
        count value_size: u16 => value,
        value: Vec<u8> = counted(value_size),
    }
}

record! {
    pub struct MosaicMetadataBody {
        target_address: UnresolvedAddress,
        scoped_metadata_key: ScopedMetadataKey,
        target_mosaic_id: UnresolvedMosaicId,
        value_size_delta: i16,
        count value_size: u16 => value,
        value: Vec<u8> = counted(value_size),
    }
}

record! {
    pub struct NamespaceMetadataBody {
        target_address: UnresolvedAddress,
        scoped_metadata_key: ScopedMetadataKey,
        target_namespace_id: NamespaceId,
        value_size_delta: i16,
        count value_size: u16 => value,
        value: Vec<u8> = counted(value_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_core::{Decode, Encode};

    #[test]
    fn negative_delta_round_trips() {
        let body = MosaicMetadataBody::new(
            UnresolvedAddress::zeroed(),
            ScopedMetadataKey(0xCAFE),
            UnresolvedMosaicId(7),
            -4,
            b"abc".to_vec(),
        )
        .unwrap();
        let bytes = body.to_bytes();
        assert_eq!(bytes.len(), 24 + 8 + 8 + 2 + 2 + 3);
        assert_eq!(&bytes[40..42], &(-4i16).to_le_bytes());
        let decoded = MosaicMetadataBody::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.value(), &b"abc".to_vec());
        assert_eq!(*decoded.value_size_delta(), -4);
    }
}
