//! Mosaic definition and supply change bodies.

use catbuffer_core::record;

use crate::enums::MosaicSupplyChangeAction;
use crate::flags::MosaicFlags;
use crate::types::{Amount, BlockDuration, MosaicId, MosaicNonce, UnresolvedMosaicId};

record! {
    pub struct MosaicDefinitionBody {
        pub id: MosaicId,
        pub duration: BlockDuration,
        pub nonce: MosaicNonce,
        pub flags: MosaicFlags,
        pub divisibility: u8,
    }
}

record! {
    pub struct MosaicSupplyChangeBody {
        pub mosaic_id: UnresolvedMosaicId,
        pub delta: Amount,
        pub action: MosaicSupplyChangeAction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_core::{Decode, Encode, ProtocolError};

    #[test]
    fn definition_carries_flags_byte() {
        let body = MosaicDefinitionBody::new(
            MosaicId(0x1234),
            BlockDuration(0),
            MosaicNonce(42),
            MosaicFlags::SUPPLY_MUTABLE | MosaicFlags::RESTRICTABLE,
            6,
        );
        let bytes = body.to_bytes();
        assert_eq!(bytes.len(), 22);
        assert_eq!(bytes[20], 0x05);
        assert_eq!(MosaicDefinitionBody::from_bytes(&bytes).unwrap(), body);

        let mut bad = bytes.to_vec();
        bad[20] = 0x10;
        assert_eq!(
            MosaicDefinitionBody::from_bytes(&bad),
            Err(ProtocolError::UnknownEnumValue {
                name: "MosaicFlags",
                raw: 0x10
            })
        );
    }
}
