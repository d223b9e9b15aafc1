//! Lock state entries.

use catbuffer_core::record;

use crate::enums::{LockHashAlgorithm, LockStatus};
use crate::types::{Address, Hash256, Height, Mosaic, StateHeader};

record! {
    pub struct HashLockInfo {
        pub header: StateHeader,
        pub owner_address: Address,
        pub mosaic: Mosaic,
        pub end_height: Height,
        pub status: LockStatus,
        pub hash: Hash256,
    }
}

record! {
    pub struct SecretLockInfo {
        pub header: StateHeader,
        pub owner_address: Address,
        pub mosaic: Mosaic,
        pub end_height: Height,
        pub status: LockStatus,
        pub hash_algorithm: LockHashAlgorithm,
        pub secret: Hash256,
        pub recipient_address: Address,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Amount, MosaicId};
    use catbuffer_core::{Decode, Encode, ProtocolError};

    #[test]
    fn secret_lock_info_layout() {
        let info = SecretLockInfo::new(
            StateHeader::CURRENT,
            Address::new([1; 24]),
            Mosaic::new(MosaicId(9), Amount(100)),
            Height(55),
            LockStatus::Unused,
            LockHashAlgorithm::Hash256,
            Hash256::new([2; 32]),
            Address::new([3; 24]),
        );
        let bytes = info.to_bytes();
        assert_eq!(bytes.len(), 2 + 24 + 16 + 8 + 1 + 1 + 32 + 24);
        assert_eq!(&bytes[..2], &[1, 0]);
        assert_eq!(SecretLockInfo::from_bytes(&bytes).unwrap(), info);
    }

    #[test]
    fn bad_status_aborts() {
        let info = HashLockInfo::new(
            StateHeader::CURRENT,
            Address::zeroed(),
            Mosaic::new(MosaicId(1), Amount(1)),
            Height(1),
            LockStatus::Used,
            Hash256::zeroed(),
        );
        let mut bytes = info.to_bytes().to_vec();
        bytes[2 + 24 + 16 + 8] = 9;
        assert_eq!(
            HashLockInfo::from_bytes(&bytes),
            Err(ProtocolError::UnknownEnumValue {
                name: "LockStatus",
                raw: 9
            })
        );
    }
}
