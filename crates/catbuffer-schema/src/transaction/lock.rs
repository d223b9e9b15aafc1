//! Hash lock and secret lock / proof bodies.

use catbuffer_core::record;

use crate::enums::LockHashAlgorithm;
use crate::types::{BlockDuration, Hash256, UnresolvedAddress, UnresolvedMosaic};

record! {
    /// Locks funds until an aggregate bonded with `hash` is confirmed.
    pub struct HashLockBody {
        pub mosaic: UnresolvedMosaic,
        pub duration: BlockDuration,
        pub hash: Hash256,
    }
}

record! {
    pub struct SecretLockBody {
        pub recipient_address: UnresolvedAddress,
        pub secret: Hash256,
        pub mosaic: UnresolvedMosaic,
        pub duration: BlockDuration,
        pub hash_algorithm: LockHashAlgorithm,
    }
}

record! {
    /// Reveals the proof unlocking a secret lock.
    pub struct SecretProofBody {
        recipient_address: UnresolvedAddress,
        secret: Hash256,
        count proof_size: u16 => proof,
        hash_algorithm: LockHashAlgorithm,
        proof: Vec<u8> = counted(proof_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_core::{Decode, Encode, ProtocolError};

    fn proof(len: usize) -> catbuffer_core::Result<SecretProofBody> {
        SecretProofBody::new(
            UnresolvedAddress::new([0x98; 24]),
            Hash256::new([0x01; 32]),
            LockHashAlgorithm::Hash160,
            vec![0xEE; len],
        )
    }

    #[test]
    fn proof_size_precedes_algorithm() {
        let body = proof(3).unwrap();
        let bytes = body.to_bytes();
        assert_eq!(bytes.len(), 24 + 32 + 2 + 1 + 3);
        assert_eq!(&bytes[56..58], &[3, 0]);
        assert_eq!(bytes[58], 1);
        assert_eq!(SecretProofBody::from_bytes(&bytes).unwrap(), body);
    }

    #[test]
    fn oversized_proof_is_rejected() {
        assert_eq!(
            proof(70_000),
            Err(ProtocolError::CountOverflow {
                count: 70_000,
                max: u64::from(u16::MAX)
            })
        );
    }
}
