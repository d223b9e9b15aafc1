//! Block headers and finalization records.
//!
//! A block header is a layered record whose entity type picks the footer:
//! nemesis and importance blocks carry an importance footer, normal blocks
//! a reserved word.

use catbuffer_core::{record, BytesMut, Encode, Envelope, Layered, Variant};

use crate::enums::{EntityType, NetworkType};
use crate::types::{
    Address, Amount, BlockFeeMultiplier, Difficulty, FinalizationEpoch, FinalizationPoint,
    Hash256, Height, PublicKey, Signature, Timestamp, VrfProof,
};

/// Block header version written by current nodes.
pub const BLOCK_VERSION: u8 = 1;

/// Block header with its footer.
pub type BlockHeaderEntity = Layered<BlockHeader, BlockBody>;

record! {
    pub struct BlockHeader {
        reserved verifiable_entity_header_reserved: u32,
        pub signature: Signature,
        pub signer_public_key: PublicKey,
        reserved entity_body_reserved: u32,
        pub version: u8,
        pub network: NetworkType,
        pub entity_type: EntityType,
        pub height: Height,
        pub timestamp: Timestamp,
        pub difficulty: Difficulty,
        pub generation_hash_proof: VrfProof,
        pub previous_block_hash: Hash256,
        pub transactions_hash: Hash256,
        pub receipts_hash: Hash256,
        pub state_hash: Hash256,
        pub beneficiary_address: Address,
        pub fee_multiplier: BlockFeeMultiplier,
    }
}

impl Envelope for BlockHeader {
    type Kind = EntityType;
    const FAMILY: &'static str = "block";

    fn kind(&self) -> EntityType {
        self.entity_type
    }
}

record! {
    /// Voting and harvesting summary closing an importance block.
    pub struct ImportanceBlockFooter {
        pub voting_eligible_accounts_count: u32,
        pub harvesting_eligible_accounts_count: u64,
        pub total_voting_balance: Amount,
        pub previous_importance_block_hash: Hash256,
    }
}

record! {
    pub struct NormalBlockFooter {
        reserved block_header_reserved: u32,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockBody {
    Nemesis(ImportanceBlockFooter),
    Normal(NormalBlockFooter),
    Importance(ImportanceBlockFooter),
}

impl BlockBody {
    pub fn entity_type(&self) -> EntityType {
        match self {
            BlockBody::Nemesis(_) => EntityType::NemesisBlockHeader,
            BlockBody::Normal(_) => EntityType::NormalBlockHeader,
            BlockBody::Importance(_) => EntityType::ImportanceBlockHeader,
        }
    }

    pub fn importance_footer(&self) -> Option<&ImportanceBlockFooter> {
        match self {
            BlockBody::Nemesis(footer) | BlockBody::Importance(footer) => Some(footer),
            BlockBody::Normal(_) => None,
        }
    }
}

impl Encode for BlockBody {
    fn size(&self) -> usize {
        match self {
            BlockBody::Nemesis(f) | BlockBody::Importance(f) => f.size(),
            BlockBody::Normal(f) => f.size(),
        }
    }

    fn encode(&self, out: &mut BytesMut) {
        match self {
            BlockBody::Nemesis(f) | BlockBody::Importance(f) => f.encode(out),
            BlockBody::Normal(f) => f.encode(out),
        }
    }
}

impl Variant for BlockBody {
    type Kind = EntityType;

    fn matches(&self, kind: &EntityType) -> bool {
        self.entity_type() == *kind
    }
}

// =============================================================================
// Finalization
// =============================================================================

record! {
    pub struct FinalizationRound {
        pub epoch: FinalizationEpoch,
        pub point: FinalizationPoint,
    }
}

record! {
    pub struct FinalizedBlockHeader {
        pub round: FinalizationRound,
        pub height: Height,
        pub hash: Hash256,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::block_registry;
    use crate::types::{ProofGamma, ProofScalar, ProofVerificationHash};
    use catbuffer_core::{Decode, ProtocolError};

    fn header(entity_type: EntityType) -> BlockHeader {
        BlockHeader::new(
            Signature::zeroed(),
            PublicKey::new([7; 32]),
            BLOCK_VERSION,
            NetworkType::Mainnet,
            entity_type,
            Height(2),
            Timestamp(123),
            Difficulty(100_000_000_000_000),
            VrfProof::new(
                ProofGamma::zeroed(),
                ProofVerificationHash::zeroed(),
                ProofScalar::zeroed(),
            ),
            Hash256::zeroed(),
            Hash256::zeroed(),
            Hash256::zeroed(),
            Hash256::zeroed(),
            Address::zeroed(),
            BlockFeeMultiplier(100),
        )
    }

    fn normal_block() -> BlockHeaderEntity {
        BlockHeaderEntity::new(
            header(EntityType::NormalBlockHeader),
            BlockBody::Normal(NormalBlockFooter::new()),
        )
        .unwrap()
    }

    #[test]
    fn normal_block_is_header_plus_reserved_word() {
        let block = normal_block();
        assert_eq!(block.size(), 372 + 4);
        let bytes = block.to_bytes();
        assert_eq!(BlockHeaderEntity::from_bytes_with(&bytes, &block_registry()).unwrap(), block);
    }

    #[test]
    fn importance_footer_follows_header() {
        let footer = ImportanceBlockFooter::new(3, 10, Amount(9_000), Hash256::new([0xAB; 32]));
        let block = BlockHeaderEntity::new(
            header(EntityType::ImportanceBlockHeader),
            BlockBody::Importance(footer.clone()),
        )
        .unwrap();
        let bytes = block.to_bytes();
        assert_eq!(bytes.len(), 372 + 52);
        let decoded = BlockHeaderEntity::from_bytes_with(&bytes, &block_registry()).unwrap();
        assert_eq!(decoded.body().importance_footer(), Some(&footer));
    }

    #[test]
    fn transaction_type_is_not_a_block() {
        let block = normal_block();
        let mut bytes = block.to_bytes().to_vec();
        let type_offset = 4 + 4 + 64 + 32 + 4 + 2;
        bytes[type_offset..type_offset + 2]
            .copy_from_slice(&EntityType::Transfer.raw().to_le_bytes());
        assert!(matches!(
            BlockHeaderEntity::from_bytes_with(&bytes, &block_registry()),
            Err(ProtocolError::UnknownVariant { family: "block", .. })
        ));
    }

    #[test]
    fn finalized_header_layout() {
        let finalized = FinalizedBlockHeader::new(
            FinalizationRound::new(FinalizationEpoch(5), FinalizationPoint(2)),
            Height(1_000),
            Hash256::new([1; 32]),
        );
        let bytes = finalized.to_bytes();
        assert_eq!(bytes.len(), 8 + 8 + 32);
        assert_eq!(&bytes[..8], &[5, 0, 0, 0, 2, 0, 0, 0]);
        assert_eq!(FinalizedBlockHeader::from_bytes(&bytes).unwrap(), finalized);
    }
}
