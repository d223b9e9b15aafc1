//! Primitive ledger types and the small records shared across entities.

use catbuffer_core::{fixed_bytes, record, scalar};

// =============================================================================
// Scalars
// =============================================================================

scalar! {
    /// Quantity of a mosaic in atomic units.
    pub struct Amount(u64);
}

scalar! {
    /// Duration in blocks.
    pub struct BlockDuration(u64);
}

scalar! {
    pub struct BlockFeeMultiplier(u32);
}

scalar! {
    pub struct Difficulty(u64);
}

scalar! {
    pub struct FinalizationEpoch(u32);
}

scalar! {
    pub struct FinalizationPoint(u32);
}

scalar! {
    pub struct Height(u64);
}

scalar! {
    pub struct Importance(u64);
}

scalar! {
    pub struct MosaicId(u64);
}

scalar! {
    /// Mosaic id or namespace alias, resolved later by the ledger.
    pub struct UnresolvedMosaicId(u64);
}

scalar! {
    pub struct NamespaceId(u64);
}

scalar! {
    pub struct MosaicNonce(u32);
}

scalar! {
    pub struct ScopedMetadataKey(u64);
}

scalar! {
    /// Milliseconds since the network epoch.
    pub struct Timestamp(u64);
}

// =============================================================================
// Fixed buffers
// =============================================================================

fixed_bytes! {
    pub struct Address[24];
}

fixed_bytes! {
    /// Address or namespace alias, resolved later by the ledger.
    pub struct UnresolvedAddress[24];
}

fixed_bytes! {
    pub struct Hash256[32];
}

fixed_bytes! {
    pub struct Hash512[64];
}

fixed_bytes! {
    pub struct PublicKey[32];
}

fixed_bytes! {
    pub struct VotingPublicKey[32];
}

fixed_bytes! {
    pub struct Signature[64];
}

fixed_bytes! {
    pub struct ProofGamma[32];
}

fixed_bytes! {
    pub struct ProofVerificationHash[16];
}

fixed_bytes! {
    pub struct ProofScalar[32];
}

// =============================================================================
// Shared records
// =============================================================================

record! {
    /// Resolved mosaic id and amount.
    pub struct Mosaic {
        pub mosaic_id: MosaicId,
        pub amount: Amount,
    }
}

record! {
    pub struct UnresolvedMosaic {
        pub mosaic_id: UnresolvedMosaicId,
        pub amount: Amount,
    }
}

record! {
    /// VRF proof carried by block headers.
    pub struct VrfProof {
        pub gamma: ProofGamma,
        pub verification_hash: ProofVerificationHash,
        pub scalar: ProofScalar,
    }
}

record! {
    /// Serialization version stamp leading every state entry.
    pub struct StateHeader {
        pub version: u16,
    }
}

impl StateHeader {
    pub const CURRENT: StateHeader = StateHeader { version: 1 };
}

record! {
    /// Voting key with its activation range.
    pub struct PinnedVotingKey {
        pub voting_key: VotingPublicKey,
        pub start_epoch: FinalizationEpoch,
        pub end_epoch: FinalizationEpoch,
    }
}
