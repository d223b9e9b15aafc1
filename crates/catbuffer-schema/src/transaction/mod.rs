//! Transactions: a size-prefixed envelope (signed top-level or embedded)
//! followed by a body chosen by `(entity type, version)`.
//!
//! ```text
//! top-level  [size u32][reserved u32][signature 64][signer 32][reserved u32]
//!            [version u8][network u8][type u16][fee u64][deadline u64][body]
//!
//! embedded   [size u32][reserved u32][signer 32][reserved u32]
//!            [version u8][network u8][type u16][body]
//! ```
//!
//! Both envelopes share [`TransactionBody`]. Which bodies are allowed where
//! is decided by the registry passed to the decoder: the embedded registry
//! has no aggregate entries.

use std::fmt;

use catbuffer_core::{record, BytesMut, Encode, Envelope, Layered, Registry, Variant};

use crate::enums::{EntityType, NetworkType};
use crate::types::{Amount, PublicKey, Signature, Timestamp};

pub mod aggregate;
pub mod key_link;
pub mod lock;
pub mod metadata;
pub mod mosaic;
pub mod multisig;
pub mod namespace;
pub mod restriction;
pub mod transfer;

pub use aggregate::{AggregateBody, Cosignature, DetachedCosignature};
pub use key_link::{AccountKeyLinkBody, NodeKeyLinkBody, VotingKeyLinkBody, VrfKeyLinkBody};
pub use lock::{HashLockBody, SecretLockBody, SecretProofBody};
pub use metadata::{AccountMetadataBody, MosaicMetadataBody, NamespaceMetadataBody};
pub use mosaic::{MosaicDefinitionBody, MosaicSupplyChangeBody};
pub use multisig::MultisigAccountModificationBody;
pub use namespace::{
    AddressAliasBody, MosaicAliasBody, NamespaceRegistration, NamespaceRegistrationBody,
};
pub use restriction::{
    AccountAddressRestrictionBody, AccountMosaicRestrictionBody,
    AccountOperationRestrictionBody, MosaicAddressRestrictionBody, MosaicGlobalRestrictionBody,
};
pub use transfer::TransferBody;

/// Body layout version every current transaction type uses.
pub const TRANSACTION_VERSION: u8 = 1;

/// Signed top-level transaction.
pub type Transaction = Layered<TransactionHeader, TransactionBody>;

/// Transaction carried inside an aggregate.
pub type EmbeddedTransaction = Layered<EmbeddedTransactionHeader, TransactionBody>;

// =============================================================================
// Discriminator
// =============================================================================

/// Registry key of a transaction body.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransactionKind {
    pub entity_type: EntityType,
    pub version: u8,
}

impl TransactionKind {
    pub const fn new(entity_type: EntityType, version: u8) -> Self {
        TransactionKind {
            entity_type,
            version,
        }
    }

    pub const fn current(entity_type: EntityType) -> Self {
        Self::new(entity_type, TRANSACTION_VERSION)
    }
}

impl fmt::Debug for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} v{}", self.entity_type, self.version)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

// =============================================================================
// Envelopes
// =============================================================================

record! {
    pub struct TransactionHeader {
        reserved verifiable_entity_header_reserved: u32,
        pub signature: Signature,
        pub signer_public_key: PublicKey,
        reserved entity_body_reserved: u32,
        pub version: u8,
        pub network: NetworkType,
        pub entity_type: EntityType,
        pub fee: Amount,
        pub deadline: Timestamp,
    }
}

impl Envelope for TransactionHeader {
    type Kind = TransactionKind;
    const FAMILY: &'static str = "transaction";

    fn kind(&self) -> TransactionKind {
        TransactionKind::new(self.entity_type, self.version)
    }
}

record! {
    pub struct EmbeddedTransactionHeader {
        reserved embedded_transaction_header_reserved: u32,
        pub signer_public_key: PublicKey,
        reserved entity_body_reserved: u32,
        pub version: u8,
        pub network: NetworkType,
        pub entity_type: EntityType,
    }
}

impl Envelope for EmbeddedTransactionHeader {
    type Kind = TransactionKind;
    const FAMILY: &'static str = "embedded transaction";

    fn kind(&self) -> TransactionKind {
        TransactionKind::new(self.entity_type, self.version)
    }
}

// =============================================================================
// Bodies
// =============================================================================

macro_rules! transaction_bodies {
    (
        standard { $($variant:ident($body:ty) => $entity:ident),+ $(,)? }
        aggregate { $($agg:ident => $agg_entity:ident),+ $(,)? }
    ) => {
        /// Every transaction body layout, tagged by entity type.
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum TransactionBody {
            $($variant($body),)+
            $($agg(AggregateBody),)+
        }

        impl TransactionBody {
            pub fn entity_type(&self) -> EntityType {
                match self {
                    $(TransactionBody::$variant(_) => EntityType::$entity,)+
                    $(TransactionBody::$agg(_) => EntityType::$agg_entity,)+
                }
            }
        }

        impl Encode for TransactionBody {
            fn size(&self) -> usize {
                match self {
                    $(TransactionBody::$variant(body) => body.size(),)+
                    $(TransactionBody::$agg(body) => body.size(),)+
                }
            }

            fn encode(&self, out: &mut BytesMut) {
                match self {
                    $(TransactionBody::$variant(body) => body.encode(out),)+
                    $(TransactionBody::$agg(body) => body.encode(out),)+
                }
            }
        }

        $(
            impl From<$body> for TransactionBody {
                fn from(body: $body) -> Self {
                    TransactionBody::$variant(body)
                }
            }
        )+

        /// Register every non-aggregate body at the current version.
        pub fn register_standard_bodies(registry: &mut Registry<TransactionKind, TransactionBody>) {
            $(
                registry.register_as(
                    TransactionKind::current(EntityType::$entity),
                    TransactionBody::$variant,
                );
            )+
        }
    };
}

transaction_bodies! {
    standard {
        AccountKeyLink(AccountKeyLinkBody) => AccountKeyLink,
        NodeKeyLink(NodeKeyLinkBody) => NodeKeyLink,
        VotingKeyLink(VotingKeyLinkBody) => VotingKeyLink,
        VrfKeyLink(VrfKeyLinkBody) => VrfKeyLink,
        HashLock(HashLockBody) => HashLock,
        SecretLock(SecretLockBody) => SecretLock,
        SecretProof(SecretProofBody) => SecretProof,
        AccountMetadata(AccountMetadataBody) => AccountMetadata,
        MosaicMetadata(MosaicMetadataBody) => MosaicMetadata,
        NamespaceMetadata(NamespaceMetadataBody) => NamespaceMetadata,
        MosaicDefinition(MosaicDefinitionBody) => MosaicDefinition,
        MosaicSupplyChange(MosaicSupplyChangeBody) => MosaicSupplyChange,
        MultisigAccountModification(MultisigAccountModificationBody) => MultisigAccountModification,
        AddressAlias(AddressAliasBody) => AddressAlias,
        MosaicAlias(MosaicAliasBody) => MosaicAlias,
        NamespaceRegistration(NamespaceRegistrationBody) => NamespaceRegistration,
        AccountAddressRestriction(AccountAddressRestrictionBody) => AccountAddressRestriction,
        AccountMosaicRestriction(AccountMosaicRestrictionBody) => AccountMosaicRestriction,
        AccountOperationRestriction(AccountOperationRestrictionBody) => AccountOperationRestriction,
        MosaicAddressRestriction(MosaicAddressRestrictionBody) => MosaicAddressRestriction,
        MosaicGlobalRestriction(MosaicGlobalRestrictionBody) => MosaicGlobalRestriction,
        Transfer(TransferBody) => Transfer,
    }
    aggregate {
        AggregateComplete => AggregateComplete,
        AggregateBonded => AggregateBonded,
    }
}

impl TransactionBody {
    /// Kind at the current version. The version lives in the header, so a
    /// decoded record reports its own version through `Layered::kind`.
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::current(self.entity_type())
    }

    pub fn is_aggregate(&self) -> bool {
        self.entity_type().is_aggregate()
    }
}

impl Variant for TransactionBody {
    type Kind = TransactionKind;

    /// Any registered version of an entity type may share a body layout.
    fn matches(&self, kind: &TransactionKind) -> bool {
        self.entity_type() == kind.entity_type
    }
}
