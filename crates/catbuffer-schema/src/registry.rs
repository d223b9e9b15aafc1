//! Default discriminator registries.
//!
//! Each constructor returns a fresh registry, so callers can extend or
//! override entries (a new transaction version, a private receipt type)
//! before decoding without touching global state.

use std::sync::Arc;

use catbuffer_core::Registry;
use tracing::debug;

use crate::block::BlockBody;
use crate::enums::{EntityType, ReceiptType};
use crate::receipt::{
    ReceiptBody, BALANCE_CHANGE_TYPES, BALANCE_TRANSFER_TYPES, NAMESPACE_EXPIRY_TYPES,
};
use crate::transaction::{register_standard_bodies, AggregateBody, TransactionBody, TransactionKind};

pub type TransactionRegistry = Registry<TransactionKind, TransactionBody>;
pub type ReceiptRegistry = Registry<ReceiptType, ReceiptBody>;
pub type BlockRegistry = Registry<EntityType, BlockBody>;

/// Bodies allowed inside an aggregate: every type except the aggregates.
pub fn embedded_transaction_registry() -> TransactionRegistry {
    let mut registry = Registry::new("embedded transaction");
    register_standard_bodies(&mut registry);
    debug!(kinds = registry.len(), "built embedded transaction registry");
    registry
}

/// Top-level transaction bodies, with aggregates resolving their embedded
/// transactions through [`embedded_transaction_registry`].
pub fn transaction_registry() -> TransactionRegistry {
    transaction_registry_with(Arc::new(embedded_transaction_registry()))
}

/// Top-level transaction bodies, with aggregates resolving their embedded
/// transactions through `embedded`.
pub fn transaction_registry_with(embedded: Arc<TransactionRegistry>) -> TransactionRegistry {
    let mut registry = Registry::new("transaction");
    register_standard_bodies(&mut registry);

    let complete = Arc::clone(&embedded);
    registry.register(TransactionKind::current(EntityType::AggregateComplete), move |r| {
        AggregateBody::decode_with(r, &complete).map(TransactionBody::AggregateComplete)
    });
    registry.register(TransactionKind::current(EntityType::AggregateBonded), move |r| {
        AggregateBody::decode_with(r, &embedded).map(TransactionBody::AggregateBonded)
    });

    debug!(kinds = registry.len(), "built transaction registry");
    registry
}

/// Receipt bodies keyed by receipt type. Transaction group statements are
/// not receipts and stay unregistered.
pub fn receipt_registry() -> ReceiptRegistry {
    let mut registry = Registry::new("receipt");
    for &kind in BALANCE_TRANSFER_TYPES {
        registry.register_as(kind, ReceiptBody::BalanceTransfer);
    }
    for &kind in BALANCE_CHANGE_TYPES {
        registry.register_as(kind, ReceiptBody::BalanceChange);
    }
    for &kind in NAMESPACE_EXPIRY_TYPES {
        registry.register_as(kind, ReceiptBody::NamespaceExpiry);
    }
    registry
        .register_as(ReceiptType::Inflation, ReceiptBody::Inflation)
        .register_as(ReceiptType::MosaicExpired, ReceiptBody::MosaicExpiry)
        .register_as(
            ReceiptType::AddressAliasResolution,
            ReceiptBody::AddressResolution,
        )
        .register_as(
            ReceiptType::MosaicAliasResolution,
            ReceiptBody::MosaicResolution,
        );
    debug!(kinds = registry.len(), "built receipt registry");
    registry
}

/// Block footers keyed by block entity type.
pub fn block_registry() -> BlockRegistry {
    let mut registry = Registry::new("block");
    registry
        .register_as(EntityType::NemesisBlockHeader, BlockBody::Nemesis)
        .register_as(EntityType::NormalBlockHeader, BlockBody::Normal)
        .register_as(EntityType::ImportanceBlockHeader, BlockBody::Importance);
    debug!(kinds = registry.len(), "built block registry");
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::NetworkType;
    use crate::transaction::{EmbeddedTransaction, EmbeddedTransactionHeader, TransferBody};
    use crate::types::{PublicKey, UnresolvedAddress};
    use catbuffer_core::{Encode, ProtocolError};

    #[test]
    fn embedded_registry_has_no_aggregates() {
        let embedded = embedded_transaction_registry();
        assert_eq!(embedded.len(), 22);
        assert!(!embedded.contains(&TransactionKind::current(EntityType::AggregateBonded)));
        assert!(embedded.kinds().all(|kind| !kind.entity_type.is_aggregate()));

        let top = transaction_registry();
        assert_eq!(top.len(), 24);
        assert!(top.contains(&TransactionKind::current(EntityType::AggregateComplete)));
        assert_eq!(top.family(), "transaction");
    }

    #[test]
    fn every_receipt_type_but_group_and_reserved_is_known() {
        let registry = receipt_registry();
        for kind in ReceiptType::ALL {
            let expected = !matches!(kind, ReceiptType::TransactionGroup | ReceiptType::Reserved);
            assert_eq!(registry.contains(kind), expected, "{kind}");
        }
    }

    #[test]
    fn block_registry_covers_block_types() {
        let registry = block_registry();
        for kind in EntityType::ALL {
            assert_eq!(registry.contains(kind), kind.is_block(), "{kind}");
        }
    }

    fn transfer_v2() -> EmbeddedTransaction {
        let body = TransferBody::new(UnresolvedAddress::new([0x98; 24]), vec![], b"v2".to_vec())
            .unwrap();
        let header = EmbeddedTransactionHeader::new(
            PublicKey::new([0x44; 32]),
            2,
            NetworkType::Testnet,
            EntityType::Transfer,
        );
        EmbeddedTransaction::new(header, body.into()).unwrap()
    }

    #[test]
    fn registries_can_be_extended() {
        let mut registry = embedded_transaction_registry();
        let next = TransactionKind::new(EntityType::Transfer, 2);
        registry.register_as(next, TransactionBody::Transfer);
        assert!(registry.contains(&next));
        assert_eq!(registry.len(), 23);

        let bytes = transfer_v2().to_bytes();
        assert_eq!(bytes[4 + 4 + 32 + 4], 2);
        let decoded = EmbeddedTransaction::from_bytes_with(&bytes, &registry).unwrap();
        assert_eq!(decoded.kind(), next);
        assert_eq!(decoded, transfer_v2());
        assert_eq!(decoded.to_bytes(), bytes);
    }

    #[test]
    fn unregistered_version_stays_unknown() {
        let bytes = transfer_v2().to_bytes();
        let err = EmbeddedTransaction::from_bytes_with(&bytes, &embedded_transaction_registry())
            .unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownVariant { .. }));
    }
}
