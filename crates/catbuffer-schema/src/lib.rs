//! catbuffer-schema
//!
//! Per-entity schemas for the ledger wire format, declared on top of
//! `catbuffer-core`:
//! - primitive ledger types, enumerations and flag-sets
//! - transactions (top-level, embedded, aggregate)
//! - receipts and resolution statements
//! - block headers and finalization records
//! - state entries
//! - the default discriminator registries

pub mod block;
pub mod enums;
pub mod flags;
pub mod receipt;
pub mod registry;
pub mod state;
pub mod transaction;
pub mod types;

pub use block::{BlockBody, BlockHeader, BlockHeaderEntity};
pub use enums::*;
pub use flags::{AccountKeyTypeFlags, AccountRestrictionFlags, MosaicFlags};
pub use receipt::{Receipt, ReceiptBody, ReceiptHeader};
pub use registry::{
    block_registry, embedded_transaction_registry, receipt_registry, transaction_registry,
    transaction_registry_with, BlockRegistry, ReceiptRegistry, TransactionRegistry,
};
pub use transaction::{
    EmbeddedTransaction, EmbeddedTransactionHeader, Transaction, TransactionBody,
    TransactionHeader, TransactionKind,
};
pub use types::*;

pub use catbuffer_core::{Decode, Encode, ProtocolError, Reader, Result};
