//! Entity families the inspector can decode, and the registries that back
//! the polymorphic ones.

use std::fmt;
use std::sync::Arc;

use catbuffer_core::{Decode, Encode, Result};
use catbuffer_schema::state::{
    AccountRestrictions, AccountState, HashLockInfo, MetadataEntry, MosaicEntry,
    MosaicRestrictionEntry, MultisigEntry, RootNamespaceHistory, SecretLockInfo,
};
use catbuffer_schema::{
    block_registry, embedded_transaction_registry, receipt_registry, transaction_registry_with,
    BlockHeaderEntity, BlockRegistry, EmbeddedTransaction, Receipt, ReceiptRegistry, Transaction,
    TransactionRegistry,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Family {
    Transaction,
    Embedded,
    Receipt,
    Block,
    AccountState,
    MosaicEntry,
    NamespaceHistory,
    Multisig,
    Metadata,
    MosaicRestriction,
    AccountRestrictions,
    HashLock,
    SecretLock,
}

impl Family {
    pub const ALL: &'static [Family] = &[
        Family::Transaction,
        Family::Embedded,
        Family::Receipt,
        Family::Block,
        Family::AccountState,
        Family::MosaicEntry,
        Family::NamespaceHistory,
        Family::Multisig,
        Family::Metadata,
        Family::MosaicRestriction,
        Family::AccountRestrictions,
        Family::HashLock,
        Family::SecretLock,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Family::Transaction => "transaction",
            Family::Embedded => "embedded",
            Family::Receipt => "receipt",
            Family::Block => "block",
            Family::AccountState => "account-state",
            Family::MosaicEntry => "mosaic-entry",
            Family::NamespaceHistory => "namespace-history",
            Family::Multisig => "multisig",
            Family::Metadata => "metadata",
            Family::MosaicRestriction => "mosaic-restriction",
            Family::AccountRestrictions => "account-restrictions",
            Family::HashLock => "hash-lock",
            Family::SecretLock => "secret-lock",
        }
    }

    /// Whether the body layout is chosen through a registry.
    pub fn is_layered(self) -> bool {
        matches!(
            self,
            Family::Transaction | Family::Embedded | Family::Receipt | Family::Block
        )
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The default registries, built once per process.
#[derive(Debug)]
pub struct Registries {
    pub transaction: TransactionRegistry,
    pub embedded: Arc<TransactionRegistry>,
    pub receipt: ReceiptRegistry,
    pub block: BlockRegistry,
}

impl Registries {
    pub fn new() -> Self {
        let embedded = Arc::new(embedded_transaction_registry());
        Registries {
            transaction: transaction_registry_with(Arc::clone(&embedded)),
            embedded,
            receipt: receipt_registry(),
            block: block_registry(),
        }
    }

    /// Registered discriminators of `family`, sorted by name. `None` for
    /// fixed-layout families.
    pub fn kinds(&self, family: Family) -> Option<Vec<String>> {
        let mut kinds: Vec<String> = match family {
            Family::Transaction => self.transaction.kinds().map(|k| k.to_string()).collect(),
            Family::Embedded => self.embedded.kinds().map(|k| k.to_string()).collect(),
            Family::Receipt => self.receipt.kinds().map(|k| k.to_string()).collect(),
            Family::Block => self.block.kinds().map(|k| k.to_string()).collect(),
            _ => return None,
        };
        kinds.sort();
        Some(kinds)
    }
}

impl Default for Registries {
    fn default() -> Self {
        Self::new()
    }
}

/// A decoded entity of any family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    Transaction(Transaction),
    Embedded(EmbeddedTransaction),
    Receipt(Receipt),
    Block(BlockHeaderEntity),
    AccountState(AccountState),
    MosaicEntry(MosaicEntry),
    NamespaceHistory(RootNamespaceHistory),
    Multisig(MultisigEntry),
    Metadata(MetadataEntry),
    MosaicRestriction(MosaicRestrictionEntry),
    AccountRestrictions(AccountRestrictions),
    HashLock(HashLockInfo),
    SecretLock(SecretLockInfo),
}

/// Decode `bytes` as one entity of `family`; the whole buffer must be used.
pub fn decode(family: Family, bytes: &[u8], registries: &Registries) -> Result<Decoded> {
    Ok(match family {
        Family::Transaction => {
            Decoded::Transaction(Transaction::from_bytes_with(bytes, &registries.transaction)?)
        }
        Family::Embedded => {
            Decoded::Embedded(EmbeddedTransaction::from_bytes_with(bytes, &registries.embedded)?)
        }
        Family::Receipt => Decoded::Receipt(Receipt::from_bytes_with(bytes, &registries.receipt)?),
        Family::Block => {
            Decoded::Block(BlockHeaderEntity::from_bytes_with(bytes, &registries.block)?)
        }
        Family::AccountState => Decoded::AccountState(AccountState::from_bytes(bytes)?),
        Family::MosaicEntry => Decoded::MosaicEntry(MosaicEntry::from_bytes(bytes)?),
        Family::NamespaceHistory => {
            Decoded::NamespaceHistory(RootNamespaceHistory::from_bytes(bytes)?)
        }
        Family::Multisig => Decoded::Multisig(MultisigEntry::from_bytes(bytes)?),
        Family::Metadata => Decoded::Metadata(MetadataEntry::from_bytes(bytes)?),
        Family::MosaicRestriction => {
            Decoded::MosaicRestriction(MosaicRestrictionEntry::from_bytes(bytes)?)
        }
        Family::AccountRestrictions => {
            Decoded::AccountRestrictions(AccountRestrictions::from_bytes(bytes)?)
        }
        Family::HashLock => Decoded::HashLock(HashLockInfo::from_bytes(bytes)?),
        Family::SecretLock => Decoded::SecretLock(SecretLockInfo::from_bytes(bytes)?),
    })
}

impl Decoded {
    pub fn family(&self) -> Family {
        match self {
            Decoded::Transaction(_) => Family::Transaction,
            Decoded::Embedded(_) => Family::Embedded,
            Decoded::Receipt(_) => Family::Receipt,
            Decoded::Block(_) => Family::Block,
            Decoded::AccountState(_) => Family::AccountState,
            Decoded::MosaicEntry(_) => Family::MosaicEntry,
            Decoded::NamespaceHistory(_) => Family::NamespaceHistory,
            Decoded::Multisig(_) => Family::Multisig,
            Decoded::Metadata(_) => Family::Metadata,
            Decoded::MosaicRestriction(_) => Family::MosaicRestriction,
            Decoded::AccountRestrictions(_) => Family::AccountRestrictions,
            Decoded::HashLock(_) => Family::HashLock,
            Decoded::SecretLock(_) => Family::SecretLock,
        }
    }

    /// Discriminator or sub-layout of the entity, `-` when the family has a
    /// single layout.
    pub fn kind(&self) -> String {
        match self {
            Decoded::Transaction(tx) => tx.kind().to_string(),
            Decoded::Embedded(tx) => tx.kind().to_string(),
            Decoded::Receipt(receipt) => receipt.kind().to_string(),
            Decoded::Block(block) => block.kind().to_string(),
            Decoded::AccountState(state) => state.format().to_string(),
            Decoded::Metadata(entry) => entry.metadata_type.to_string(),
            Decoded::MosaicRestriction(entry) => entry.entry.entry_type().to_string(),
            _ => "-".to_string(),
        }
    }

    fn encodable(&self) -> &dyn Encode {
        match self {
            Decoded::Transaction(e) => e,
            Decoded::Embedded(e) => e,
            Decoded::Receipt(e) => e,
            Decoded::Block(e) => e,
            Decoded::AccountState(e) => e,
            Decoded::MosaicEntry(e) => e,
            Decoded::NamespaceHistory(e) => e,
            Decoded::Multisig(e) => e,
            Decoded::Metadata(e) => e,
            Decoded::MosaicRestriction(e) => e,
            Decoded::AccountRestrictions(e) => e,
            Decoded::HashLock(e) => e,
            Decoded::SecretLock(e) => e,
        }
    }

    pub fn size(&self) -> usize {
        self.encodable().size()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.encodable().to_bytes().to_vec()
    }
}
