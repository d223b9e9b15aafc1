//! Receipts: `[size u32][version u16][type u16][body]`, body chosen by
//! receipt type.
//!
//! Several receipt types share one body layout (every lock receipt is a
//! balance change, for instance). Resolution statements end with entries
//! that run to the end of the receipt.

use catbuffer_core::{record, BytesMut, Encode, Envelope, Layered, Variant};

use crate::enums::ReceiptType;
use crate::types::{Address, Mosaic, MosaicId, NamespaceId, UnresolvedAddress, UnresolvedMosaicId};

/// Receipt version written by current nodes.
pub const RECEIPT_VERSION: u16 = 1;

pub type Receipt = Layered<ReceiptHeader, ReceiptBody>;

record! {
    pub struct ReceiptHeader {
        pub version: u16,
        pub receipt_type: ReceiptType,
    }
}

impl ReceiptHeader {
    pub fn current(receipt_type: ReceiptType) -> Self {
        ReceiptHeader::new(RECEIPT_VERSION, receipt_type)
    }
}

impl Envelope for ReceiptHeader {
    type Kind = ReceiptType;
    const FAMILY: &'static str = "receipt";

    fn kind(&self) -> ReceiptType {
        self.receipt_type
    }
}

// =============================================================================
// Bodies
// =============================================================================

record! {
    /// Mosaic moved between two accounts (rental fees).
    pub struct BalanceTransferReceipt {
        pub mosaic: Mosaic,
        pub sender_address: Address,
        pub recipient_address: Address,
    }
}

record! {
    /// Mosaic credited to or debited from one account.
    pub struct BalanceChangeReceipt {
        pub mosaic: Mosaic,
        pub target_address: Address,
    }
}

record! {
    pub struct InflationReceipt {
        pub mosaic: Mosaic,
    }
}

record! {
    pub struct MosaicExpiryReceipt {
        pub artifact_id: MosaicId,
    }
}

record! {
    pub struct NamespaceExpiryReceipt {
        pub artifact_id: NamespaceId,
    }
}

record! {
    /// Transaction (primary) and embedded transaction (secondary) that
    /// triggered a resolution.
    pub struct ReceiptSource {
        pub primary_id: u32,
        pub secondary_id: u32,
    }
}

record! {
    pub struct AddressResolutionEntry {
        pub source: ReceiptSource,
        pub resolved: Address,
    }
}

record! {
    pub struct MosaicResolutionEntry {
        pub source: ReceiptSource,
        pub resolved: MosaicId,
    }
}

record! {
    pub struct AddressResolutionStatement {
        pub unresolved: UnresolvedAddress,
        pub resolution_entries: Vec<AddressResolutionEntry> = remaining,
    }
}

record! {
    pub struct MosaicResolutionStatement {
        pub unresolved: UnresolvedMosaicId,
        pub resolution_entries: Vec<MosaicResolutionEntry> = remaining,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiptBody {
    BalanceTransfer(BalanceTransferReceipt),
    BalanceChange(BalanceChangeReceipt),
    Inflation(InflationReceipt),
    MosaicExpiry(MosaicExpiryReceipt),
    NamespaceExpiry(NamespaceExpiryReceipt),
    AddressResolution(AddressResolutionStatement),
    MosaicResolution(MosaicResolutionStatement),
}

impl ReceiptBody {
    /// Receipt types whose body has this layout.
    pub fn receipt_types(&self) -> &'static [ReceiptType] {
        match self {
            ReceiptBody::BalanceTransfer(_) => BALANCE_TRANSFER_TYPES,
            ReceiptBody::BalanceChange(_) => BALANCE_CHANGE_TYPES,
            ReceiptBody::Inflation(_) => &[ReceiptType::Inflation],
            ReceiptBody::MosaicExpiry(_) => &[ReceiptType::MosaicExpired],
            ReceiptBody::NamespaceExpiry(_) => NAMESPACE_EXPIRY_TYPES,
            ReceiptBody::AddressResolution(_) => &[ReceiptType::AddressAliasResolution],
            ReceiptBody::MosaicResolution(_) => &[ReceiptType::MosaicAliasResolution],
        }
    }
}

pub const BALANCE_TRANSFER_TYPES: &[ReceiptType] =
    &[ReceiptType::MosaicRentalFee, ReceiptType::NamespaceRentalFee];

pub const BALANCE_CHANGE_TYPES: &[ReceiptType] = &[
    ReceiptType::HarvestFee,
    ReceiptType::LockHashCreated,
    ReceiptType::LockHashCompleted,
    ReceiptType::LockHashExpired,
    ReceiptType::LockSecretCreated,
    ReceiptType::LockSecretCompleted,
    ReceiptType::LockSecretExpired,
];

pub const NAMESPACE_EXPIRY_TYPES: &[ReceiptType] =
    &[ReceiptType::NamespaceExpired, ReceiptType::NamespaceDeleted];

impl Encode for ReceiptBody {
    fn size(&self) -> usize {
        match self {
            ReceiptBody::BalanceTransfer(b) => b.size(),
            ReceiptBody::BalanceChange(b) => b.size(),
            ReceiptBody::Inflation(b) => b.size(),
            ReceiptBody::MosaicExpiry(b) => b.size(),
            ReceiptBody::NamespaceExpiry(b) => b.size(),
            ReceiptBody::AddressResolution(b) => b.size(),
            ReceiptBody::MosaicResolution(b) => b.size(),
        }
    }

    fn encode(&self, out: &mut BytesMut) {
        match self {
            ReceiptBody::BalanceTransfer(b) => b.encode(out),
            ReceiptBody::BalanceChange(b) => b.encode(out),
            ReceiptBody::Inflation(b) => b.encode(out),
            ReceiptBody::MosaicExpiry(b) => b.encode(out),
            ReceiptBody::NamespaceExpiry(b) => b.encode(out),
            ReceiptBody::AddressResolution(b) => b.encode(out),
            ReceiptBody::MosaicResolution(b) => b.encode(out),
        }
    }
}

impl Variant for ReceiptBody {
    type Kind = ReceiptType;

    fn matches(&self, kind: &ReceiptType) -> bool {
        self.receipt_types().contains(kind)
    }
}
