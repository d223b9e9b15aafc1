//! State entries as persisted by the ledger. Each starts with a
//! [`StateHeader`](crate::types::StateHeader) version stamp.

pub mod account;
pub mod lock;
pub mod metadata;
pub mod mosaic;
pub mod multisig;
pub mod namespace;
pub mod restriction;

pub use account::{
    AccountState, HeightActivityBucket, HighValueActivity, ImportanceSnapshot,
    SupplementalPublicKeys, ACTIVITY_BUCKETS,
};
pub use lock::{HashLockInfo, SecretLockInfo};
pub use metadata::{MetadataEntry, MetadataValue};
pub use mosaic::{MosaicDefinition, MosaicEntry, MosaicProperties};
pub use multisig::MultisigEntry;
pub use namespace::{NamespaceAlias, NamespaceLifetime, NamespacePath, RootNamespaceHistory};
pub use restriction::{
    AccountRestrictions, AccountRestrictionsInfo, GlobalKeyValuePair, MosaicAddressRestrictionEntry,
    MosaicGlobalRestrictionEntry, MosaicRestriction, MosaicRestrictionEntry,
    MosaicRestrictionKeyValuePair, RestrictionRule,
};
