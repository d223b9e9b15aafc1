//! Multisig state entry.

use catbuffer_core::record;

use crate::types::{Address, StateHeader};

record! {
    /// Thresholds and both directions of the multisig graph for one account.
    pub struct MultisigEntry {
        header: StateHeader,
        min_approval: u32,
        min_removal: u32,
        account_address: Address,
        count cosignatory_addresses_count: u64 => cosignatory_addresses,
        cosignatory_addresses: Vec<Address> = counted(cosignatory_addresses_count),
        count multisig_addresses_count: u64 => multisig_addresses,
        multisig_addresses: Vec<Address> = counted(multisig_addresses_count),
    }
}
