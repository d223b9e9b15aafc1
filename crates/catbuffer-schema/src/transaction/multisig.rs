//! Multisig account modification body.

use catbuffer_core::record;

use crate::types::UnresolvedAddress;

record! {
    /// Adjusts approval thresholds and the cosignatory set.
    pub struct MultisigAccountModificationBody {
        min_removal_delta: i8,
        min_approval_delta: i8,
        count address_additions_count: u8 => address_additions,
        count address_deletions_count: u8 => address_deletions,
        reserved multisig_account_modification_reserved: u32,
        address_additions: Vec<UnresolvedAddress> = counted(address_additions_count),
        address_deletions: Vec<UnresolvedAddress> = counted(address_deletions_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_core::{Decode, Encode};

    #[test]
    fn counts_then_reserved_then_lists() {
        let body = MultisigAccountModificationBody::new(
            -1,
            2,
            vec![UnresolvedAddress::new([1; 24]), UnresolvedAddress::new([2; 24])],
            vec![UnresolvedAddress::new([3; 24])],
        )
        .unwrap();
        let bytes = body.to_bytes();
        assert_eq!(&bytes[..8], &[0xFF, 2, 2, 1, 0, 0, 0, 0]);
        assert_eq!(bytes.len(), 8 + 3 * 24);
        assert_eq!(MultisigAccountModificationBody::from_bytes(&bytes).unwrap(), body);
    }
}
