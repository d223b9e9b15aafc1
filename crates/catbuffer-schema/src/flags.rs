//! Flag-sets of the ledger wire format. An all-clear value (`NONE`/`UNSET`
//! on the network) is the empty set.

use catbuffer_core::wire_flags;

wire_flags! {
    /// Mosaic properties chosen at definition time.
    pub struct MosaicFlags: u8 {
        const SUPPLY_MUTABLE = 0x01;
        const TRANSFERABLE = 0x02;
        const RESTRICTABLE = 0x04;
    }
}

wire_flags! {
    /// Value kind and direction of an account restriction.
    pub struct AccountRestrictionFlags: u16 {
        const ADDRESS = 0x0001;
        const MOSAIC_ID = 0x0002;
        const TRANSACTION_TYPE = 0x0004;
        const OUTGOING = 0x4000;
        const BLOCK = 0x8000;
    }
}

wire_flags! {
    /// Which supplemental public keys an account state carries.
    pub struct AccountKeyTypeFlags: u8 {
        const LINKED = 0x01;
        const NODE = 0x02;
        const VRF = 0x04;
    }
}

impl AccountRestrictionFlags {
    /// Value-kind bits; exactly one must be set on a restriction.
    pub const VALUE_KINDS: AccountRestrictionFlags = AccountRestrictionFlags::ADDRESS
        .union(AccountRestrictionFlags::MOSAIC_ID)
        .union(AccountRestrictionFlags::TRANSACTION_TYPE);

    pub fn value_kind(self) -> AccountRestrictionFlags {
        self.intersection(Self::VALUE_KINDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_core::{Decode, Encode};

    #[test]
    fn outgoing_address_block() {
        let flags = AccountRestrictionFlags::ADDRESS
            | AccountRestrictionFlags::OUTGOING
            | AccountRestrictionFlags::BLOCK;
        assert_eq!(&flags.to_bytes()[..], &[0x01, 0xC0]);
        assert_eq!(flags.value_kind(), AccountRestrictionFlags::ADDRESS);
        assert_eq!(AccountRestrictionFlags::from_bytes(&[0x01, 0xC0]).unwrap(), flags);
    }

    #[test]
    fn mosaic_flags_reject_unknown_bits() {
        assert!(MosaicFlags::from_bytes(&[0x08]).is_err());
        assert_eq!(
            MosaicFlags::from_bytes(&[0x07]).unwrap(),
            MosaicFlags::all()
        );
    }
}
