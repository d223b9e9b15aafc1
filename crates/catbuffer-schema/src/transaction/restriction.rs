//! Account and mosaic restriction bodies.

use catbuffer_core::record;

use crate::enums::{EntityType, MosaicRestrictionType};
use crate::flags::AccountRestrictionFlags;
use crate::types::{UnresolvedAddress, UnresolvedMosaicId};

record! {
    pub struct AccountAddressRestrictionBody {
        restriction_flags: AccountRestrictionFlags,
        count restriction_additions_count: u8 => restriction_additions,
        count restriction_deletions_count: u8 => restriction_deletions,
        reserved account_restriction_reserved: u32,
        restriction_additions: Vec<UnresolvedAddress> = counted(restriction_additions_count),
        restriction_deletions: Vec<UnresolvedAddress> = counted(restriction_deletions_count),
    }
}

record! {
    pub struct AccountMosaicRestrictionBody {
        restriction_flags: AccountRestrictionFlags,
        count restriction_additions_count: u8 => restriction_additions,
        count restriction_deletions_count: u8 => restriction_deletions,
        reserved account_restriction_reserved: u32,
        restriction_additions: Vec<UnresolvedMosaicId> = counted(restriction_additions_count),
        restriction_deletions: Vec<UnresolvedMosaicId> = counted(restriction_deletions_count),
    }
}

record! {
    /// Restricts which transaction types an account may send or receive.
    pub struct AccountOperationRestrictionBody {
        restriction_flags: AccountRestrictionFlags,
        count restriction_additions_count: u8 => restriction_additions,
        count restriction_deletions_count: u8 => restriction_deletions,
        reserved account_restriction_reserved: u32,
        restriction_additions: Vec<EntityType> = counted(restriction_additions_count),
        restriction_deletions: Vec<EntityType> = counted(restriction_deletions_count),
    }
}

record! {
    pub struct MosaicAddressRestrictionBody {
        pub mosaic_id: UnresolvedMosaicId,
        pub restriction_key: u64,
        pub previous_restriction_value: u64,
        pub new_restriction_value: u64,
        pub target_address: UnresolvedAddress,
    }
}

record! {
    pub struct MosaicGlobalRestrictionBody {
        pub mosaic_id: UnresolvedMosaicId,
        pub reference_mosaic_id: UnresolvedMosaicId,
        pub restriction_key: u64,
        pub previous_restriction_value: u64,
        pub new_restriction_value: u64,
        pub previous_restriction_type: MosaicRestrictionType,
        pub new_restriction_type: MosaicRestrictionType,
    }
}
