//! Restriction state entries: per-account restriction lists and the mosaic
//! restriction rules keyed by address or by mosaic.

use catbuffer_core::collection::{fits, read_count_prefixed, LengthPrefix};
use catbuffer_core::{record, BytesMut, Decode, Encode, ProtocolError, Reader, Result};

use crate::enums::{EntityType, MosaicRestrictionEntryType, MosaicRestrictionType};
use crate::flags::AccountRestrictionFlags;
use crate::types::{Address, MosaicId, StateHeader};

// =============================================================================
// Mosaic restrictions
// =============================================================================

record! {
    pub struct MosaicRestrictionKeyValuePair {
        pub key: u64,
        pub value: u64,
    }
}

record! {
    /// Restriction values set for one address on one mosaic.
    pub struct MosaicAddressRestrictionEntry {
        mosaic_id: MosaicId,
        address: Address,
        count key_pair_count: u8 => key_pairs,
        key_pairs: Vec<MosaicRestrictionKeyValuePair> = counted(key_pair_count),
    }
}

record! {
    pub struct RestrictionRule {
        pub reference_mosaic_id: MosaicId,
        pub restriction_value: u64,
        pub restriction_type: MosaicRestrictionType,
    }
}

record! {
    pub struct GlobalKeyValuePair {
        pub key: u64,
        pub restriction_rule: RestrictionRule,
    }
}

record! {
    /// Rules every holder of a mosaic must satisfy.
    pub struct MosaicGlobalRestrictionEntry {
        mosaic_id: MosaicId,
        count key_pair_count: u8 => key_pairs,
        key_pairs: Vec<GlobalKeyValuePair> = counted(key_pair_count),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MosaicRestriction {
    Address(MosaicAddressRestrictionEntry),
    Global(MosaicGlobalRestrictionEntry),
}

impl MosaicRestriction {
    pub fn entry_type(&self) -> MosaicRestrictionEntryType {
        match self {
            MosaicRestriction::Address(_) => MosaicRestrictionEntryType::Address,
            MosaicRestriction::Global(_) => MosaicRestrictionEntryType::Global,
        }
    }
}

/// Mosaic restriction state entry: the entry type byte selects the layout
/// that follows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MosaicRestrictionEntry {
    pub header: StateHeader,
    pub entry: MosaicRestriction,
}

impl MosaicRestrictionEntry {
    pub fn new(header: StateHeader, entry: MosaicRestriction) -> Self {
        MosaicRestrictionEntry { header, entry }
    }
}

impl Encode for MosaicRestrictionEntry {
    fn size(&self) -> usize {
        self.header.size()
            + MosaicRestrictionEntryType::SIZE
            + match &self.entry {
                MosaicRestriction::Address(entry) => entry.size(),
                MosaicRestriction::Global(entry) => entry.size(),
            }
    }

    fn encode(&self, out: &mut BytesMut) {
        self.header.encode(out);
        self.entry.entry_type().encode(out);
        match &self.entry {
            MosaicRestriction::Address(entry) => entry.encode(out),
            MosaicRestriction::Global(entry) => entry.encode(out),
        }
    }
}

impl Decode for MosaicRestrictionEntry {
    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let header = StateHeader::decode(r)?;
        let entry = match MosaicRestrictionEntryType::decode(r)? {
            MosaicRestrictionEntryType::Address => {
                MosaicRestriction::Address(MosaicAddressRestrictionEntry::decode(r)?)
            }
            MosaicRestrictionEntryType::Global => {
                MosaicRestriction::Global(MosaicGlobalRestrictionEntry::decode(r)?)
            }
        };
        Ok(MosaicRestrictionEntry { header, entry })
    }
}

// =============================================================================
// Account restrictions
// =============================================================================

/// One restriction of an account.
///
/// ```text
/// [flags u16]
/// [count u64][address 24]...        only if ADDRESS is set
/// [count u64][mosaic id 8]...       only if MOSAIC_ID is set
/// [count u64][entity type 2]...     only if TRANSACTION_TYPE is set
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRestrictionsInfo {
    restriction_flags: AccountRestrictionFlags,
    address_restrictions: Option<Vec<Address>>,
    mosaic_id_restrictions: Option<Vec<MosaicId>>,
    transaction_type_restrictions: Option<Vec<EntityType>>,
}

fn check_presence<T>(
    flags: AccountRestrictionFlags,
    flag: AccountRestrictionFlags,
    values: &Option<Vec<T>>,
    field: &str,
) -> Result<()> {
    match (flags.contains(flag), values) {
        (true, None) => Err(ProtocolError::invalid(format!(
            "restriction flags select {field} but no values were given"
        ))),
        (false, Some(_)) => Err(ProtocolError::invalid(format!(
            "{field} given but not selected by restriction flags"
        ))),
        (true, Some(values)) => fits::<u64>(values.len()),
        (false, None) => Ok(()),
    }
}

fn encode_values<T: Encode>(values: &Option<Vec<T>>, out: &mut BytesMut) {
    if let Some(values) = values {
        u64::from_len(values.len()).encode(out);
        values.encode(out);
    }
}

fn values_size<T: Encode>(values: &Option<Vec<T>>) -> usize {
    values.as_ref().map_or(0, |values| 8 + values.size())
}

fn read_values<T: Decode>(
    r: &mut Reader<'_>,
    flags: AccountRestrictionFlags,
    flag: AccountRestrictionFlags,
) -> Result<Option<Vec<T>>> {
    if flags.contains(flag) {
        read_count_prefixed::<u64, T>(r).map(Some)
    } else {
        Ok(None)
    }
}

impl AccountRestrictionsInfo {
    /// Each value list must be present exactly when its flag is set.
    pub fn new(
        restriction_flags: AccountRestrictionFlags,
        address_restrictions: Option<Vec<Address>>,
        mosaic_id_restrictions: Option<Vec<MosaicId>>,
        transaction_type_restrictions: Option<Vec<EntityType>>,
    ) -> Result<Self> {
        check_presence(
            restriction_flags,
            AccountRestrictionFlags::ADDRESS,
            &address_restrictions,
            "address_restrictions",
        )?;
        check_presence(
            restriction_flags,
            AccountRestrictionFlags::MOSAIC_ID,
            &mosaic_id_restrictions,
            "mosaic_id_restrictions",
        )?;
        check_presence(
            restriction_flags,
            AccountRestrictionFlags::TRANSACTION_TYPE,
            &transaction_type_restrictions,
            "transaction_type_restrictions",
        )?;
        Ok(AccountRestrictionsInfo {
            restriction_flags,
            address_restrictions,
            mosaic_id_restrictions,
            transaction_type_restrictions,
        })
    }

    pub fn restriction_flags(&self) -> AccountRestrictionFlags {
        self.restriction_flags
    }

    pub fn address_restrictions(&self) -> Option<&[Address]> {
        self.address_restrictions.as_deref()
    }

    pub fn mosaic_id_restrictions(&self) -> Option<&[MosaicId]> {
        self.mosaic_id_restrictions.as_deref()
    }

    pub fn transaction_type_restrictions(&self) -> Option<&[EntityType]> {
        self.transaction_type_restrictions.as_deref()
    }
}

impl Encode for AccountRestrictionsInfo {
    fn size(&self) -> usize {
        AccountRestrictionFlags::SIZE
            + values_size(&self.address_restrictions)
            + values_size(&self.mosaic_id_restrictions)
            + values_size(&self.transaction_type_restrictions)
    }

    fn encode(&self, out: &mut BytesMut) {
        self.restriction_flags.encode(out);
        encode_values(&self.address_restrictions, out);
        encode_values(&self.mosaic_id_restrictions, out);
        encode_values(&self.transaction_type_restrictions, out);
    }
}

impl Decode for AccountRestrictionsInfo {
    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let flags = AccountRestrictionFlags::decode(r)?;
        Ok(AccountRestrictionsInfo {
            restriction_flags: flags,
            address_restrictions: read_values(r, flags, AccountRestrictionFlags::ADDRESS)?,
            mosaic_id_restrictions: read_values(r, flags, AccountRestrictionFlags::MOSAIC_ID)?,
            transaction_type_restrictions: read_values(
                r,
                flags,
                AccountRestrictionFlags::TRANSACTION_TYPE,
            )?,
        })
    }
}

record! {
    pub struct AccountRestrictions {
        header: StateHeader,
        address: Address,
        count restrictions_count: u64 => restrictions,
        restrictions: Vec<AccountRestrictionsInfo> = counted(restrictions_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_entry_layout() {
        let rule = RestrictionRule::new(MosaicId(0), 1, MosaicRestrictionType::Equal);
        let global = MosaicGlobalRestrictionEntry::new(
            MosaicId(0x55),
            vec![GlobalKeyValuePair::new(0x0A, rule)],
        )
        .unwrap();
        let entry =
            MosaicRestrictionEntry::new(StateHeader::CURRENT, MosaicRestriction::Global(global));
        let bytes = entry.to_bytes();
        assert_eq!(bytes[2], MosaicRestrictionEntryType::Global.raw());
        assert_eq!(bytes[3 + 8], 1, "key pair count");
        assert_eq!(bytes.len(), 3 + 8 + 1 + 8 + 17);
        assert_eq!(MosaicRestrictionEntry::from_bytes(&bytes).unwrap(), entry);
    }

    #[test]
    fn address_entry_round_trip() {
        let address = MosaicAddressRestrictionEntry::new(
            MosaicId(0x55),
            Address::new([3; 24]),
            vec![MosaicRestrictionKeyValuePair::new(1, 2)],
        )
        .unwrap();
        let entry =
            MosaicRestrictionEntry::new(StateHeader::CURRENT, MosaicRestriction::Address(address));
        let bytes = entry.to_bytes();
        assert_eq!(bytes[2], 0);
        assert_eq!(MosaicRestrictionEntry::from_bytes(&bytes).unwrap(), entry);
    }

    #[test]
    fn value_lists_follow_the_flags() {
        let flags = AccountRestrictionFlags::MOSAIC_ID | AccountRestrictionFlags::BLOCK;
        let info =
            AccountRestrictionsInfo::new(flags, None, Some(vec![MosaicId(7)]), None).unwrap();
        let bytes = info.to_bytes();
        assert_eq!(bytes.len(), 2 + 8 + 8);
        assert_eq!(&bytes[2..10], &1u64.to_le_bytes());
        assert_eq!(AccountRestrictionsInfo::from_bytes(&bytes).unwrap(), info);

        let state =
            AccountRestrictions::new(StateHeader::CURRENT, Address::zeroed(), vec![info]).unwrap();
        assert_eq!(AccountRestrictions::from_bytes(&state.to_bytes()).unwrap(), state);
    }

    #[test]
    fn mismatched_value_lists_are_rejected() {
        let missing =
            AccountRestrictionsInfo::new(AccountRestrictionFlags::ADDRESS, None, None, None);
        assert!(matches!(missing, Err(ProtocolError::InvalidConstruction(_))));

        let unselected = AccountRestrictionsInfo::new(
            AccountRestrictionFlags::ADDRESS,
            Some(vec![]),
            Some(vec![MosaicId(1)]),
            None,
        );
        assert!(matches!(unselected, Err(ProtocolError::InvalidConstruction(_))));
    }

    #[test]
    fn outgoing_transaction_types() {
        let flags = AccountRestrictionFlags::TRANSACTION_TYPE | AccountRestrictionFlags::OUTGOING;
        let info =
            AccountRestrictionsInfo::new(flags, None, None, Some(vec![EntityType::Transfer]))
                .unwrap();
        let bytes = info.to_bytes();
        assert_eq!(&bytes[..], &[0x04, 0x40, 1, 0, 0, 0, 0, 0, 0, 0, 0x54, 0x41]);
        let decoded = AccountRestrictionsInfo::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.transaction_type_restrictions(), Some(&[EntityType::Transfer][..]));
    }
}
