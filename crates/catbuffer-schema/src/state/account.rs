//! Account state entry.
//!
//! ```text
//! [version u16][address 24][address_height u64][public_key 32][public_key_height u64]
//! [account_type u8][format u8][supplemental_keys_mask u8][voting_keys_count u8]
//! [linked key 32]?[node key 32]?[vrf key 32]?          present per mask bit
//! [pinned voting key 40]...                            voting_keys_count
//! [importance snapshot 16][activity bucket 32] x 5     only if format is high value
//! [balances_count u16][mosaic 16]...
//! ```
//!
//! The format, the key mask and both counts are derived from the value, so a
//! constructed state cannot disagree with its own layout.

use catbuffer_core::collection::{fits, read_counted, LengthPrefix};
use catbuffer_core::{record, BytesMut, Decode, Encode, Reader, Result};

use crate::enums::{AccountStateFormat, AccountType};
use crate::flags::AccountKeyTypeFlags;
use crate::types::{
    Address, Amount, Height, Importance, Mosaic, PinnedVotingKey, PublicKey, StateHeader,
};

/// Number of activity buckets kept for a high-value account.
pub const ACTIVITY_BUCKETS: usize = 5;

record! {
    pub struct ImportanceSnapshot {
        pub importance: Importance,
        pub height: Height,
    }
}

record! {
    pub struct HeightActivityBucket {
        pub start_height: Height,
        pub total_fees_paid: Amount,
        pub beneficiary_count: u32,
        pub raw_score: u64,
    }
}

record! {
    /// Importance data present only for high-value accounts.
    pub struct HighValueActivity {
        pub importance_snapshot: ImportanceSnapshot,
        pub activity_buckets: [HeightActivityBucket; ACTIVITY_BUCKETS],
    }
}

/// Optional linked, node and VRF keys, in wire order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SupplementalPublicKeys {
    pub linked: Option<PublicKey>,
    pub node: Option<PublicKey>,
    pub vrf: Option<PublicKey>,
}

impl SupplementalPublicKeys {
    pub fn mask(&self) -> AccountKeyTypeFlags {
        let mut mask = AccountKeyTypeFlags::empty();
        mask.set(AccountKeyTypeFlags::LINKED, self.linked.is_some());
        mask.set(AccountKeyTypeFlags::NODE, self.node.is_some());
        mask.set(AccountKeyTypeFlags::VRF, self.vrf.is_some());
        mask
    }

    fn decode_masked(r: &mut Reader<'_>, mask: AccountKeyTypeFlags) -> Result<Self> {
        let mut read = |flag| -> Result<Option<PublicKey>> {
            if mask.contains(flag) {
                PublicKey::decode(r).map(Some)
            } else {
                Ok(None)
            }
        };
        Ok(SupplementalPublicKeys {
            linked: read(AccountKeyTypeFlags::LINKED)?,
            node: read(AccountKeyTypeFlags::NODE)?,
            vrf: read(AccountKeyTypeFlags::VRF)?,
        })
    }
}

impl Encode for SupplementalPublicKeys {
    fn size(&self) -> usize {
        self.linked.size() + self.node.size() + self.vrf.size()
    }

    fn encode(&self, out: &mut BytesMut) {
        self.linked.encode(out);
        self.node.encode(out);
        self.vrf.encode(out);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountState {
    header: StateHeader,
    address: Address,
    address_height: Height,
    public_key: PublicKey,
    public_key_height: Height,
    account_type: AccountType,
    supplemental_public_keys: SupplementalPublicKeys,
    voting_public_keys: Vec<PinnedVotingKey>,
    high_value: Option<HighValueActivity>,
    balances: Vec<Mosaic>,
}

impl AccountState {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        header: StateHeader,
        address: Address,
        address_height: Height,
        public_key: PublicKey,
        public_key_height: Height,
        account_type: AccountType,
        supplemental_public_keys: SupplementalPublicKeys,
        voting_public_keys: Vec<PinnedVotingKey>,
        high_value: Option<HighValueActivity>,
        balances: Vec<Mosaic>,
    ) -> Result<Self> {
        fits::<u8>(voting_public_keys.len())?;
        fits::<u16>(balances.len())?;
        Ok(AccountState {
            header,
            address,
            address_height,
            public_key,
            public_key_height,
            account_type,
            supplemental_public_keys,
            voting_public_keys,
            high_value,
            balances,
        })
    }

    pub fn header(&self) -> &StateHeader {
        &self.header
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn address_height(&self) -> Height {
        self.address_height
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn public_key_height(&self) -> Height {
        self.public_key_height
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn format(&self) -> AccountStateFormat {
        if self.high_value.is_some() {
            AccountStateFormat::HighValue
        } else {
            AccountStateFormat::Regular
        }
    }

    pub fn supplemental_public_keys(&self) -> &SupplementalPublicKeys {
        &self.supplemental_public_keys
    }

    pub fn voting_public_keys(&self) -> &[PinnedVotingKey] {
        &self.voting_public_keys
    }

    pub fn high_value(&self) -> Option<&HighValueActivity> {
        self.high_value.as_ref()
    }

    pub fn balances(&self) -> &[Mosaic] {
        &self.balances
    }
}

impl Encode for AccountState {
    fn size(&self) -> usize {
        self.header.size()
            + self.address.size()
            + self.address_height.size()
            + self.public_key.size()
            + self.public_key_height.size()
            + AccountType::SIZE
            + AccountStateFormat::SIZE
            + AccountKeyTypeFlags::SIZE
            + 1
            + self.supplemental_public_keys.size()
            + self.voting_public_keys.size()
            + self.high_value.size()
            + 2
            + self.balances.size()
    }

    fn encode(&self, out: &mut BytesMut) {
        self.header.encode(out);
        self.address.encode(out);
        self.address_height.encode(out);
        self.public_key.encode(out);
        self.public_key_height.encode(out);
        self.account_type.encode(out);
        self.format().encode(out);
        self.supplemental_public_keys.mask().encode(out);
        u8::from_len(self.voting_public_keys.len()).encode(out);
        self.supplemental_public_keys.encode(out);
        self.voting_public_keys.encode(out);
        self.high_value.encode(out);
        u16::from_len(self.balances.len()).encode(out);
        self.balances.encode(out);
    }
}

impl Decode for AccountState {
    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let header = StateHeader::decode(r)?;
        let address = Address::decode(r)?;
        let address_height = Height::decode(r)?;
        let public_key = PublicKey::decode(r)?;
        let public_key_height = Height::decode(r)?;
        let account_type = AccountType::decode(r)?;
        let format = AccountStateFormat::decode(r)?;
        let mask = AccountKeyTypeFlags::decode(r)?;
        let voting_keys_count = u8::decode(r)?.to_len()?;
        let supplemental_public_keys = SupplementalPublicKeys::decode_masked(r, mask)?;
        let voting_public_keys = read_counted(r, voting_keys_count)?;
        let high_value = match format {
            AccountStateFormat::HighValue => Some(HighValueActivity::decode(r)?),
            AccountStateFormat::Regular => None,
        };
        let balances_count = u16::decode(r)?.to_len()?;
        let balances = read_counted(r, balances_count)?;
        Ok(AccountState {
            header,
            address,
            address_height,
            public_key,
            public_key_height,
            account_type,
            supplemental_public_keys,
            voting_public_keys,
            high_value,
            balances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FinalizationEpoch, MosaicId, VotingPublicKey};
    use catbuffer_core::ProtocolError;

    const FIXED: usize = 2 + 24 + 8 + 32 + 8 + 1 + 1 + 1 + 1;

    fn regular() -> AccountState {
        AccountState::new(
            StateHeader::CURRENT,
            Address::new([0x98; 24]),
            Height(1),
            PublicKey::zeroed(),
            Height(0),
            AccountType::Unlinked,
            SupplementalPublicKeys::default(),
            vec![],
            None,
            vec![Mosaic::new(MosaicId(0x6BED), Amount(5))],
        )
        .unwrap()
    }

    fn high_value() -> AccountState {
        let bucket = HeightActivityBucket::new(Height(720), Amount(3), 1, 44);
        AccountState::new(
            StateHeader::CURRENT,
            Address::new([0x68; 24]),
            Height(1),
            PublicKey::new([1; 32]),
            Height(2),
            AccountType::Main,
            SupplementalPublicKeys {
                linked: None,
                node: Some(PublicKey::new([2; 32])),
                vrf: Some(PublicKey::new([3; 32])),
            },
            vec![PinnedVotingKey::new(
                VotingPublicKey::new([4; 32]),
                FinalizationEpoch(1),
                FinalizationEpoch(180),
            )],
            Some(HighValueActivity::new(
                ImportanceSnapshot::new(Importance(1_000), Height(720)),
                std::array::from_fn(|_| bucket.clone()),
            )),
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn regular_account_skips_optional_sections() {
        let state = regular();
        let bytes = state.to_bytes();
        assert_eq!(bytes.len(), FIXED + 2 + 16);
        assert_eq!(&bytes[FIXED - 3..FIXED], &[0, 0, 0], "format, mask, voting count");
        assert_eq!(AccountState::from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn mask_and_format_follow_the_value() {
        let state = high_value();
        let bytes = state.to_bytes();
        assert_eq!(bytes[FIXED - 3], AccountStateFormat::HighValue.raw());
        assert_eq!(bytes[FIXED - 2], 0x06);
        assert_eq!(bytes[FIXED - 1], 1);
        assert_eq!(bytes.len(), FIXED + 64 + 40 + 16 + 5 * 28 + 2);
        assert_eq!(bytes.len(), state.size());

        let decoded = AccountState::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, state);
        assert_eq!(decoded.format(), AccountStateFormat::HighValue);
        assert_eq!(
            decoded.supplemental_public_keys().mask(),
            AccountKeyTypeFlags::NODE | AccountKeyTypeFlags::VRF
        );
    }

    #[test]
    fn undeclared_mask_bit_is_rejected() {
        let mut bytes = regular().to_bytes().to_vec();
        bytes[FIXED - 2] = 0x08;
        assert_eq!(
            AccountState::from_bytes(&bytes),
            Err(ProtocolError::UnknownEnumValue {
                name: "AccountKeyTypeFlags",
                raw: 0x08
            })
        );
    }
}
