//! Closed enumerations of the ledger wire format.

use catbuffer_core::wire_enum;

wire_enum! {
    /// Entity (transaction or block) type code.
    pub enum EntityType: u16 {
        Reserved = 0,
        NemesisBlockHeader = 0x8043,
        NormalBlockHeader = 0x8143,
        ImportanceBlockHeader = 0x8243,
        AccountKeyLink = 0x414C,
        NodeKeyLink = 0x424C,
        AggregateComplete = 0x4141,
        AggregateBonded = 0x4241,
        VotingKeyLink = 0x4143,
        VrfKeyLink = 0x4243,
        HashLock = 0x4148,
        SecretLock = 0x4152,
        SecretProof = 0x4252,
        AccountMetadata = 0x4144,
        MosaicMetadata = 0x4244,
        NamespaceMetadata = 0x4344,
        MosaicDefinition = 0x414D,
        MosaicSupplyChange = 0x424D,
        MultisigAccountModification = 0x4155,
        AddressAlias = 0x424E,
        MosaicAlias = 0x434E,
        NamespaceRegistration = 0x414E,
        AccountAddressRestriction = 0x4150,
        AccountMosaicRestriction = 0x4250,
        AccountOperationRestriction = 0x4350,
        MosaicAddressRestriction = 0x4251,
        MosaicGlobalRestriction = 0x4151,
        Transfer = 0x4154,
    }
}

impl EntityType {
    pub fn is_aggregate(self) -> bool {
        matches!(self, EntityType::AggregateComplete | EntityType::AggregateBonded)
    }

    pub fn is_block(self) -> bool {
        matches!(
            self,
            EntityType::NemesisBlockHeader
                | EntityType::NormalBlockHeader
                | EntityType::ImportanceBlockHeader
        )
    }
}

wire_enum! {
    /// Receipt type code.
    pub enum ReceiptType: u16 {
        Reserved = 0,
        MosaicRentalFee = 0x124D,
        NamespaceRentalFee = 0x134E,
        HarvestFee = 0x2143,
        LockHashCompleted = 0x2248,
        LockHashExpired = 0x2348,
        LockSecretCompleted = 0x2252,
        LockSecretExpired = 0x2352,
        LockHashCreated = 0x3148,
        LockSecretCreated = 0x3152,
        MosaicExpired = 0x414D,
        NamespaceExpired = 0x414E,
        NamespaceDeleted = 0x424E,
        Inflation = 0x5143,
        TransactionGroup = 0xE143,
        AddressAliasResolution = 0xF143,
        MosaicAliasResolution = 0xF243,
    }
}

wire_enum! {
    pub enum NetworkType: u8 {
        Mainnet = 0x68,
        Testnet = 0x98,
    }
}

wire_enum! {
    pub enum LinkAction: u8 {
        Unlink = 0,
        Link = 1,
    }
}

wire_enum! {
    pub enum AliasAction: u8 {
        Unlink = 0,
        Link = 1,
    }
}

wire_enum! {
    pub enum LockHashAlgorithm: u8 {
        Sha3 = 0,
        Hash160 = 1,
        Hash256 = 2,
    }
}

wire_enum! {
    pub enum LockStatus: u8 {
        Unused = 0,
        Used = 1,
    }
}

wire_enum! {
    pub enum MosaicSupplyChangeAction: u8 {
        Decrease = 0,
        Increase = 1,
    }
}

wire_enum! {
    pub enum NamespaceRegistrationType: u8 {
        Root = 0,
        Child = 1,
    }
}

wire_enum! {
    pub enum NamespaceAliasType: u8 {
        None = 0,
        MosaicId = 1,
        Address = 2,
    }
}

wire_enum! {
    pub enum AccountType: u8 {
        Unlinked = 0,
        Main = 1,
        Remote = 2,
        RemoteUnlinked = 3,
    }
}

wire_enum! {
    pub enum AccountStateFormat: u8 {
        Regular = 0,
        HighValue = 1,
    }
}

wire_enum! {
    pub enum MetadataType: u8 {
        Account = 0,
        Mosaic = 1,
        Namespace = 2,
    }
}

wire_enum! {
    /// Comparison applied by a mosaic global restriction.
    pub enum MosaicRestrictionType: u8 {
        None = 0,
        Equal = 1,
        NotEqual = 2,
        LessThan = 3,
        LessOrEqual = 4,
        GreaterThan = 5,
        GreaterOrEqual = 6,
    }
}

wire_enum! {
    pub enum MosaicRestrictionEntryType: u8 {
        Address = 0,
        Global = 1,
    }
}
