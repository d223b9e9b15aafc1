//! Namespace history state entry: a root namespace with its child paths and
//! the alias attached to each.

use catbuffer_core::{record, BytesMut, Decode, Encode, Reader, Result};

use crate::enums::NamespaceAliasType;
use crate::types::{Address, Height, MosaicId, NamespaceId, StateHeader};

record! {
    pub struct NamespaceLifetime {
        pub lifetime_start: Height,
        pub lifetime_end: Height,
    }
}

/// Alias attached to a namespace: the type byte, then a value whose width
/// depends on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NamespaceAlias {
    #[default]
    None,
    Mosaic(MosaicId),
    Address(Address),
}

impl NamespaceAlias {
    pub fn alias_type(&self) -> NamespaceAliasType {
        match self {
            NamespaceAlias::None => NamespaceAliasType::None,
            NamespaceAlias::Mosaic(_) => NamespaceAliasType::MosaicId,
            NamespaceAlias::Address(_) => NamespaceAliasType::Address,
        }
    }
}

impl Encode for NamespaceAlias {
    fn size(&self) -> usize {
        NamespaceAliasType::SIZE
            + match self {
                NamespaceAlias::None => 0,
                NamespaceAlias::Mosaic(id) => id.size(),
                NamespaceAlias::Address(address) => address.size(),
            }
    }

    fn encode(&self, out: &mut BytesMut) {
        self.alias_type().encode(out);
        match self {
            NamespaceAlias::None => {}
            NamespaceAlias::Mosaic(id) => id.encode(out),
            NamespaceAlias::Address(address) => address.encode(out),
        }
    }
}

impl Decode for NamespaceAlias {
    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        Ok(match NamespaceAliasType::decode(r)? {
            NamespaceAliasType::None => NamespaceAlias::None,
            NamespaceAliasType::MosaicId => NamespaceAlias::Mosaic(MosaicId::decode(r)?),
            NamespaceAliasType::Address => NamespaceAlias::Address(Address::decode(r)?),
        })
    }
}

record! {
    /// Child path below the root, outermost id first.
    pub struct NamespacePath {
        count path_size: u8 => path,
        path: Vec<NamespaceId> = counted(path_size),
        alias: NamespaceAlias,
    }
}

record! {
    pub struct RootNamespaceHistory {
        header: StateHeader,
        id: NamespaceId,
        owner_address: Address,
        lifetime: NamespaceLifetime,
        root_alias: NamespaceAlias,
        count children_count: u64 => paths,
        paths: Vec<NamespacePath> = counted(children_count),
    }
}
