//! Namespace registration and alias bodies.

use catbuffer_core::collection::fits;
use catbuffer_core::{record, BytesMut, Decode, Encode, Reader, Result};

use crate::enums::{AliasAction, NamespaceRegistrationType};
use crate::types::{Address, BlockDuration, MosaicId, NamespaceId};

record! {
    pub struct AddressAliasBody {
        pub namespace_id: NamespaceId,
        pub address: Address,
        pub alias_action: AliasAction,
    }
}

record! {
    pub struct MosaicAliasBody {
        pub namespace_id: NamespaceId,
        pub mosaic_id: MosaicId,
        pub alias_action: AliasAction,
    }
}

/// Root namespaces carry a rental duration, children their parent id. Both
/// occupy the same leading u64 on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamespaceRegistration {
    Root { duration: BlockDuration },
    Child { parent_id: NamespaceId },
}

impl NamespaceRegistration {
    pub fn registration_type(&self) -> NamespaceRegistrationType {
        match self {
            NamespaceRegistration::Root { .. } => NamespaceRegistrationType::Root,
            NamespaceRegistration::Child { .. } => NamespaceRegistrationType::Child,
        }
    }

    fn raw(&self) -> u64 {
        match self {
            NamespaceRegistration::Root { duration } => duration.0,
            NamespaceRegistration::Child { parent_id } => parent_id.0,
        }
    }
}

/// ```text
/// [duration | parent_id u64][id u64][registration_type u8][name_size u8][name]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceRegistrationBody {
    registration: NamespaceRegistration,
    id: NamespaceId,
    name: Vec<u8>,
}

impl NamespaceRegistrationBody {
    pub fn new(
        registration: NamespaceRegistration,
        id: NamespaceId,
        name: Vec<u8>,
    ) -> Result<Self> {
        fits::<u8>(name.len())?;
        Ok(NamespaceRegistrationBody {
            registration,
            id,
            name,
        })
    }

    pub fn registration(&self) -> &NamespaceRegistration {
        &self.registration
    }

    pub fn id(&self) -> NamespaceId {
        self.id
    }

    pub fn name(&self) -> &[u8] {
        &self.name
    }
}

impl Encode for NamespaceRegistrationBody {
    fn size(&self) -> usize {
        8 + self.id.size() + NamespaceRegistrationType::SIZE + 1 + self.name.len()
    }

    fn encode(&self, out: &mut BytesMut) {
        self.registration.raw().encode(out);
        self.id.encode(out);
        self.registration.registration_type().encode(out);
        (self.name.len() as u8).encode(out);
        out.extend_from_slice(&self.name);
    }
}

impl Decode for NamespaceRegistrationBody {
    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let raw = u64::decode(r)?;
        let id = NamespaceId::decode(r)?;
        let registration = match NamespaceRegistrationType::decode(r)? {
            NamespaceRegistrationType::Root => NamespaceRegistration::Root {
                duration: BlockDuration(raw),
            },
            NamespaceRegistrationType::Child => NamespaceRegistration::Child {
                parent_id: NamespaceId(raw),
            },
        };
        let name_size = r.read_u8()? as usize;
        let name = r.read_bytes(name_size)?.to_vec();
        Ok(NamespaceRegistrationBody {
            registration,
            id,
            name,
        })
    }
}
