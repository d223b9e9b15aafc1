//! Key link bodies: attach or detach a secondary key to the signer.

use catbuffer_core::record;

use crate::enums::LinkAction;
use crate::types::{FinalizationEpoch, PublicKey, VotingPublicKey};

record! {
    /// Links a remote account public key.
    pub struct AccountKeyLinkBody {
        pub linked_public_key: PublicKey,
        pub link_action: LinkAction,
    }
}

record! {
    pub struct NodeKeyLinkBody {
        pub linked_public_key: PublicKey,
        pub link_action: LinkAction,
    }
}

record! {
    pub struct VrfKeyLinkBody {
        pub linked_public_key: PublicKey,
        pub link_action: LinkAction,
    }
}

record! {
    /// Links a voting key for a range of finalization epochs.
    pub struct VotingKeyLinkBody {
        pub linked_public_key: VotingPublicKey,
        pub start_epoch: FinalizationEpoch,
        pub end_epoch: FinalizationEpoch,
        pub link_action: LinkAction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catbuffer_core::{Decode, Encode};

    #[test]
    fn voting_key_link_layout() {
        let body = VotingKeyLinkBody::new(
            VotingPublicKey::new([0xAA; 32]),
            FinalizationEpoch(3),
            FinalizationEpoch(9),
            LinkAction::Link,
        );
        let bytes = body.to_bytes();
        assert_eq!(bytes.len(), 32 + 4 + 4 + 1);
        assert_eq!(&bytes[32..36], &[3, 0, 0, 0]);
        assert_eq!(bytes[40], 1);
        assert_eq!(VotingKeyLinkBody::from_bytes(&bytes).unwrap(), body);
    }
}
