//! Aggregate bodies: embedded transactions plus their cosignatures.
//!
//! ```text
//! [transactions_hash 32][payload_size u32][reserved u32]
//! [embedded transaction, zero padded to 8]...   payload_size bytes
//! [cosignature 104]...                          to the end of the entity
//! ```
//!
//! Embedded transactions are layered records, so decoding needs the embedded
//! registry; see [`AggregateBody::decode_with`].

use catbuffer_core::collection::{
    encode_padded, fits, padded_size, read_remaining, read_sized_with, LengthPrefix,
};
use catbuffer_core::{record, BytesMut, Decode, Encode, ProtocolError, Reader, Result};

use crate::registry::TransactionRegistry;
use crate::transaction::EmbeddedTransaction;
use crate::types::{Hash256, PublicKey, Signature};

/// Alignment of each embedded transaction inside the payload.
pub const EMBEDDED_ALIGNMENT: usize = 8;

record! {
    pub struct Cosignature {
        pub version: u64,
        pub signer_public_key: PublicKey,
        pub signature: Signature,
    }
}

record! {
    /// Cosignature sent separately from the aggregate it signs.
    pub struct DetachedCosignature {
        pub version: u64,
        pub signer_public_key: PublicKey,
        pub signature: Signature,
        pub parent_hash: Hash256,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregateBody {
    transactions_hash: Hash256,
    transactions: Vec<EmbeddedTransaction>,
    cosignatures: Vec<Cosignature>,
}

impl AggregateBody {
    /// Fails if an embedded transaction is itself an aggregate or the
    /// payload does not fit its u32 size field.
    pub fn new(
        transactions_hash: Hash256,
        transactions: Vec<EmbeddedTransaction>,
        cosignatures: Vec<Cosignature>,
    ) -> Result<Self> {
        if let Some(nested) = transactions.iter().find(|tx| tx.body().is_aggregate()) {
            return Err(ProtocolError::invalid(format!(
                "aggregate cannot embed {}",
                nested.kind()
            )));
        }
        fits::<u32>(padded_size(&transactions, EMBEDDED_ALIGNMENT))?;
        Ok(AggregateBody {
            transactions_hash,
            transactions,
            cosignatures,
        })
    }

    pub fn transactions_hash(&self) -> &Hash256 {
        &self.transactions_hash
    }

    pub fn transactions(&self) -> &[EmbeddedTransaction] {
        &self.transactions
    }

    pub fn cosignatures(&self) -> &[Cosignature] {
        &self.cosignatures
    }

    fn payload_size(&self) -> usize {
        padded_size(&self.transactions, EMBEDDED_ALIGNMENT)
    }

    /// Decode the body, resolving embedded transactions through `embedded`.
    /// Cosignatures run to the end of `r`, so `r` must be bounded to the
    /// enclosing entity.
    pub fn decode_with(r: &mut Reader<'_>, embedded: &TransactionRegistry) -> Result<Self> {
        let transactions_hash = Hash256::decode(r)?;
        let payload_size = u32::decode(r)?.to_len()?;
        r.skip_zeroed(4, "aggregate_transaction_header_reserved")?;
        let transactions = read_sized_with(r, payload_size, EMBEDDED_ALIGNMENT, |r| {
            EmbeddedTransaction::decode_with(r, embedded)
        })?;
        let cosignatures = read_remaining(r)?;
        Ok(AggregateBody {
            transactions_hash,
            transactions,
            cosignatures,
        })
    }
}

impl Encode for AggregateBody {
    fn size(&self) -> usize {
        self.transactions_hash.size() + 4 + 4 + self.payload_size() + self.cosignatures.size()
    }

    fn encode(&self, out: &mut BytesMut) {
        self.transactions_hash.encode(out);
        u32::from_len(self.payload_size()).encode(out);
        0u32.encode(out);
        encode_padded(&self.transactions, EMBEDDED_ALIGNMENT, out);
        self.cosignatures.encode(out);
    }
}
