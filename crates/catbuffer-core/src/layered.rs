//! Layered records: a size-prefixed envelope followed by a body chosen by the
//! envelope's discriminator.
//!
//! ```text
//! +----------+----------------------+------------------------------+
//! | size u32 | envelope (fixed)     | body (layout chosen by kind) |
//! +----------+----------------------+------------------------------+
//!  \___________________________ size ____________________________/
//! ```
//!
//! The mapping from discriminator to body decoder is not built in. Callers
//! pass a [`Registry`], so the set of known kinds (and which of them are
//! allowed in a given position, e.g. inside an aggregate) is data owned by
//! the schema layer.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use bytes::{BufMut, BytesMut};
use tracing::trace;

use crate::codec::{Decode, Encode};
use crate::error::{ProtocolError, Result};
use crate::reader::Reader;

/// Width of the leading size field.
pub const SIZE_PREFIX: usize = 4;

/// Fixed leading part of a layered record, excluding the size prefix.
pub trait Envelope: Encode + Decode {
    /// Discriminator type used to look up the body.
    type Kind: Copy + Eq + Hash + fmt::Debug;

    /// Family name used in errors and logs ("transaction", "receipt", ...).
    const FAMILY: &'static str;

    fn kind(&self) -> Self::Kind;
}

/// A body family: usually an enum with one variant per body layout.
pub trait Variant: Encode {
    type Kind;

    /// Whether this body is a valid layout for an envelope of `kind`.
    fn matches(&self, kind: &Self::Kind) -> bool;
}

type BodyDecoder<B> = Box<dyn Fn(&mut Reader<'_>) -> Result<B> + Send + Sync>;

/// Discriminator → body decoder lookup.
pub struct Registry<K, B> {
    family: &'static str,
    decoders: HashMap<K, BodyDecoder<B>>,
}

impl<K, B> Registry<K, B>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    pub fn new(family: &'static str) -> Self {
        Registry {
            family,
            decoders: HashMap::new(),
        }
    }

    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Register a decoder for `kind`, replacing any previous one.
    pub fn register<F>(&mut self, kind: K, decoder: F) -> &mut Self
    where
        F: Fn(&mut Reader<'_>) -> Result<B> + Send + Sync + 'static,
    {
        self.decoders.insert(kind, Box::new(decoder));
        self
    }

    /// Register `T`'s own decoder, wrapped into the body family.
    pub fn register_as<T, W>(&mut self, kind: K, wrap: W) -> &mut Self
    where
        T: Decode + 'static,
        W: Fn(T) -> B + Send + Sync + 'static,
        K: 'static,
        B: 'static,
    {
        self.register(kind, move |r| T::decode(r).map(&wrap))
    }

    pub fn contains(&self, kind: &K) -> bool {
        self.decoders.contains_key(kind)
    }

    /// Registered kinds, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = K> + '_ {
        self.decoders.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }

    /// Decode a body of `kind` from `r`.
    pub fn decode_body(&self, kind: &K, r: &mut Reader<'_>) -> Result<B> {
        let decoder = self
            .decoders
            .get(kind)
            .ok_or_else(|| ProtocolError::UnknownVariant {
                family: self.family,
                raw: format!("{kind:?}"),
            })?;
        decoder(r)
    }
}

impl<K: fmt::Debug, B> fmt::Debug for Registry<K, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("family", &self.family)
            .field("kinds", &self.decoders.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// An envelope and the body it selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layered<E, B> {
    envelope: E,
    body: B,
}

impl<E, B> Layered<E, B>
where
    E: Envelope,
    B: Variant<Kind = E::Kind>,
{
    /// Pair an envelope with a body. The body must be a valid layout for
    /// the envelope's discriminator and the whole record must fit the u32
    /// size prefix.
    pub fn new(envelope: E, body: B) -> Result<Self> {
        if !body.matches(&envelope.kind()) {
            return Err(ProtocolError::invalid(format!(
                "{} body does not match discriminator {:?}",
                E::FAMILY,
                envelope.kind()
            )));
        }
        let size = SIZE_PREFIX + envelope.size() + body.size();
        if size as u64 > u64::from(u32::MAX) {
            return Err(ProtocolError::CountOverflow {
                count: size,
                max: u64::from(u32::MAX),
            });
        }
        Ok(Layered { envelope, body })
    }

    pub fn envelope(&self) -> &E {
        &self.envelope
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    pub fn kind(&self) -> E::Kind {
        self.envelope.kind()
    }

    pub fn into_parts(self) -> (E, B) {
        (self.envelope, self.body)
    }

    /// Decode one record, resolving the body through `registry`. On failure
    /// the reader is left where it was.
    pub fn decode_with(r: &mut Reader<'_>, registry: &Registry<E::Kind, B>) -> Result<Self> {
        r.attempt(|r| Self::decode_inner(r, registry))
    }

    /// Decode a record that must span the whole buffer.
    pub fn from_bytes_with(buf: &[u8], registry: &Registry<E::Kind, B>) -> Result<Self> {
        let mut r = Reader::new(buf);
        let value = Self::decode_with(&mut r, registry)?;
        r.finish()?;
        Ok(value)
    }

    fn decode_inner(r: &mut Reader<'_>, registry: &Registry<E::Kind, B>) -> Result<Self> {
        let declared = r.read_u32_le()? as usize;
        if declared < SIZE_PREFIX {
            return Err(ProtocolError::SizeMismatch {
                declared,
                actual: SIZE_PREFIX,
            });
        }
        let mut entity = r.take(declared - SIZE_PREFIX)?;

        let envelope = E::decode(&mut entity)?;
        let kind = envelope.kind();
        trace!(family = E::FAMILY, kind = ?kind, size = declared, "decoding layered record");

        let body = registry.decode_body(&kind, &mut entity)?;
        if !body.matches(&kind) {
            return Err(ProtocolError::UnknownVariant {
                family: registry.family(),
                raw: format!("{kind:?}"),
            });
        }
        if !entity.is_empty() {
            return Err(ProtocolError::SizeMismatch {
                declared,
                actual: SIZE_PREFIX + entity.position(),
            });
        }
        Ok(Layered { envelope, body })
    }
}

impl<E: Encode, B: Encode> Encode for Layered<E, B> {
    fn size(&self) -> usize {
        SIZE_PREFIX + self.envelope.size() + self.body.size()
    }

    fn encode(&self, out: &mut BytesMut) {
        out.put_u32_le(self.size() as u32);
        self.envelope.encode(out);
        self.body.encode(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::wire_enum! {
        enum Shape: u8 {
            Point = 1,
            Segment = 2,
            Unused = 3,
        }
    }

    crate::record! {
        struct Header {
            pub version: u8,
            pub shape: Shape,
        }
    }

    impl Envelope for Header {
        type Kind = Shape;
        const FAMILY: &'static str = "shape";

        fn kind(&self) -> Shape {
            self.shape
        }
    }

    crate::record! {
        struct Point {
            pub x: u32,
        }
    }

    crate::record! {
        struct Segment {
            pub from: u32,
            pub to: u64,
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Body {
        Point(Point),
        Segment(Segment),
    }

    impl Encode for Body {
        fn size(&self) -> usize {
            match self {
                Body::Point(p) => p.size(),
                Body::Segment(s) => s.size(),
            }
        }

        fn encode(&self, out: &mut BytesMut) {
            match self {
                Body::Point(p) => p.encode(out),
                Body::Segment(s) => s.encode(out),
            }
        }
    }

    impl Variant for Body {
        type Kind = Shape;

        fn matches(&self, kind: &Shape) -> bool {
            matches!(
                (self, kind),
                (Body::Point(_), Shape::Point) | (Body::Segment(_), Shape::Segment)
            )
        }
    }

    fn registry() -> Registry<Shape, Body> {
        let mut registry = Registry::new("shape");
        registry
            .register_as(Shape::Point, Body::Point)
            .register_as(Shape::Segment, Body::Segment);
        registry
    }

    fn segment() -> Layered<Header, Body> {
        Layered::new(
            Header::new(1, Shape::Segment),
            Body::Segment(Segment::new(3, 9)),
        )
        .unwrap()
    }

    #[test]
    fn envelope_selects_body() {
        let record = segment();
        let bytes = record.to_bytes();
        assert_eq!(record.size(), 4 + 2 + 12);
        assert_eq!(&bytes[..4], &[18, 0, 0, 0]);

        let decoded = Layered::<Header, Body>::from_bytes_with(&bytes, &registry()).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(decoded.kind(), Shape::Segment);
    }

    #[test]
    fn unregistered_kind_is_unknown_variant() {
        let mut bytes = segment().to_bytes().to_vec();
        bytes[5] = Shape::Unused.raw();
        let err = Layered::<Header, Body>::from_bytes_with(&bytes, &registry()).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownVariant {
                family: "shape",
                raw: "Unused".into()
            }
        );
    }

    #[test]
    fn body_of_another_kind_is_unknown_variant() {
        let mut registry = Registry::new("shape");
        registry.register_as(Shape::Point, Body::Segment);
        let mut bytes = segment().to_bytes().to_vec();
        bytes[5] = Shape::Point.raw();
        let err = Layered::<Header, Body>::from_bytes_with(&bytes, &registry).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::UnknownVariant {
                family: "shape",
                raw: "Point".into()
            }
        );
    }

    #[test]
    fn size_prefix_must_match_body() {
        let mut bytes = segment().to_bytes().to_vec();
        bytes.push(0);
        bytes[0] += 1;
        let err = Layered::<Header, Body>::from_bytes_with(&bytes, &registry()).unwrap_err();
        assert_eq!(
            err,
            ProtocolError::SizeMismatch {
                declared: 19,
                actual: 18
            }
        );
    }

    #[test]
    fn mismatched_body_is_rejected_at_construction() {
        let err = Layered::new(Header::new(1, Shape::Point), Body::Segment(Segment::new(0, 0)))
            .unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidConstruction(_)));
    }

    #[test]
    fn failed_decode_rewinds() {
        let bytes = segment().to_bytes();
        let mut r = Reader::new(&bytes[..10]);
        assert!(Layered::<Header, Body>::decode_with(&mut r, &registry())
            .unwrap_err()
            .is_truncation());
        assert_eq!(r.position(), 0);
    }
}
