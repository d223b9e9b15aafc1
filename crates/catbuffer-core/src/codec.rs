//! Encode / decode / size contracts and the primitive field codecs.
//!
//! Every wire type implements [`Encode`] (exact size + serialization) and,
//! unless its layout depends on outside context, [`Decode`]. Multi-byte
//! integers are little-endian on the wire.
//!
//! `size()` must always equal the number of bytes `encode()` appends; the
//! engine relies on it for size prefixes and padding.

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::Result;
use crate::reader::Reader;

pub trait Encode {
    /// Exact encoded length in bytes.
    fn size(&self) -> usize;

    /// Append the canonical encoding to `out`.
    fn encode(&self, out: &mut BytesMut);

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Bytes {
        let mut out = BytesMut::with_capacity(self.size());
        self.encode(&mut out);
        debug_assert_eq!(out.len(), self.size(), "size() disagrees with encode()");
        out.freeze()
    }
}

pub trait Decode: Sized {
    /// Decode one value from the cursor, consuming exactly its layout.
    fn decode(r: &mut Reader<'_>) -> Result<Self>;

    /// Decode a value that must span the whole buffer.
    fn from_bytes(buf: &[u8]) -> Result<Self> {
        let mut r = Reader::new(buf);
        let value = r.read::<Self>()?;
        r.finish()?;
        Ok(value)
    }
}

// -----------------------------------------------------------------------------
// Fixed-width integers
// -----------------------------------------------------------------------------

macro_rules! int_codec {
    ($ty:ty, $width:expr, $put:ident, $read:ident) => {
        impl Encode for $ty {
            #[inline]
            fn size(&self) -> usize {
                $width
            }

            #[inline]
            fn encode(&self, out: &mut BytesMut) {
                out.$put(*self);
            }
        }

        impl Decode for $ty {
            #[inline]
            fn decode(r: &mut Reader<'_>) -> Result<Self> {
                Ok(r.$read()? as $ty)
            }
        }
    };
}

int_codec!(u8, 1, put_u8, read_u8);
int_codec!(u16, 2, put_u16_le, read_u16_le);
int_codec!(u32, 4, put_u32_le, read_u32_le);
int_codec!(u64, 8, put_u64_le, read_u64_le);
int_codec!(i8, 1, put_i8, read_u8);
int_codec!(i16, 2, put_i16_le, read_u16_le);

// -----------------------------------------------------------------------------
// Containers without their own prefix
// -----------------------------------------------------------------------------

/// A vector encodes as its elements back to back. Where the count or byte
/// size lives on the wire is up to the owning record (see `collection`).
impl<T: Encode> Encode for Vec<T> {
    fn size(&self) -> usize {
        self.iter().map(Encode::size).sum()
    }

    fn encode(&self, out: &mut BytesMut) {
        for item in self {
            item.encode(out);
        }
    }
}

/// An absent conditional field occupies no bytes.
impl<T: Encode> Encode for Option<T> {
    fn size(&self) -> usize {
        self.as_ref().map_or(0, Encode::size)
    }

    fn encode(&self, out: &mut BytesMut) {
        if let Some(value) = self {
            value.encode(out);
        }
    }
}

impl<T: Encode + ?Sized> Encode for Box<T> {
    fn size(&self) -> usize {
        (**self).size()
    }

    fn encode(&self, out: &mut BytesMut) {
        (**self).encode(out)
    }
}
