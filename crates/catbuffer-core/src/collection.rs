//! Collection codec: four ways to know how many elements follow.
//!
//! ```text
//! fixed count      [e0][e1]..[eN-1]                 N is part of the type ([T; N])
//! count prefixed   [count][e0][e1]..                count width: u8/u16/u32/u64
//! size prefixed    [bytes][e0 pad][e1 pad]..        stops when `bytes` are consumed
//! remaining        [e0 pad][e1 pad]..<end>          stops when the reader is empty
//! ```
//!
//! Prefixes are never stored in a record. They are derived from the
//! collection when encoding, which is why encode-side helpers take the whole
//! slice and the prefix type as a parameter. Each element may be followed by
//! zero padding up to `alignment` bytes (0 means none). Padding is part of
//! the size prefix and of the record size, and must decode as zeros.

use bytes::BytesMut;

use crate::codec::{Decode, Encode};
use crate::error::{ProtocolError, Result};
use crate::reader::Reader;

// =============================================================================
// Prefix widths
// =============================================================================

/// Integer widths usable as a count or byte-size prefix.
pub trait LengthPrefix: Encode + Decode + Copy {
    /// Largest length the prefix can carry.
    const MAX: u64;

    /// Width-narrowing conversion. Callers check [`fits`] at construction
    /// time, so this never truncates for a validated record.
    fn from_len(len: usize) -> Self;

    fn to_len(self) -> Result<usize>;
}

macro_rules! length_prefix {
    ($($ty:ty),+) => {
        $(
            impl LengthPrefix for $ty {
                const MAX: u64 = <$ty>::MAX as u64;

                #[inline]
                fn from_len(len: usize) -> Self {
                    debug_assert!(
                        len as u64 <= <Self as LengthPrefix>::MAX,
                        "length prefix overflow"
                    );
                    len as $ty
                }

                #[inline]
                fn to_len(self) -> Result<usize> {
                    usize::try_from(self).map_err(|_| ProtocolError::CountOverflow {
                        count: usize::MAX,
                        max: self as u64,
                    })
                }
            }
        )+
    };
}

length_prefix!(u8, u16, u32, u64);

/// Check that `len` can be written with prefix `P`.
pub fn fits<P: LengthPrefix>(len: usize) -> Result<()> {
    if len as u64 > P::MAX {
        return Err(ProtocolError::CountOverflow {
            count: len,
            max: P::MAX,
        });
    }
    Ok(())
}

// =============================================================================
// Padding
// =============================================================================

/// Zero bytes needed after an element of `size` bytes.
#[inline]
pub fn padding_size(size: usize, alignment: usize) -> usize {
    if alignment == 0 {
        return 0;
    }
    (alignment - size % alignment) % alignment
}

/// Size of all elements including per-element padding.
pub fn padded_size<T: Encode>(items: &[T], alignment: usize) -> usize {
    items
        .iter()
        .map(|item| {
            let size = item.size();
            size + padding_size(size, alignment)
        })
        .sum()
}

/// Write each element followed by its padding.
pub fn encode_padded<T: Encode>(items: &[T], alignment: usize, out: &mut BytesMut) {
    for item in items {
        item.encode(out);
        let pad = padding_size(item.size(), alignment);
        out.resize(out.len() + pad, 0);
    }
}

// =============================================================================
// Encode side
// =============================================================================

/// Write the element count of `items` at width `P`.
pub fn encode_count<P: LengthPrefix>(items: &[impl Encode], out: &mut BytesMut) {
    P::from_len(items.len()).encode(out);
}

/// Write the padded byte size of `items` at width `P`.
pub fn encode_byte_size<P: LengthPrefix, T: Encode>(
    items: &[T],
    alignment: usize,
    out: &mut BytesMut,
) {
    P::from_len(padded_size(items, alignment)).encode(out);
}

// =============================================================================
// Decode side
// =============================================================================

/// Read exactly `count` elements.
pub fn read_counted_with<T>(
    r: &mut Reader<'_>,
    count: usize,
    mut element: impl FnMut(&mut Reader<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    // A hostile count must not drive the allocation.
    let mut items = Vec::with_capacity(count.min(r.remaining()));
    for _ in 0..count {
        items.push(element(r)?);
    }
    Ok(items)
}

pub fn read_counted<T: Decode>(r: &mut Reader<'_>, count: usize) -> Result<Vec<T>> {
    read_counted_with(r, count, T::decode)
}

/// Read a count of width `P`, then that many elements.
pub fn read_count_prefixed<P: LengthPrefix, T: Decode>(r: &mut Reader<'_>) -> Result<Vec<T>> {
    let count = P::decode(r)?.to_len()?;
    read_counted(r, count)
}

/// Read elements until exactly `byte_size` bytes (padding included) have
/// been consumed. Overshooting the declared size is a `SizeMismatch`.
pub fn read_sized_with<T>(
    r: &mut Reader<'_>,
    byte_size: usize,
    alignment: usize,
    mut element: impl FnMut(&mut Reader<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    if r.remaining() < byte_size {
        return Err(ProtocolError::Truncated {
            offset: r.offset(),
            needed: byte_size,
            available: r.remaining(),
        });
    }
    let start = r.position();
    let mut items = Vec::new();
    while r.position() - start < byte_size {
        let item_start = r.position();
        let item = element(r)?;
        let consumed = r.position() - item_start;
        r.skip_zeroed(padding_size(consumed, alignment), "padding")?;
        items.push(item);
    }
    let actual = r.position() - start;
    if actual != byte_size {
        return Err(ProtocolError::SizeMismatch {
            declared: byte_size,
            actual,
        });
    }
    Ok(items)
}

pub fn read_sized<T: Decode>(
    r: &mut Reader<'_>,
    byte_size: usize,
    alignment: usize,
) -> Result<Vec<T>> {
    read_sized_with(r, byte_size, alignment, T::decode)
}

/// Read elements until the reader is exhausted.
pub fn read_remaining_with<T>(
    r: &mut Reader<'_>,
    alignment: usize,
    mut element: impl FnMut(&mut Reader<'_>) -> Result<T>,
) -> Result<Vec<T>> {
    let mut items = Vec::new();
    while !r.is_empty() {
        let item_start = r.position();
        let item = element(r)?;
        let consumed = r.position() - item_start;
        r.skip_zeroed(padding_size(consumed, alignment), "padding")?;
        items.push(item);
    }
    Ok(items)
}

pub fn read_remaining<T: Decode>(r: &mut Reader<'_>) -> Result<Vec<T>> {
    read_remaining_with(r, 0, T::decode)
}

// =============================================================================
// Fixed count
// =============================================================================

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn size(&self) -> usize {
        self.iter().map(Encode::size).sum()
    }

    fn encode(&self, out: &mut BytesMut) {
        for item in self {
            item.encode(out);
        }
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode(r: &mut Reader<'_>) -> Result<Self> {
        let items = read_counted::<T>(r, N)?;
        items
            .try_into()
            .map_err(|items: Vec<T>| ProtocolError::SizeMismatch {
                declared: N,
                actual: items.len(),
            })
    }
}
