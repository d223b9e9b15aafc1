//! Byte cursor used by every decoder.
//!
//! A [`Reader`] is a position over a borrowed slice. All reads are
//! bounds-checked and return [`ProtocolError::Truncated`] instead of
//! panicking. Sub-readers created with [`Reader::take`] bound a nested
//! record to its declared size, so a consume-to-end collection never
//! reads past the record that owns it.

use crate::codec::Decode;
use crate::error::{ProtocolError, Result};

#[derive(Debug, Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
    /// Absolute offset of `buf[0]` in the outermost buffer, for errors.
    base: usize,
}

impl<'a> Reader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Reader {
            buf,
            pos: 0,
            base: 0,
        }
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Absolute offset in the outermost buffer.
    pub fn offset(&self) -> usize {
        self.base + self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Decode one `T`, rewinding to the starting position if it fails.
    ///
    /// This is the entry point callers should use; field decoders inside a
    /// record call `T::decode` directly and let the outermost `read`
    /// restore the cursor.
    pub fn read<T: Decode>(&mut self) -> Result<T> {
        self.attempt(T::decode)
    }

    /// Run `f`, rewinding to the starting position if it fails. Used for
    /// decoders that need outside context, such as a body registry.
    pub fn attempt<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let start = self.pos;
        let result = f(self);
        if result.is_err() {
            self.pos = start;
        }
        result
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.truncated(n));
        }
        let bytes = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(bytes)
    }

    /// Read exactly `N` bytes into an array.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_u16_le(&mut self) -> Result<u16> {
        Ok(u16::from_le_bytes(self.read_array()?))
    }

    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(u32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64_le(&mut self) -> Result<u64> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    /// Split off a sub-reader over the next `n` bytes and advance past them.
    pub fn take(&mut self, n: usize) -> Result<Reader<'a>> {
        let base = self.offset();
        let buf = self.read_bytes(n)?;
        Ok(Reader { buf, pos: 0, base })
    }

    /// Read `n` bytes that must all be zero.
    pub fn skip_zeroed(&mut self, n: usize, field: &'static str) -> Result<()> {
        if self.read_bytes(n)?.iter().any(|b| *b != 0) {
            return Err(ProtocolError::NonZeroReserved { field });
        }
        Ok(())
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self) -> Result<()> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(ProtocolError::TrailingBytes { remaining }),
        }
    }

    fn truncated(&self, needed: usize) -> ProtocolError {
        ProtocolError::Truncated {
            offset: self.offset(),
            needed,
            available: self.remaining(),
        }
    }
}
