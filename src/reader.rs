//! Forward-only cursor over a fully buffered input.

use zerocopy::byteorder::{I32, LittleEndian, U32};

use crate::{Error, Result, cold_path};

/// Owns an input buffer and a read position that only ever moves forward.
///
/// The buffer can be anything that dereferences to a byte slice: a borrowed
/// `&[u8]`, an owned `Vec<u8>`, or a shared [`bytes::Bytes`] handle. Every
/// read is bounds checked; a read that would run past the end fails with
/// [`Error::OutOfBounds`] and leaves the cursor untouched.
///
/// # Example
///
/// ```
/// use na_marshal::Reader;
///
/// let mut reader = Reader::new(&[b'i', 0x01, 0x00, 0x00, 0x00][..]);
/// assert_eq!(reader.read_u8().unwrap(), b'i');
/// assert_eq!(reader.read_u32_le().unwrap(), 1);
/// assert!(!reader.has_more());
/// assert!(reader.read_u8().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Reader<B> {
    buf: B,
    pos: usize,
}

impl<B: AsRef<[u8]>> Reader<B> {
    pub fn new(buf: B) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current offset of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.as_ref().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of bytes between the cursor and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.len() - self.pos
    }

    /// Returns `true` while at least one unread byte is left.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.pos < self.len()
    }

    /// Peeks at the byte under the cursor without consuming it.
    #[inline]
    pub fn peek_u8(&self) -> Option<u8> {
        self.buf.as_ref().get(self.pos).copied()
    }

    #[inline]
    pub fn read_u8(&mut self) -> Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    #[inline]
    pub fn read_u32_le(&mut self) -> Result<u32> {
        Ok(U32::<LittleEndian>::from_bytes(self.read_array()?).get())
    }

    /// Reads four bytes as a little-endian two's-complement integer.
    ///
    /// This is the same bit pattern [`read_u32_le`](Self::read_u32_le) would
    /// return, so `0xFFFF_FFFF` comes back as `-1`.
    #[inline]
    pub fn read_i32_le(&mut self) -> Result<i32> {
        Ok(I32::<LittleEndian>::from_bytes(self.read_array()?).get())
    }

    /// Reads the next `n` bytes as a view into the buffer.
    pub fn read_bytes(&mut self, n: usize) -> Result<&[u8]> {
        self.check(n)?;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf.as_ref()[start..self.pos])
    }

    /// Releases the buffer.
    pub fn into_inner(self) -> B {
        self.buf
    }

    /// Borrows the whole buffer, independent of the cursor.
    pub fn get_ref(&self) -> &B {
        &self.buf
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.check(N)?;
        let mut out = [0; N];
        out.copy_from_slice(&self.buf.as_ref()[self.pos..self.pos + N]);
        self.pos += N;
        Ok(out)
    }

    #[inline]
    fn check(&self, requested: usize) -> Result<()> {
        let remaining = self.remaining();
        if requested > remaining {
            cold_path();
            return Err(Error::OutOfBounds {
                offset: self.pos,
                requested,
                remaining,
            });
        }
        Ok(())
    }
}

impl<'a> Reader<&'a [u8]> {
    /// Like [`read_bytes`](Self::read_bytes), but the view outlives the
    /// reader.
    pub fn read_borrowed(&mut self, n: usize) -> Result<&'a [u8]> {
        self.check(n)?;
        let buf: &'a [u8] = self.buf;
        let start = self.pos;
        self.pos += n;
        Ok(&buf[start..self.pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_by_width() {
        let data = [0xAAu8, 0x01, 0x02, 0x03, 0x04, b'x', b'y'];
        let mut reader = Reader::new(&data[..]);
        assert_eq!(reader.read_u8().unwrap(), 0xAA);
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_u32_le().unwrap(), 0x0403_0201);
        assert_eq!(reader.position(), 5);
        assert_eq!(reader.read_bytes(2).unwrap(), b"xy");
        assert_eq!(reader.position(), 7);
        assert!(!reader.has_more());
    }

    #[test]
    fn out_of_bounds_keeps_cursor() {
        let mut reader = Reader::new(vec![1u8, 2, 3]);
        reader.read_u8().unwrap();
        match reader.read_u32_le() {
            Err(Error::OutOfBounds {
                offset: 1,
                requested: 4,
                remaining: 2,
            }) => {}
            other => panic!("Expected OutOfBounds, got {other:?}"),
        }
        assert_eq!(reader.position(), 1);
        assert_eq!(reader.read_bytes(2).unwrap(), &[2, 3]);
    }

    #[test]
    fn zero_length_read_at_end() {
        let mut reader = Reader::new(&b""[..]);
        assert!(reader.is_empty());
        assert_eq!(reader.read_bytes(0).unwrap(), b"");
        assert!(reader.read_u8().is_err());
        assert_eq!(reader.peek_u8(), None);
    }

    #[test]
    fn signed_reinterpretation() {
        let mut reader = Reader::new([0xFFu8, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x80]);
        assert_eq!(reader.read_i32_le().unwrap(), -1);
        assert_eq!(reader.read_i32_le().unwrap(), i32::MIN);
    }
}
