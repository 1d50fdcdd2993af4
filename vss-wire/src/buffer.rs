//! Byte-buffer cursors with explicit resource accounting.

use crate::WireError;

/// A write cursor over a caller-owned byte buffer.
///
/// Every write checks the remaining room first and fails with
/// [`WireError::BufferTooSmall`] instead of reallocating; the caller sizes
/// the buffer.
#[derive(Debug)]
pub struct Encoder<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Encoder<'a> {
    /// Creates an encoder writing from the start of `buf`.
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes written so far.
    pub fn written(&self) -> usize {
        self.pos
    }

    /// Bytes still available.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Reserves the next `n` bytes for writing.
    pub(crate) fn put(&mut self, n: usize) -> Result<&mut [u8], WireError> {
        if self.remaining() < n {
            return Err(WireError::BufferTooSmall);
        }
        let start = self.pos;
        self.pos += n;
        Ok(&mut self.buf[start..start + n])
    }

    /// Writes a big-endian `u32`.
    ///
    /// # Errors
    /// [`WireError::BufferTooSmall`] if fewer than four bytes remain.
    pub fn put_u32(&mut self, value: u32) -> Result<(), WireError> {
        self.put(4)?.copy_from_slice(&value.to_be_bytes());
        Ok(())
    }
}

/// A read cursor over a byte buffer with a remaining-byte quota.
///
/// The quota bounds the total bytes a decode operation may consume,
/// independently of how large the underlying buffer happens to be. It is
/// the decoder-side defence against hostile length prefixes: vector
/// decodes validate `length × element_size` against buffer, quota, and
/// overflow before parsing a single element.
#[derive(Debug)]
pub struct Decoder<'a> {
    buf: &'a [u8],
    pos: usize,
    quota: usize,
}

impl<'a> Decoder<'a> {
    /// Creates a decoder reading from the start of `buf`, allowed to
    /// consume at most `quota` bytes.
    pub fn new(buf: &'a [u8], quota: usize) -> Self {
        Self { buf, pos: 0, quota }
    }

    /// Bytes consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }

    /// Bytes still available in the buffer.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Quota still available.
    pub fn remaining_quota(&self) -> usize {
        self.quota
    }

    /// Consumes the next `n` bytes, charging buffer and quota.
    pub(crate) fn take(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        if self.quota < n {
            return Err(WireError::QuotaExceeded);
        }
        if self.remaining() < n {
            return Err(WireError::BufferTooSmall);
        }
        self.quota -= n;
        let start = self.pos;
        self.pos += n;
        Ok(&self.buf[start..start + n])
    }

    /// Charges `n` bytes against the quota without reading; used for
    /// allocations a decode will perform beyond the bytes it parses
    /// (e.g. a polynomial's spare capacity).
    pub(crate) fn charge(&mut self, n: usize) -> Result<(), WireError> {
        if self.quota < n {
            return Err(WireError::QuotaExceeded);
        }
        self.quota -= n;
        Ok(())
    }

    /// Reads a big-endian `u32`.
    ///
    /// # Errors
    /// [`WireError::BufferTooSmall`] or [`WireError::QuotaExceeded`] if
    /// four bytes are not available.
    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let bytes = self.take(4)?;
        Ok(u32::from_be_bytes(bytes.try_into().expect("four bytes")))
    }

    /// Validates a declared element count against overflow, the buffer,
    /// and the quota, before any element is parsed.
    pub(crate) fn check_vec(&self, count: u32, elem_size: usize) -> Result<(), WireError> {
        let total = (count as usize)
            .checked_mul(elem_size)
            .ok_or(WireError::LengthOverflow)?;
        if total > self.remaining() {
            return Err(WireError::BufferTooSmall);
        }
        if total > self.quota {
            return Err(WireError::QuotaExceeded);
        }
        Ok(())
    }
}
