//! Byte-source abstraction for entry decoding.
//!
//! TIFF files declare their endianness in the file header (II = little-endian,
//! MM = big-endian), so byte order is a property of the reader, not of the
//! entry decoders. This module provides the [`EntryRead`] capability the
//! decoders consume, plus two concrete readers: one over an in-memory slice
//! (the common case once an IFD's byte range has been fetched) and one over
//! any blocking [`std::io::Read`] source.

use std::io::Read;

use crate::error::ReadError;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of a TIFF file.
///
/// All multi-byte values in the file must be read respecting the order
/// declared in the file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    ///
    /// # Panics
    /// Panics if the slice has fewer than 2 bytes.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => u16::from_le_bytes([bytes[0], bytes[1]]),
            ByteOrder::BigEndian => u16::from_be_bytes([bytes[0], bytes[1]]),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    ///
    /// # Panics
    /// Panics if the slice has fewer than 4 bytes.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => {
                u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
            }
            ByteOrder::BigEndian => u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        }
    }

    /// Read a u64 from a byte slice using this byte order.
    ///
    /// # Panics
    /// Panics if the slice has fewer than 8 bytes.
    #[inline]
    pub fn read_u64(self, bytes: &[u8]) -> u64 {
        match self {
            ByteOrder::LittleEndian => u64::from_le_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]),
            ByteOrder::BigEndian => u64::from_be_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7],
            ]),
        }
    }
}

// =============================================================================
// EntryRead
// =============================================================================

/// Capability for sequentially reading fixed-width fields from a byte source.
///
/// Each call consumes exactly the field width on success and advances the
/// source position by that amount. On failure the position reflects however
/// many bytes were consumed before the failing read; no rewinding is
/// performed, so recovery and re-seeking belong to the caller.
pub trait EntryRead {
    /// Read the next 2 bytes as a u16 in the configured byte order.
    fn read_u16(&mut self) -> Result<u16, ReadError>;

    /// Read the next 4 bytes as a u32 in the configured byte order.
    fn read_u32(&mut self) -> Result<u32, ReadError>;

    /// Read the next 8 bytes as a u64 in the configured byte order.
    fn read_u64(&mut self) -> Result<u64, ReadError>;

    /// Read exactly `buf.len()` raw bytes into `buf`.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), ReadError>;
}

// =============================================================================
// SliceReader
// =============================================================================

/// Reader over an in-memory byte slice with a configured byte order.
///
/// This is the usual way to decode entries once a caller has fetched an IFD's
/// byte range: position the reader at the start of an entry record and hand
/// it to the decoder.
#[derive(Debug, Clone)]
pub struct SliceReader<'a> {
    data: &'a [u8],
    pos: usize,
    byte_order: ByteOrder,
}

impl<'a> SliceReader<'a> {
    /// Create a reader positioned at the start of `data`.
    pub fn new(data: &'a [u8], byte_order: ByteOrder) -> Self {
        Self {
            data,
            pos: 0,
            byte_order,
        }
    }

    /// Current position within the slice, in bytes.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Number of unread bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Byte order this reader decodes multi-byte fields with.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ReadError> {
        if self.remaining() < len {
            return Err(ReadError::UnexpectedEof {
                needed: len,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }
}

impl EntryRead for SliceReader<'_> {
    fn read_u16(&mut self) -> Result<u16, ReadError> {
        let bytes = self.take(2)?;
        Ok(self.byte_order.read_u16(bytes))
    }

    fn read_u32(&mut self) -> Result<u32, ReadError> {
        let bytes = self.take(4)?;
        Ok(self.byte_order.read_u32(bytes))
    }

    fn read_u64(&mut self) -> Result<u64, ReadError> {
        let bytes = self.take(8)?;
        Ok(self.byte_order.read_u64(bytes))
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        let bytes = self.take(buf.len())?;
        buf.copy_from_slice(bytes);
        Ok(())
    }
}

// =============================================================================
// IoReader
// =============================================================================

/// Reader over any blocking [`std::io::Read`] source.
///
/// Useful when decoding entries straight from an open file without staging
/// the IFD in a buffer first. Underlying I/O failures surface as
/// [`ReadError::Io`]; a clean end-of-stream mid-field surfaces as
/// [`ReadError::UnexpectedEof`].
#[derive(Debug)]
pub struct IoReader<R: Read> {
    inner: R,
    byte_order: ByteOrder,
}

impl<R: Read> IoReader<R> {
    /// Wrap a byte source with the given byte order.
    pub fn new(inner: R, byte_order: ByteOrder) -> Self {
        Self { inner, byte_order }
    }

    /// Byte order this reader decodes multi-byte fields with.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Consume the reader, returning the underlying source.
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn fill(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(ReadError::UnexpectedEof {
                        needed: buf.len(),
                        remaining: filled,
                    });
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(ReadError::Io(e.to_string())),
            }
        }
        Ok(())
    }
}

impl<R: Read> EntryRead for IoReader<R> {
    fn read_u16(&mut self) -> Result<u16, ReadError> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(self.byte_order.read_u16(&buf))
    }

    fn read_u32(&mut self) -> Result<u32, ReadError> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(self.byte_order.read_u32(&buf))
    }

    fn read_u64(&mut self) -> Result<u64, ReadError> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf)?;
        Ok(self.byte_order.read_u64(&buf))
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<(), ReadError> {
        self.fill(buf)
    }
}

// =============================================================================
// Tests
// =============================================================================
