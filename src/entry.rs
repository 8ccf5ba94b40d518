//! IFD entry record decoding.
//!
//! An Image File Directory (IFD) is a sequence of fixed-size entry records,
//! each describing one metadata field or pointing to out-of-band data. This
//! module decodes the two record layouts:
//!
//! # Classic TIFF entry (12 bytes)
//! ```text
//! Bytes 0-1:  Tag identifying the entry
//! Bytes 2-3:  Entry type
//! Bytes 4-7:  Count of values of the indicated type
//! Bytes 8-11: Value offset - either the value itself (if it fits) or the
//!             file offset of the value's storage location
//! ```
//!
//! # BigTIFF entry (20 bytes)
//! ```text
//! Bytes 0-1:   Tag identifying the entry
//! Bytes 2-3:   Entry type
//! Bytes 4-11:  Count of values of the indicated type
//! Bytes 12-19: Value offset (8 bytes)
//! ```
//!
//! The value-offset field is kept as raw bytes: whether it holds an inline
//! value or a file offset depends on the entry's type and count, and that
//! interpretation belongs to the caller. The decoders likewise accept any
//! bit pattern for tag and type; this layer is structural, not semantic.

use std::fmt;

use serde::Serialize;

use crate::error::ReadError;
use crate::reader::EntryRead;

// =============================================================================
// Entry (classic TIFF)
// =============================================================================

/// A single entry in a classic TIFF IFD.
///
/// This is the mostly uninterpreted core 12-byte record. Instances are
/// immutable: they are only created by [`Entry::parse`] and expose read-only
/// accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    #[serde(rename = "tagID")]
    tag_id: u16,

    #[serde(rename = "typeID")]
    type_id: u16,

    count: u32,

    #[serde(rename = "valueOffset")]
    value_offset: [u8; 4],
}

impl Entry {
    /// Size of a classic TIFF IFD entry record in bytes.
    pub const SIZE: usize = 12;

    /// Decode one entry from a reader positioned at the start of a record.
    ///
    /// Reads, in strict order: tag (2 bytes), type (2 bytes), count
    /// (4 bytes), value offset (4 raw bytes). On success the reader has
    /// advanced by exactly [`Entry::SIZE`] bytes.
    ///
    /// # Errors
    /// The first field read that fails aborts the decode and its error is
    /// returned unchanged. The reader position then reflects how much was
    /// consumed before the failure, which is not guaranteed to align with
    /// the next record boundary; callers should treat the directory as
    /// truncated at this entry.
    pub fn parse<R: EntryRead>(reader: &mut R) -> Result<Self, ReadError> {
        let tag_id = reader.read_u16()?;
        let type_id = reader.read_u16()?;
        let count = reader.read_u32()?;
        let mut value_offset = [0u8; 4];
        reader.read_bytes(&mut value_offset)?;

        Ok(Self {
            tag_id,
            type_id,
            count,
            value_offset,
        })
    }

    /// Tag identifying the metadata field.
    #[inline]
    pub fn tag_id(&self) -> u16 {
        self.tag_id
    }

    /// Type of the entry's values (BYTE, SHORT, LONG, RATIONAL, ...).
    #[inline]
    pub fn type_id(&self) -> u16 {
        self.type_id
    }

    /// Number of values of the indicated type.
    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Raw value-offset bytes, uninterpreted.
    ///
    /// Holds either the inline value or a file offset, depending on the
    /// entry's type and count.
    #[inline]
    pub fn value_offset(&self) -> [u8; 4] {
        self.value_offset
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TagID: {:5}, TypeID: {:5}, Count: {}, ValueOffset: {:?}>",
            self.tag_id, self.type_id, self.count, self.value_offset
        )
    }
}

// =============================================================================
// EntryBig (BigTIFF)
// =============================================================================

/// A single entry in a BigTIFF IFD.
///
/// The mostly uninterpreted core 20-byte record: same shape as [`Entry`]
/// with the count widened to 64 bits and the value offset to 8 bytes. The
/// two record kinds are distinct types and are never coerced into each
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EntryBig {
    #[serde(rename = "tagID")]
    tag_id: u16,

    #[serde(rename = "typeID")]
    type_id: u16,

    count: u64,

    #[serde(rename = "valueOffset")]
    value_offset: [u8; 8],
}

impl EntryBig {
    /// Size of a BigTIFF IFD entry record in bytes.
    pub const SIZE: usize = 20;

    /// Decode one entry from a reader positioned at the start of a record.
    ///
    /// Reads, in strict order: tag (2 bytes), type (2 bytes), count
    /// (8 bytes), value offset (8 raw bytes). On success the reader has
    /// advanced by exactly [`EntryBig::SIZE`] bytes.
    ///
    /// # Errors
    /// Same contract as [`Entry::parse`]: the first failing field read
    /// aborts the decode and is returned unchanged.
    pub fn parse<R: EntryRead>(reader: &mut R) -> Result<Self, ReadError> {
        let tag_id = reader.read_u16()?;
        let type_id = reader.read_u16()?;
        let count = reader.read_u64()?;
        let mut value_offset = [0u8; 8];
        reader.read_bytes(&mut value_offset)?;

        Ok(Self {
            tag_id,
            type_id,
            count,
            value_offset,
        })
    }

    /// Tag identifying the metadata field.
    #[inline]
    pub fn tag_id(&self) -> u16 {
        self.tag_id
    }

    /// Type of the entry's values.
    #[inline]
    pub fn type_id(&self) -> u16 {
        self.type_id
    }

    /// Number of values of the indicated type.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Raw value-offset bytes, uninterpreted.
    #[inline]
    pub fn value_offset(&self) -> [u8; 8] {
        self.value_offset
    }
}

impl fmt::Display for EntryBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<TagID: {:5}, TypeID: {:5}, Count: {}, ValueOffset: {:?}>",
            self.tag_id, self.type_id, self.count, self.value_offset
        )
    }
}

// =============================================================================
// Tests
// =============================================================================
