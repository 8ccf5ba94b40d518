//! # tiff-entry
//!
//! Structural decoder for the fixed-size directory-entry records of TIFF and
//! BigTIFF files.
//!
//! A TIFF file's metadata lives in Image File Directories (IFDs): sequences
//! of tightly packed entry records, 12 bytes each in classic TIFF and
//! 20 bytes in BigTIFF. This crate decodes a single record into its four
//! fields (tag, type, count, value offset) and nothing more. Interpreting
//! those fields, dereferencing value offsets, walking the IFD chain, and
//! decoding pixels all belong to the layers above.
//!
//! ## Key Concepts
//!
//! - **Byte order**: TIFF files declare their endianness (II = little-endian,
//!   MM = big-endian) in the header. Endianness is a property of the reader
//!   handed to the decoders, not of the decoders themselves.
//!
//! - **Classic TIFF vs BigTIFF**: the record layouts differ only in width:
//!   BigTIFF widens the count to 64 bits and the value offset to 8 bytes.
//!   [`Entry`] and [`EntryBig`] are distinct types, never coerced.
//!
//! - **Opaque value offset**: the last field of a record is either an inline
//!   value or a file offset, decided by the entry's type and count. The
//!   decoders keep it as raw bytes and leave that decision to the caller.
//!
//! ## Example
//!
//! ```rust
//! use tiff_entry::{ByteOrder, Entry, SliceReader};
//!
//! let record = [
//!     0x01, 0x01, // TagID = 257 (ImageLength)
//!     0x00, 0x03, // TypeID = 3 (SHORT)
//!     0x00, 0x00, 0x00, 0x01, // Count = 1
//!     0x04, 0x00, 0x00, 0x00, // inline value, kept raw
//! ];
//!
//! let mut reader = SliceReader::new(&record, ByteOrder::BigEndian);
//! let entry = Entry::parse(&mut reader)?;
//!
//! assert_eq!(entry.tag_id(), 257);
//! assert_eq!(entry.type_id(), 3);
//! assert_eq!(entry.count(), 1);
//! assert_eq!(entry.value_offset(), [0x04, 0x00, 0x00, 0x00]);
//! # Ok::<(), tiff_entry::ReadError>(())
//! ```
//!
//! Decoding is synchronous and holds no shared state: each parse call is a
//! pure function of the reader's position, so independent readers may be
//! decoded concurrently without synchronization.

pub mod entry;
pub mod error;
pub mod reader;

// Re-export commonly used types
pub use entry::{Entry, EntryBig};
pub use error::ReadError;
pub use reader::{ByteOrder, EntryRead, IoReader, SliceReader};
