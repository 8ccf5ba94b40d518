use thiserror::Error;

/// Errors that can occur while reading entry fields from a byte source.
///
/// This is the only error kind the decoders produce: an entry either decodes
/// completely or the failing field read is surfaced unchanged. Structural
/// decoding accepts any bit pattern, so there are no validation variants.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReadError {
    /// The source ended before the field could be fully read
    #[error("Unexpected end of input: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEof { needed: usize, remaining: usize },

    /// The underlying byte source failed
    #[error("Read failed: {0}")]
    Io(String),
}
