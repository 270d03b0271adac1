use thiserror::Error;

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Integer values have no invalid bit patterns, so the only failures are range violations
/// against a caller-supplied buffer. Both are contract violations in the caller's own offset
/// arithmetic rather than recoverable I/O faults, and are never retried or clamped internally.
///
/// # Error Categories
///
/// - [`Error::BufferOverflow`] - A write would have extended past the destination buffer
/// - [`Error::OutOfBounds`] - A read would have extended past the source buffer
///
/// # Examples
///
/// ```rust
/// use fixwidth::{codec::encode_into_at, Error};
///
/// let mut buffer = [0u8; 3];
/// match encode_into_at(0x0102_0304u32, &mut buffer, 0) {
///     Ok(written) => println!("wrote {written} bytes"),
///     Err(Error::BufferOverflow { offset, width, len }) => {
///         eprintln!("{width} bytes at {offset} do not fit into {len}");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Writing the value to the destination buffer would have overflowed it.
    ///
    /// Raised by every buffer-writing encoder before any byte is touched, so the
    /// destination is left exactly as it was.
    ///
    /// # Fields
    ///
    /// * `offset` - Position in the buffer where the write was requested
    /// * `width` - Number of bytes the value occupies
    /// * `len` - Length of the destination buffer
    #[error("Writing {width} byte(s) at offset {offset} would overflow a buffer of {len} byte(s)")]
    BufferOverflow {
        /// Requested start position of the write
        offset: usize,
        /// Byte width of the value being written
        width: usize,
        /// Length of the destination buffer
        len: usize,
    },

    /// An out of bound read was attempted while decoding a value.
    ///
    /// This is the decode-side counterpart of [`Error::BufferOverflow`].
    #[error("Reading {width} byte(s) at offset {offset} would run past a buffer of {len} byte(s)")]
    OutOfBounds {
        /// Requested start position of the read
        offset: usize,
        /// Byte width of the value being read
        width: usize,
        /// Length of the source buffer
        len: usize,
    },
}

impl Error {
    /// Returns the byte width of the value involved in the failed operation.
    #[must_use]
    pub fn width(&self) -> usize {
        match self {
            Error::BufferOverflow { width, .. } | Error::OutOfBounds { width, .. } => *width,
        }
    }

    /// Returns the offset at which the failed operation was requested.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Error::BufferOverflow { offset, .. } | Error::OutOfBounds { offset, .. } => *offset,
        }
    }
}
