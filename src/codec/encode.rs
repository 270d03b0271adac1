//! Integer to byte encoders.
//!
//! Every encoder comes in two shapes: an allocating form returning a fresh `Vec<u8>` of
//! exactly the value's width, and a buffer-writing form that places the bytes into caller
//! memory and reports how many it wrote. The allocating form allocates the vector and fills
//! it through the same routine the buffer-writing form uses once its bounds check passes.

use crate::{
    codec::{CodecOptions, Endian, FixedWidth},
    Result,
};

/// Encodes `value` into a new big-endian vector.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::encode;
///
/// assert_eq!(encode(0x0102_0304u32), vec![0x01, 0x02, 0x03, 0x04]);
/// assert_eq!(encode(0x7Fu8), vec![0x7F]);
/// ```
#[must_use]
pub fn encode<T: FixedWidth>(value: T) -> Vec<u8> {
    encode_ordered(value, Endian::Big)
}

/// Encodes `value` into a new vector in the requested byte order.
///
/// The result always holds exactly [`FixedWidth::WIDTH`] bytes and shares no memory with
/// any other buffer.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::{encode_ordered, Endian};
///
/// assert_eq!(encode_ordered(0xABCDu16, Endian::Big), vec![0xAB, 0xCD]);
/// assert_eq!(encode_ordered(0xABCDu16, Endian::Little), vec![0xCD, 0xAB]);
/// ```
#[must_use]
pub fn encode_ordered<T: FixedWidth>(value: T, endian: Endian) -> Vec<u8> {
    let mut out = vec![0u8; T::WIDTH];
    fill(value, &mut out, endian);
    out
}

/// Writes `value` into `buffer` at `options.offset` in `options.endian` order.
///
/// Exactly [`FixedWidth::WIDTH`] bytes are written and that count is returned, so adding
/// the result to the offset gives the position of the next value.
///
/// # Arguments
///
/// * `value` - The value to write
/// * `buffer` - The mutable byte buffer to write to
/// * `options` - Offset, byte order and bounds policy of the write
///
/// # Errors
///
/// Returns [`crate::Error::BufferOverflow`] if `options.bounds` rejects the range
/// `offset..offset + WIDTH` for this buffer. The check runs before any byte is written, so
/// a failed call leaves `buffer` untouched.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::{encode_into, CodecOptions};
///
/// let mut buffer = [0u8; 6];
/// let mut offset = 0;
///
/// offset += encode_into(0x0102u16, &mut buffer, CodecOptions::new().with_offset(offset))?;
/// offset += encode_into(0x0304_0506u32, &mut buffer, CodecOptions::new().with_offset(offset))?;
///
/// assert_eq!(offset, 6);
/// assert_eq!(buffer, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
/// # Ok::<(), fixwidth::Error>(())
/// ```
pub fn encode_into<T: FixedWidth>(
    value: T,
    buffer: &mut [u8],
    options: CodecOptions,
) -> Result<usize> {
    let CodecOptions {
        offset,
        endian,
        bounds,
    } = options;

    if !bounds.fits(offset, T::WIDTH, buffer.len()) {
        return Err(overflow_error!(offset, T::WIDTH, buffer.len()));
    }

    fill(value, &mut buffer[offset..offset + T::WIDTH], endian);
    Ok(T::WIDTH)
}

/// Writes `value` big-endian into `buffer` at `offset`.
///
/// # Errors
///
/// Returns [`crate::Error::BufferOverflow`] if `offset + WIDTH` exceeds the buffer length.
pub fn encode_into_at<T: FixedWidth>(value: T, buffer: &mut [u8], offset: usize) -> Result<usize> {
    encode_into(value, buffer, CodecOptions::new().with_offset(offset))
}

/// Writes `value` into `buffer` at `offset` in the requested byte order.
///
/// # Errors
///
/// Returns [`crate::Error::BufferOverflow`] if `offset + WIDTH` exceeds the buffer length.
pub fn encode_into_ordered<T: FixedWidth>(
    value: T,
    buffer: &mut [u8],
    offset: usize,
    endian: Endian,
) -> Result<usize> {
    encode_into(
        value,
        buffer,
        CodecOptions::new().with_offset(offset).with_endian(endian),
    )
}

// `out` is exactly T::WIDTH long.
#[allow(clippy::cast_possible_truncation)]
fn fill<T: FixedWidth>(value: T, out: &mut [u8], endian: Endian) {
    let raw = value.widen();
    for (index, byte) in out.iter_mut().enumerate() {
        *byte = ((raw >> endian.shift(index, T::WIDTH)) & 0xFF) as u8;
    }
}
