//! The [`FixedWidth`] trait and its implementations for the unsigned integer types.

use crate::{
    codec::{decode, encode, CodecOptions, Endian},
    Result,
};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Trait for unsigned integers with a fixed byte width that can be laid out byte by byte.
///
/// The trait is implemented for `u8`, `u16`, `u32` and `u64` and cannot be implemented
/// outside this crate. Each implementation only supplies its width and the lossless
/// conversion to and from `u64`; the byte layout itself is computed once, generically, by the
/// functions in [`crate::codec`]. The provided methods are thin forwards to those functions so
/// values can be encoded in method position.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::{Endian, FixedWidth};
///
/// assert_eq!(u16::WIDTH, 2);
/// assert_eq!(0xABCDu16.encode(), vec![0xAB, 0xCD]);
/// assert_eq!(0xABCDu16.encode_ordered(Endian::Little), vec![0xCD, 0xAB]);
///
/// let value = u16::decode(&[0xAB, 0xCD], Endian::Big)?;
/// assert_eq!(value, 0xABCD);
/// # Ok::<(), fixwidth::Error>(())
/// ```
///
/// # Thread Safety
///
/// All implementors are plain `Copy` integers, so every operation is safe to call from any
/// number of threads at once.
pub trait FixedWidth: sealed::Sealed + Copy + Send + Sync + 'static {
    /// Number of bytes the value occupies when encoded.
    const WIDTH: usize;

    /// Zero-extends the value to 64 bits.
    fn widen(self) -> u64;

    /// Keeps the low `WIDTH` bytes of `raw`.
    fn narrow(raw: u64) -> Self;

    /// Encodes the value into a new big-endian vector of [`FixedWidth::WIDTH`] bytes.
    #[must_use]
    fn encode(self) -> Vec<u8> {
        encode::encode(self)
    }

    /// Encodes the value into a new vector of [`FixedWidth::WIDTH`] bytes in `endian` order.
    #[must_use]
    fn encode_ordered(self, endian: Endian) -> Vec<u8> {
        encode::encode_ordered(self, endian)
    }

    /// Writes the value into `buffer` as described by `options`, returning the bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::BufferOverflow`] if the value does not fit at the requested
    /// offset. The buffer is not modified in that case.
    fn encode_into(self, buffer: &mut [u8], options: CodecOptions) -> Result<usize> {
        encode::encode_into(self, buffer, options)
    }

    /// Reads a value from the start of `bytes`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if `bytes` is shorter than the width.
    fn decode(bytes: &[u8], endian: Endian) -> Result<Self> {
        decode::decode(bytes, endian)
    }

    /// Reads a value from `buffer` as described by `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the value would extend past the buffer.
    fn decode_from(buffer: &[u8], options: CodecOptions) -> Result<Self> {
        decode::decode_from(buffer, options)
    }
}

impl_fixed_width!(u8, u16, u32, u64);
