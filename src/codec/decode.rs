//! Byte to integer decoders, the mirror image of [`crate::codec::encode`].

use crate::{
    codec::{BoundsPolicy, CodecOptions, Endian, FixedWidth},
    Result,
};

/// Reads a value of type `T` from the start of `bytes`.
///
/// Bytes beyond the first [`FixedWidth::WIDTH`] are ignored.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `bytes` holds fewer than `WIDTH` bytes.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::{decode, Endian};
///
/// let value: u32 = decode(&[0x01, 0x02, 0x03, 0x04], Endian::Big)?;
/// assert_eq!(value, 0x0102_0304);
///
/// let value: u32 = decode(&[0x01, 0x02, 0x03, 0x04], Endian::Little)?;
/// assert_eq!(value, 0x0403_0201);
/// # Ok::<(), fixwidth::Error>(())
/// ```
pub fn decode<T: FixedWidth>(bytes: &[u8], endian: Endian) -> Result<T> {
    decode_from(bytes, CodecOptions::from(endian))
}

/// Reads a value of type `T` from `buffer` at `options.offset` in `options.endian` order.
///
/// `options.bounds` is ignored; reads are always checked with [`BoundsPolicy::Exact`].
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + WIDTH` exceeds the buffer length.
pub fn decode_from<T: FixedWidth>(buffer: &[u8], options: CodecOptions) -> Result<T> {
    let CodecOptions { offset, endian, .. } = options;

    if !BoundsPolicy::Exact.fits(offset, T::WIDTH, buffer.len()) {
        return Err(out_of_bounds_error!(offset, T::WIDTH, buffer.len()));
    }

    let raw = buffer[offset..offset + T::WIDTH]
        .iter()
        .enumerate()
        .fold(0_u64, |acc, (index, byte)| {
            acc | (u64::from(*byte) << endian.shift(index, T::WIDTH))
        });

    Ok(T::narrow(raw))
}

/// Reads a value of type `T` at `offset` and advances `offset` past it.
///
/// On failure `offset` is left unchanged.
///
/// # Errors
///
/// Returns [`crate::Error::OutOfBounds`] if `offset + WIDTH` exceeds the buffer length.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::{decode_at, Endian};
///
/// let data = [0x00, 0x01, 0x02, 0x00, 0x00, 0x00];
/// let mut offset = 0;
///
/// let first: u16 = decode_at(&data, &mut offset, Endian::Big)?;
/// let second: u32 = decode_at(&data, &mut offset, Endian::Little)?;
///
/// assert_eq!(first, 1);
/// assert_eq!(second, 2);
/// assert_eq!(offset, 6);
/// # Ok::<(), fixwidth::Error>(())
/// ```
pub fn decode_at<T: FixedWidth>(buffer: &[u8], offset: &mut usize, endian: Endian) -> Result<T> {
    let value = decode_from(
        buffer,
        CodecOptions::new().with_offset(*offset).with_endian(endian),
    )?;
    *offset += T::WIDTH;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const TEST_BUFFER: [u8; 8] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    #[test]
    fn decode_be() {
        assert_eq!(decode::<u8>(&TEST_BUFFER, Endian::Big).unwrap(), 0x01);
        assert_eq!(decode::<u16>(&TEST_BUFFER, Endian::Big).unwrap(), 0x0102);
        assert_eq!(decode::<u32>(&TEST_BUFFER, Endian::Big).unwrap(), 0x0102_0304);
        assert_eq!(
            decode::<u64>(&TEST_BUFFER, Endian::Big).unwrap(),
            0x0102_0304_0506_0708
        );
    }

    #[test]
    fn decode_le() {
        assert_eq!(decode::<u8>(&TEST_BUFFER, Endian::Little).unwrap(), 0x01);
        assert_eq!(decode::<u16>(&TEST_BUFFER, Endian::Little).unwrap(), 0x0201);
        assert_eq!(
            decode::<u32>(&TEST_BUFFER, Endian::Little).unwrap(),
            0x0403_0201
        );
        assert_eq!(
            decode::<u64>(&TEST_BUFFER, Endian::Little).unwrap(),
            0x0807_0605_0403_0201
        );
    }

    #[test]
    fn decode_from_offset() {
        let options = CodecOptions::new().with_offset(2);
        assert_eq!(decode_from::<u16>(&TEST_BUFFER, options).unwrap(), 0x0304);
        assert_eq!(
            decode_from::<u16>(&TEST_BUFFER, options.little_endian()).unwrap(),
            0x0403
        );
    }

    #[test]
    fn decode_to_end() {
        let options = CodecOptions::new().with_offset(4);
        assert_eq!(decode_from::<u32>(&TEST_BUFFER, options).unwrap(), 0x0506_0708);
    }

    #[test]
    fn decode_ignores_strict_policy() {
        let options = CodecOptions::new()
            .with_offset(4)
            .with_bounds(BoundsPolicy::Strict);
        assert!(decode_from::<u32>(&TEST_BUFFER, options).is_ok());
    }

    #[test]
    fn decode_at_sequential() {
        let mut offset = 0;
        let a: u16 = decode_at(&TEST_BUFFER, &mut offset, Endian::Big).unwrap();
        let b: u8 = decode_at(&TEST_BUFFER, &mut offset, Endian::Big).unwrap();
        let c: u32 = decode_at(&TEST_BUFFER, &mut offset, Endian::Little).unwrap();

        assert_eq!(a, 0x0102);
        assert_eq!(b, 0x03);
        assert_eq!(c, 0x0706_0504);
        assert_eq!(offset, 7);
    }

    #[test]
    fn errors() {
        let buffer = [0xFF, 0xFF, 0xFF, 0xFF];

        let result = decode::<u64>(&buffer, Endian::Big);
        assert_eq!(
            result,
            Err(Error::OutOfBounds {
                offset: 0,
                width: 8,
                len: 4
            })
        );

        let result = decode_from::<u16>(&buffer, CodecOptions::new().with_offset(3));
        assert!(matches!(result, Err(Error::OutOfBounds { offset: 3, .. })));

        let result = decode::<u8>(&[], Endian::Little);
        assert!(matches!(result, Err(Error::OutOfBounds { len: 0, .. })));
    }

    #[test]
    fn failed_decode_at_keeps_offset() {
        let mut offset = 6;
        let result = decode_at::<u32>(&TEST_BUFFER, &mut offset, Endian::Big);
        assert!(result.is_err());
        assert_eq!(offset, 6);
    }
}
