//! Per-call configuration for the buffer-based encoders and decoders.

use strum::{Display, EnumIter, EnumString};

use crate::codec::Endian;

/// Rule deciding whether a write range that ends exactly at the buffer end is accepted.
///
/// [`BoundsPolicy::Exact`] is the default and accepts any range with
/// `offset + width <= len`. [`BoundsPolicy::Strict`] additionally rejects a range that ends
/// on the final byte, i.e. it requires `offset + width < len`. It exists for byte layouts
/// produced by tools that always kept one spare byte behind every write.
///
/// Reads always use [`BoundsPolicy::Exact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BoundsPolicy {
    /// Accept ranges with `offset + width <= len`
    #[default]
    Exact,
    /// Accept ranges with `offset + width < len`
    Strict,
}

impl BoundsPolicy {
    /// Returns `true` if `width` bytes starting at `offset` are acceptable inside `len` bytes.
    ///
    /// An `offset` so large that `offset + width` overflows `usize` is never acceptable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixwidth::codec::BoundsPolicy;
    ///
    /// assert!(BoundsPolicy::Exact.fits(4, 4, 8));
    /// assert!(!BoundsPolicy::Strict.fits(4, 4, 8));
    /// assert!(!BoundsPolicy::Exact.fits(usize::MAX, 2, 8));
    /// ```
    #[must_use]
    #[inline]
    pub fn fits(self, offset: usize, width: usize, len: usize) -> bool {
        match (self, offset.checked_add(width)) {
            (_, None) => false,
            (BoundsPolicy::Exact, Some(end)) => end <= len,
            (BoundsPolicy::Strict, Some(end)) => end < len,
        }
    }
}

/// Options controlling where and how a value is placed in a caller buffer.
///
/// The defaults are offset `0`, [`Endian::Big`] and [`BoundsPolicy::Exact`].
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::{encode_into, CodecOptions, Endian};
///
/// let mut buffer = [0u8; 6];
/// let options = CodecOptions::new().with_offset(2).little_endian();
/// let written = encode_into(0x0102_0304u32, &mut buffer, options)?;
///
/// assert_eq!(written, 4);
/// assert_eq!(buffer, [0x00, 0x00, 0x04, 0x03, 0x02, 0x01]);
/// assert_eq!(options.endian, Endian::Little);
/// # Ok::<(), fixwidth::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CodecOptions {
    /// Position of the first byte to write or read
    pub offset: usize,
    /// Byte order of multi-byte values
    pub endian: Endian,
    /// Bounds rule applied to writes
    pub bounds: BoundsPolicy,
}

impl CodecOptions {
    /// Creates options at offset `0`, big-endian, with exact bounds checking.
    #[must_use]
    pub const fn new() -> Self {
        CodecOptions {
            offset: 0,
            endian: Endian::Big,
            bounds: BoundsPolicy::Exact,
        }
    }

    /// Sets the start offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the byte order.
    #[must_use]
    pub const fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Switches to big-endian order.
    #[must_use]
    pub const fn big_endian(self) -> Self {
        self.with_endian(Endian::Big)
    }

    /// Switches to little-endian order.
    #[must_use]
    pub const fn little_endian(self) -> Self {
        self.with_endian(Endian::Little)
    }

    /// Sets the bounds policy applied to writes.
    #[must_use]
    pub const fn with_bounds(mut self, bounds: BoundsPolicy) -> Self {
        self.bounds = bounds;
        self
    }
}

impl From<Endian> for CodecOptions {
    fn from(endian: Endian) -> Self {
        CodecOptions::new().with_endian(endian)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = CodecOptions::default();
        assert_eq!(options, CodecOptions::new());
        assert_eq!(options.offset, 0);
        assert_eq!(options.endian, Endian::Big);
        assert_eq!(options.bounds, BoundsPolicy::Exact);
    }

    #[test]
    fn builder_chain() {
        let options = CodecOptions::new()
            .with_offset(12)
            .little_endian()
            .with_bounds(BoundsPolicy::Strict);
        assert_eq!(options.offset, 12);
        assert_eq!(options.endian, Endian::Little);
        assert_eq!(options.bounds, BoundsPolicy::Strict);

        let options = options.big_endian();
        assert_eq!(options.endian, Endian::Big);
    }

    #[test]
    fn from_endian() {
        let options = CodecOptions::from(Endian::Little);
        assert_eq!(options.endian, Endian::Little);
        assert_eq!(options.offset, 0);
    }

    #[test]
    fn exact_fits() {
        assert!(BoundsPolicy::Exact.fits(0, 4, 4));
        assert!(BoundsPolicy::Exact.fits(2, 2, 4));
        assert!(!BoundsPolicy::Exact.fits(3, 2, 4));
        assert!(!BoundsPolicy::Exact.fits(0, 1, 0));
    }

    #[test]
    fn strict_fits() {
        assert!(!BoundsPolicy::Strict.fits(0, 4, 4));
        assert!(BoundsPolicy::Strict.fits(0, 4, 5));
        assert!(!BoundsPolicy::Strict.fits(0, 1, 1));
        assert!(BoundsPolicy::Strict.fits(0, 1, 2));
    }

    #[test]
    fn offset_overflow_never_fits() {
        assert!(!BoundsPolicy::Exact.fits(usize::MAX, 1, usize::MAX));
        assert!(!BoundsPolicy::Strict.fits(usize::MAX - 1, 8, usize::MAX));
    }

    #[test]
    fn policy_names() {
        assert_eq!(BoundsPolicy::Exact.to_string(), "exact");
        assert_eq!("STRICT".parse::<BoundsPolicy>().unwrap(), BoundsPolicy::Strict);
    }
}
