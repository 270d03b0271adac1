//! Byte order selection and the per-position shift table.
//!
//! [`Endian`] decides which end of an integer lands at the lowest buffer index. The encoders
//! and decoders never branch on the order themselves; they ask [`Endian::shift`] for the bit
//! offset of each byte position, which keeps a single code path for every width.

use strum::{Display, EnumIter, EnumString};

/// Byte order used when laying out a multi-byte integer.
///
/// Defaults to [`Endian::Big`]. Single-byte values are identical in both orders.
///
/// Parses from `"big"`/`"be"` and `"little"`/`"le"` (case-insensitive) and displays as
/// `"big"` or `"little"`.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::Endian;
///
/// assert_eq!(Endian::default(), Endian::Big);
/// assert_eq!("le".parse::<Endian>().unwrap(), Endian::Little);
/// assert_eq!(Endian::from(true), Endian::Big);
/// assert_eq!(Endian::Little.to_string(), "little");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum Endian {
    /// Most significant byte first
    #[default]
    #[strum(to_string = "big", serialize = "be")]
    Big,
    /// Least significant byte first
    #[strum(to_string = "little", serialize = "le")]
    Little,
}

impl Endian {
    /// Byte order of the host this crate was compiled for.
    #[cfg(target_endian = "big")]
    pub const NATIVE: Endian = Endian::Big;
    /// Byte order of the host this crate was compiled for.
    #[cfg(target_endian = "little")]
    pub const NATIVE: Endian = Endian::Little;

    /// Returns `true` for [`Endian::Big`].
    #[must_use]
    pub const fn is_big(self) -> bool {
        matches!(self, Endian::Big)
    }

    /// Returns the opposite byte order.
    #[must_use]
    pub const fn swapped(self) -> Endian {
        match self {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }

    /// Bit shift that selects the byte stored at `index` of a `width`-byte value.
    ///
    /// Big-endian position `k` holds bits `8·(W−1−k)..`, little-endian position `k` holds
    /// bits `8·k..`. `index` must be below `width`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fixwidth::codec::Endian;
    ///
    /// assert_eq!(Endian::Big.shift(0, 4), 24);
    /// assert_eq!(Endian::Little.shift(0, 4), 0);
    /// assert_eq!(Endian::Big.shift(0, 1), Endian::Little.shift(0, 1));
    /// ```
    #[must_use]
    #[inline]
    #[allow(clippy::cast_possible_truncation)] // width <= 8, so the shift is at most 56
    pub const fn shift(self, index: usize, width: usize) -> u32 {
        debug_assert!(index < width);
        let position = match self {
            Endian::Big => width - 1 - index,
            Endian::Little => index,
        };
        (position * 8) as u32
    }
}

impl From<bool> for Endian {
    /// Maps a "big endian?" flag onto a byte order.
    fn from(big_endian: bool) -> Self {
        if big_endian {
            Endian::Big
        } else {
            Endian::Little
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn default_is_big() {
        assert_eq!(Endian::default(), Endian::Big);
        assert!(Endian::default().is_big());
    }

    #[test]
    fn from_bool() {
        assert_eq!(Endian::from(true), Endian::Big);
        assert_eq!(Endian::from(false), Endian::Little);
    }

    #[test]
    fn swapped() {
        assert_eq!(Endian::Big.swapped(), Endian::Little);
        assert_eq!(Endian::Little.swapped(), Endian::Big);
    }

    #[test]
    fn shift_table_u32() {
        let big: Vec<u32> = (0..4).map(|k| Endian::Big.shift(k, 4)).collect();
        let little: Vec<u32> = (0..4).map(|k| Endian::Little.shift(k, 4)).collect();
        assert_eq!(big, [24, 16, 8, 0]);
        assert_eq!(little, [0, 8, 16, 24]);
    }

    #[test]
    fn shift_table_u64() {
        assert_eq!(Endian::Big.shift(0, 8), 56);
        assert_eq!(Endian::Big.shift(7, 8), 0);
        assert_eq!(Endian::Little.shift(7, 8), 56);
    }

    #[test]
    fn single_byte_has_no_order() {
        for endian in Endian::iter() {
            assert_eq!(endian.shift(0, 1), 0);
        }
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("big".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!("BE".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!("Little".parse::<Endian>().unwrap(), Endian::Little);
        assert_eq!("le".parse::<Endian>().unwrap(), Endian::Little);
        assert!("middle".parse::<Endian>().is_err());

        assert_eq!(Endian::Big.to_string(), "big");
        assert_eq!(Endian::Little.to_string(), "little");
    }

    #[test]
    fn native_matches_host() {
        let probe = 1u16.to_ne_bytes();
        let expected = if probe[0] == 1 {
            Endian::Little
        } else {
            Endian::Big
        };
        assert_eq!(Endian::NATIVE, expected);
    }
}
