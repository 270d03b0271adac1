/// Helper macro for building a [`crate::Error::BufferOverflow`], logging the rejection
///
/// ```rust, ignore
///  return Err(overflow_error!(offset, T::WIDTH, buffer.len()));
/// ```
macro_rules! overflow_error {
    ($offset:expr, $width:expr, $len:expr) => {{
        let (offset, width, len): (usize, usize, usize) = ($offset, $width, $len);
        log::debug!("rejected {width} byte write at offset {offset} into {len} byte buffer");
        crate::Error::BufferOverflow { offset, width, len }
    }};
}

/// Helper macro for building a [`crate::Error::OutOfBounds`], logging the rejection
///
/// ```rust, ignore
///  return Err(out_of_bounds_error!(offset, T::WIDTH, data.len()));
/// ```
macro_rules! out_of_bounds_error {
    ($offset:expr, $width:expr, $len:expr) => {{
        let (offset, width, len): (usize, usize, usize) = ($offset, $width, $len);
        log::debug!("rejected {width} byte read at offset {offset} from {len} byte buffer");
        crate::Error::OutOfBounds { offset, width, len }
    }};
}

/// Implements [`crate::codec::FixedWidth`] for a list of unsigned integer types
///
/// ```rust, ignore
///  impl_fixed_width!(u8, u16, u32, u64);
/// ```
macro_rules! impl_fixed_width {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl crate::codec::width::sealed::Sealed for $ty {}

            impl crate::codec::FixedWidth for $ty {
                const WIDTH: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn widen(self) -> u64 {
                    u64::from(self)
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn narrow(raw: u64) -> Self {
                    raw as $ty
                }
            }
        )+
    };
}
