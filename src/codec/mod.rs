//! Endian-aware, bounds-checked conversion between fixed-width unsigned integers and bytes.
//!
//! This module provides the complete integer codec of the crate. Values of type `u8`, `u16`,
//! `u32` and `u64` are laid out byte by byte in big-endian or little-endian order, either into
//! a freshly allocated vector or into a caller-owned buffer at a given offset. Decoding is the
//! exact mirror of encoding.
//!
//! # Architecture
//!
//! The module is built around the [`crate::codec::FixedWidth`] trait, which only tells the codec
//! how wide a type is and how to widen it to / narrow it from `u64`. All byte placement is done
//! by one generic routine driven by [`crate::codec::Endian::shift`]:
//!
//! - Big-endian position `k` of a `W`-byte value holds `(value >> 8·(W−1−k)) & 0xFF`
//! - Little-endian position `k` holds `(value >> 8·k) & 0xFF`
//!
//! # Key Components
//!
//! ## Allocating Encoders
//! - [`crate::codec::encode`] - Encode into a new big-endian `Vec<u8>`
//! - [`crate::codec::encode_ordered`] - Encode into a new `Vec<u8>` in a chosen byte order
//!
//! ## Buffer-Writing Encoders
//! - [`crate::codec::encode_into`] - Write into a buffer as described by [`CodecOptions`]
//! - [`crate::codec::encode_into_at`] - Write big-endian at an offset
//! - [`crate::codec::encode_into_ordered`] - Write at an offset in a chosen byte order
//!
//! ## Decoders
//! - [`crate::codec::decode`] - Read from the start of a slice
//! - [`crate::codec::decode_from`] - Read as described by [`CodecOptions`]
//! - [`crate::codec::decode_at`] - Read at an offset and advance it
//!
//! # Usage Examples
//!
//! ## Allocating Encode
//!
//! ```rust
//! use fixwidth::codec::{encode, encode_ordered, Endian};
//!
//! assert_eq!(encode(0x0102_0304u32), vec![0x01, 0x02, 0x03, 0x04]);
//! assert_eq!(encode_ordered(0x0102_0304u32, Endian::Little), vec![0x04, 0x03, 0x02, 0x01]);
//! ```
//!
//! ## Sequential Writes
//!
//! ```rust
//! use fixwidth::codec::{encode_into_ordered, Endian};
//!
//! let mut data = [0u8; 7];
//! let mut offset = 0;
//!
//! offset += encode_into_ordered(0x01u8, &mut data, offset, Endian::Big)?;
//! offset += encode_into_ordered(0x0302u16, &mut data, offset, Endian::Little)?;
//! offset += encode_into_ordered(0x0405_0607u32, &mut data, offset, Endian::Big)?;
//!
//! assert_eq!(offset, 7);
//! assert_eq!(data, [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07]);
//! # Ok::<(), fixwidth::Error>(())
//! ```
//!
//! ## Round Trip
//!
//! ```rust
//! use fixwidth::codec::{decode, encode_ordered, Endian};
//!
//! let bytes = encode_ordered(0xDEAD_BEEFu32, Endian::Little);
//! let value: u32 = decode(&bytes, Endian::Little)?;
//! assert_eq!(value, 0xDEAD_BEEF);
//! # Ok::<(), fixwidth::Error>(())
//! ```
//!
//! # Error Handling
//!
//! Buffer-writing encoders return [`crate::Error::BufferOverflow`] and decoders return
//! [`crate::Error::OutOfBounds`] when the requested range does not fit. The check always runs
//! before the buffer is touched. Allocating encoders cannot fail.
//!
//! By default a range may end exactly at the last byte of the buffer. The
//! [`BoundsPolicy::Strict`] policy rejects that case as well, for writes only.
//!
//! # Thread Safety
//!
//! All functions in this module are pure and keep no state. They may be called concurrently
//! from any number of threads; writes into overlapping regions of one buffer are the caller's
//! to serialise, which the borrow checker already enforces for safe code.

mod decode;
mod encode;
mod endian;
mod options;
mod width;

pub use decode::{decode, decode_at, decode_from};
pub use encode::{encode, encode_into, encode_into_at, encode_into_ordered, encode_ordered};
pub use endian::Endian;
pub use options::{BoundsPolicy, CodecOptions};
pub use width::FixedWidth;
