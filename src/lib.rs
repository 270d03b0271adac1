// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # fixwidth
//!
//! Endian-aware, bounds-checked encoding of fixed-width unsigned integers (`u8`, `u16`, `u32`,
//! `u64`) to and from bytes. `fixwidth` is the low-level primitive binary protocol and file
//! format code builds on when it needs a deterministic byte layout and control over where the
//! bytes end up.
//!
//! ## Features
//!
//! - **Every width, one contract** - Each encoder exists as an allocating variant and as a
//!   variant writing into caller memory at an offset
//! - **Explicit byte order** - Big-endian by default, little-endian on request
//! - **No partial writes** - Bounds are checked before a single byte is touched
//! - **Symmetric decoding** - Every layout can be read back
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! fixwidth = "0.1"
//! ```
//!
//! ### Using the Prelude
//!
//! ```rust
//! use fixwidth::prelude::*;
//!
//! let bytes = 0x0102_0304u32.encode();
//! assert_eq!(bytes, [0x01, 0x02, 0x03, 0x04]);
//!
//! let mut buffer = [0u8; 8];
//! let written = 0xABCDu16.encode_into(&mut buffer, CodecOptions::new().with_offset(6))?;
//! assert_eq!(written, 2);
//! assert_eq!(&buffer[6..], &[0xAB, 0xCD]);
//!
//! let value = u16::decode_from(&buffer, CodecOptions::new().with_offset(6))?;
//! assert_eq!(value, 0xABCD);
//! # Ok::<(), fixwidth::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`prelude`] - Convenient re-exports of commonly used types and traits
//! - [`codec`] - The encoders, decoders, byte order and option types
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Writing past the end of a buffer is reported as [`Error::BufferOverflow`], reading past it
//! as [`Error::OutOfBounds`]. Both signal a bug in the caller's offset arithmetic:
//!
//! ```rust
//! use fixwidth::{codec::encode_into_at, Error};
//!
//! let mut buffer = [0u8; 4];
//! match encode_into_at(1u64, &mut buffer, 0) {
//!     Ok(_) => unreachable!(),
//!     Err(Error::BufferOverflow { width, len, .. }) => assert_eq!((width, len), (8, 4)),
//!     Err(e) => panic!("{e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! Rejected reads and writes are reported on the `log` facade at debug level. The library never
//! installs a logger itself.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//! cargo +nightly fuzz run codec --release
//! ```
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use fixwidth::prelude::*;
///
/// let bytes = encode_ordered(0x7Fu8, Endian::Little);
/// assert_eq!(bytes, [0x7F]);
/// ```
pub mod prelude;

/// Fixed-width integer encoding and decoding
///
/// See the module documentation for the byte layout rules and the full list of operations.
///
/// # Examples
///
/// ```rust
/// use fixwidth::codec::{encode_ordered, Endian};
///
/// assert_eq!(
///     encode_ordered(0x0102_0304_0506_0708u64, Endian::Big),
///     [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]
/// );
/// ```
pub mod codec;

/// `fixwidth` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `fixwidth` Error type
///
/// The error type for every fallible operation in this crate.
///
/// # Examples
///
/// ```rust
/// use fixwidth::{codec::{decode, Endian}, Error};
///
/// let short = [0x01, 0x02];
/// assert!(matches!(decode::<u32>(&short, Endian::Big), Err(Error::OutOfBounds { .. })));
/// ```
pub use error::Error;

pub use codec::{BoundsPolicy, CodecOptions, Endian, FixedWidth};
