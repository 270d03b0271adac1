//! # fixwidth Prelude
//!
//! This module provides a convenient prelude for the most commonly used types, traits and
//! functions of the fixwidth library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all fixwidth operations
pub use crate::Error;

/// The result type used throughout fixwidth
pub use crate::Result;

// ================================================================================================
// Configuration
// ================================================================================================

/// Byte order, per-call options and the bounds rule for writes
pub use crate::codec::{BoundsPolicy, CodecOptions, Endian};

// ================================================================================================
// Codec
// ================================================================================================

/// The integer trait with method forms of every operation
pub use crate::codec::FixedWidth;

/// Allocating and buffer-writing encoders
pub use crate::codec::{encode, encode_into, encode_into_at, encode_into_ordered, encode_ordered};

/// Decoders
pub use crate::codec::{decode, decode_at, decode_from};
