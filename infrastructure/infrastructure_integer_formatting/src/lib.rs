//! Infrastructure Layer: Integer Formatting
//!
//! Converts 32- and 64-bit two's-complement integers to textual digit
//! sequences: a reciprocal-multiplication decimal fast path, a general
//! formatter for every radix in 2..=36, unsigned bit-pattern rendering at
//! the power-of-two radices, and a memoized cache for hot small values.
//! Depends on the Entities digit tables and the bit-primitives layer only
//! (dependencies flow inward).
//!
//! Every lenient entry point is total: an out-of-range radix silently
//! becomes 10, and every machine-width bit pattern is a legal input. The
//! strict `try_` companions reject bad radices instead.

pub mod decimal;
pub mod radix;
pub mod small_cache;
pub mod unsigned;

pub use decimal::DecimalFormatter;
pub use radix::{RadixError, RadixFormatter};
pub use small_cache::SmallValueCache;
pub use unsigned::UnsignedFormatter;

/// Builds an owned string from digit-buffer bytes, all of which come from
/// the digit tables (or are the sign character) and are therefore ASCII.
#[inline]
pub(crate) fn ascii_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
