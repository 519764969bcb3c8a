//! Entities Layer: Digit Tables
//!
//! Pure, process-lifetime constant data consumed by the integer formatting
//! layer: the radix digit alphabet, its inverse character mapping, and the
//! precomputed decimal pair tables.
//! No behavior beyond table lookups; no dependencies (dependencies flow inward).

pub mod alphabet;
pub mod decimal_pairs;

pub use alphabet::{digit_value, DIGITS, MAX_RADIX, MIN_RADIX};
pub use decimal_pairs::{MOD_10_TABLE, ONES, TENS};
