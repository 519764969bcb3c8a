//! Bit Primitive Facades
//!
//! The single-word bit operations exposed as free functions, generic over
//! both supported widths.

use infrastructure_bit_primitives::{BitUtils, MachineWord};

/// The most-significant set bit of `v`, or 0 for 0.
pub fn highest_one_bit<W: MachineWord>(v: W) -> W {
    BitUtils::highest_one_bit(v)
}

/// The least-significant set bit of `v`, or 0 for 0.
pub fn lowest_one_bit<W: MachineWord>(v: W) -> W {
    BitUtils::lowest_one_bit(v)
}

/// Zero bits above the highest set bit; the full width for 0.
pub fn number_of_leading_zeros<W: MachineWord>(v: W) -> u32 {
    BitUtils::number_of_leading_zeros(v)
}

/// Zero bits below the lowest set bit; the full width for 0.
pub fn number_of_trailing_zeros<W: MachineWord>(v: W) -> u32 {
    BitUtils::number_of_trailing_zeros(v)
}

/// The number of set bits in `v`.
pub fn bit_count<W: MachineWord>(v: W) -> u32 {
    BitUtils::bit_count(v)
}

/// `v` rotated left by `distance` bits (modulo the width; negative
/// distances rotate right).
pub fn rotate_left<W: MachineWord>(v: W, distance: i32) -> W {
    BitUtils::rotate_left(v, distance)
}

/// `v` rotated right by `distance` bits (modulo the width; negative
/// distances rotate left).
pub fn rotate_right<W: MachineWord>(v: W, distance: i32) -> W {
    BitUtils::rotate_right(v, distance)
}

/// `v` with its bit order reversed.
pub fn reverse<W: MachineWord>(v: W) -> W {
    BitUtils::reverse(v)
}

/// `v` with its byte order reversed.
pub fn reverse_bytes<W: MachineWord>(v: W) -> W {
    BitUtils::reverse_bytes(v)
}

/// −1, 0 or 1 as `v` is negative, zero or positive.
pub fn signum<W: MachineWord>(v: W) -> i32 {
    BitUtils::signum(v)
}
