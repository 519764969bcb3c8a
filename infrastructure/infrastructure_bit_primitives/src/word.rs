//! Machine Word Abstraction
//!
//! One trait per supported word width, carrying the width and the magic
//! mask tables the generic bit algorithms consume. Two's-complement
//! asymmetry is part of the contract: for every implementor,
//! `MIN = -(MAX + 1)` and negating `MIN` wraps back to `MIN`, which is why
//! the trait insists on the wrapping arithmetic ops rather than the
//! checked ones.

use num_traits::{PrimInt, WrappingAdd, WrappingNeg, WrappingSub};

/// A fixed-width two's-complement machine word.
///
/// `PrimInt` contributes the shift split the algorithms rely on:
/// `signed_shr` is the arithmetic right shift and `unsigned_shr` the
/// logical one, both well-defined on the signed representation.
pub trait MachineWord: PrimInt + WrappingAdd + WrappingSub + WrappingNeg + 'static {
    /// Bit width of the word.
    const WIDTH: u32;

    /// Alternating single-bit mask `0b0101…` (`0x5555…`).
    const ODD_BITS: Self;

    /// Alternating two-bit-group mask (`0x3333…`).
    const ODD_PAIRS: Self;

    /// Alternating nibble mask (`0x0f0f…`).
    const ODD_NIBBLES: Self;

    /// Mask isolating a population count (fits in the low byte).
    const COUNT_MASK: Self;

    /// Byte-order reversal stages: `(shift, mask)` group swaps from byte
    /// granularity up to the word's half, applied in order as
    /// `((v >>> shift) & mask) | ((v & mask) << shift)`.
    const BYTE_SWAP_STAGES: &'static [(u32, Self)];
}

impl MachineWord for i32 {
    const WIDTH: u32 = 32;
    const ODD_BITS: i32 = 0x5555_5555;
    const ODD_PAIRS: i32 = 0x3333_3333;
    const ODD_NIBBLES: i32 = 0x0f0f_0f0f;
    const COUNT_MASK: i32 = 0x3f;
    const BYTE_SWAP_STAGES: &'static [(u32, i32)] =
        &[(8, 0x00ff_00ff), (16, 0x0000_ffff)];
}

impl MachineWord for i64 {
    const WIDTH: u32 = 64;
    const ODD_BITS: i64 = 0x5555_5555_5555_5555;
    const ODD_PAIRS: i64 = 0x3333_3333_3333_3333;
    const ODD_NIBBLES: i64 = 0x0f0f_0f0f_0f0f_0f0f;
    const COUNT_MASK: i64 = 0x7f;
    const BYTE_SWAP_STAGES: &'static [(u32, i64)] = &[
        (8, 0x00ff_00ff_00ff_00ff),
        (16, 0x0000_ffff_0000_ffff),
        (32, 0x0000_0000_ffff_ffff),
    ];
}
