//! Decimal Pair Tables
//!
//! Precomputed digit characters for every value 0..=99, letting the decimal
//! formatter emit two digits from one table lookup instead of two
//! divide/modulo operations, plus the sixteen-entry remainder table used to
//! compute a value mod 10 without dividing.

/// `TENS[i]` is the tens digit character of `i`, `0 <= i <= 99`.
pub const TENS: [u8; 100] = [
    b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0', b'0',
    b'1', b'1', b'1', b'1', b'1', b'1', b'1', b'1', b'1', b'1',
    b'2', b'2', b'2', b'2', b'2', b'2', b'2', b'2', b'2', b'2',
    b'3', b'3', b'3', b'3', b'3', b'3', b'3', b'3', b'3', b'3',
    b'4', b'4', b'4', b'4', b'4', b'4', b'4', b'4', b'4', b'4',
    b'5', b'5', b'5', b'5', b'5', b'5', b'5', b'5', b'5', b'5',
    b'6', b'6', b'6', b'6', b'6', b'6', b'6', b'6', b'6', b'6',
    b'7', b'7', b'7', b'7', b'7', b'7', b'7', b'7', b'7', b'7',
    b'8', b'8', b'8', b'8', b'8', b'8', b'8', b'8', b'8', b'8',
    b'9', b'9', b'9', b'9', b'9', b'9', b'9', b'9', b'9', b'9',
];

/// `ONES[i]` is the ones digit character of `i`, `0 <= i <= 99`.
pub const ONES: [u8; 100] = [
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
    b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9',
];

/// Remainder table for mod-10 computation without division, per the online
/// addendum to Hank Warren's "Hacker's Delight" (divcMore, 10-21). Indexed
/// by the top four bits of `0x19999999 * n + (n >> 1) + (n >> 3)`.
pub const MOD_10_TABLE: [u8; 16] = [0, 1, 2, 2, 3, 3, 4, 5, 5, 6, 7, 7, 8, 8, 9, 0];
