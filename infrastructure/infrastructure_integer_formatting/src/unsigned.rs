//! Unsigned Bit-Pattern Formatting
//!
//! Binary, octal and hexadecimal rendering of the word's unsigned bit
//! pattern: one digit per iteration by shift and mask at 1, 3 and 4 bits.
//! No sign character is ever emitted; `-1` renders as the full-width
//! all-ones pattern. The buffer is sized exactly up front from the
//! leading-zero count, so the digit loop never reallocates.

use entities_digit_tables::DIGITS;
use infrastructure_bit_primitives::BitUtils;

use crate::ascii_to_string;

/// Power-of-two radix rendering of unsigned bit patterns.
pub struct UnsignedFormatter;

impl UnsignedFormatter {
    /// Renders the unsigned bit pattern of a 32-bit word in binary.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_integer_formatting::UnsignedFormatter;
    ///
    /// assert_eq!(UnsignedFormatter::i32_to_binary_string(5), "101");
    /// assert_eq!(UnsignedFormatter::i32_to_binary_string(0), "0");
    /// ```
    pub fn i32_to_binary_string(v: i32) -> String {
        Self::shift_mask(v as u32 as u64, Self::digit_count_32(v, 1), 1)
    }

    /// Renders the unsigned bit pattern of a 32-bit word in octal.
    pub fn i32_to_octal_string(v: i32) -> String {
        Self::shift_mask(v as u32 as u64, Self::digit_count_32(v, 3), 3)
    }

    /// Renders the unsigned bit pattern of a 32-bit word in hexadecimal.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_integer_formatting::UnsignedFormatter;
    ///
    /// assert_eq!(UnsignedFormatter::i32_to_hex_string(255), "ff");
    /// assert_eq!(UnsignedFormatter::i32_to_hex_string(-1), "ffffffff");
    /// ```
    pub fn i32_to_hex_string(v: i32) -> String {
        Self::shift_mask(v as u32 as u64, Self::digit_count_32(v, 4), 4)
    }

    /// Renders the unsigned bit pattern of a 64-bit word in binary.
    pub fn i64_to_binary_string(v: i64) -> String {
        let narrow = v as i32;
        if v >= 0 && narrow as i64 == v {
            return Self::i32_to_binary_string(narrow);
        }
        Self::shift_mask(v as u64, Self::digit_count_64(v, 1), 1)
    }

    /// Renders the unsigned bit pattern of a 64-bit word in octal.
    pub fn i64_to_octal_string(v: i64) -> String {
        let narrow = v as i32;
        if v >= 0 && narrow as i64 == v {
            return Self::i32_to_octal_string(narrow);
        }
        Self::shift_mask(v as u64, Self::digit_count_64(v, 3), 3)
    }

    /// Renders the unsigned bit pattern of a 64-bit word in hexadecimal.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_integer_formatting::UnsignedFormatter;
    ///
    /// assert_eq!(
    ///     UnsignedFormatter::i64_to_hex_string(-1),
    ///     "ffffffffffffffff"
    /// );
    /// ```
    pub fn i64_to_hex_string(v: i64) -> String {
        let narrow = v as i32;
        if v >= 0 && narrow as i64 == v {
            return Self::i32_to_hex_string(narrow);
        }
        Self::shift_mask(v as u64, Self::digit_count_64(v, 4), 4)
    }

    /// Digits needed for the significant bits of a 32-bit pattern at
    /// `bits` per digit; at least one so zero renders as `"0"`.
    fn digit_count_32(v: i32, bits: u32) -> usize {
        let significant = 32 - BitUtils::number_of_leading_zeros(v);
        significant.div_ceil(bits).max(1) as usize
    }

    /// Digits needed for the significant bits of a 64-bit pattern.
    fn digit_count_64(v: i64, bits: u32) -> usize {
        let significant = 64 - BitUtils::number_of_leading_zeros(v);
        significant.div_ceil(bits).max(1) as usize
    }

    /// Writes `digit_count` digits of `n` back to front at `bits` per
    /// digit. `digit_count` is exact by construction, so the cursor lands
    /// on zero as the loop finishes.
    fn shift_mask(mut n: u64, digit_count: usize, bits: u32) -> String {
        let mask = (1u64 << bits) - 1;
        let mut buf = [0u8; 64];
        let mut cursor = digit_count;
        loop {
            cursor -= 1;
            buf[cursor] = DIGITS[(n & mask) as usize];
            n >>= bits;
            if n == 0 {
                break;
            }
        }
        ascii_to_string(&buf[..digit_count])
    }
}
