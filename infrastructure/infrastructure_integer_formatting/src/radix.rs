//! General Radix Formatting
//!
//! One digit per iteration by true division, for any radix in 2..=36. The
//! reciprocal tricks of the decimal path do not apply here because the
//! divisor is not known at compile time.
//!
//! ## Sign handling
//!
//! Positive inputs are negated and the digit loop runs on a non-positive
//! value. This is the opposite of what one might expect: the negative
//! range is strictly larger than the positive one, so there is no in-width
//! counterpart to negating the minimum value, while every positive value
//! negates safely. The digit index is recovered as `radix * q - v`, which
//! is non-negative in that domain.
//!
//! ## Radix normalization
//!
//! A radix outside 2..=36 is not an error on the lenient surface: it is
//! silently replaced by 10, and radix 10 itself always delegates to the
//! decimal fast path. The strict `try_` companions reject instead of
//! clamping, for callers that want the narrower contract.

use entities_digit_tables::{DIGITS, MAX_RADIX, MIN_RADIX};
use thiserror::Error;

use crate::ascii_to_string;
use crate::decimal::DecimalFormatter;

/// Error returned by the strict radix conversions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RadixError {
    /// The requested radix is outside the supported range.
    #[error("radix {radix} is outside the supported range 2..=36")]
    OutOfRange {
        /// The rejected radix.
        radix: i32,
    },
}

/// Positional-notation rendering for any supported radix.
pub struct RadixFormatter;

impl RadixFormatter {
    /// Renders a 32-bit signed value in the given radix, normalizing any
    /// unsupported radix to 10.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_integer_formatting::RadixFormatter;
    ///
    /// assert_eq!(RadixFormatter::i32_to_string(255, 16), "ff");
    /// assert_eq!(RadixFormatter::i32_to_string(-255, 16), "-ff");
    /// assert_eq!(RadixFormatter::i32_to_string(42, 1), "42");
    /// assert_eq!(RadixFormatter::i32_to_string(42, 99), "42");
    /// ```
    pub fn i32_to_string(i: i32, radix: i32) -> String {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) || radix == 10 {
            return DecimalFormatter::i32_to_string(i);
        }

        let negative = i < 0;
        // Negate positives into the larger negative range; see the module
        // docs for why the loop runs on non-positive values.
        let mut v = if negative { i } else { -i };

        // Worst case: 32 binary digits plus sign; 11 digits plus sign at
        // radix 8 and above.
        let buf_len = if radix < 8 { 33 } else { 12 };
        let mut buf = [0u8; 33];
        let mut cursor = buf_len;

        loop {
            let q = v / radix;
            cursor -= 1;
            buf[cursor] = DIGITS[(radix * q - v) as usize];
            v = q;
            if v == 0 {
                break;
            }
        }

        if negative {
            cursor -= 1;
            buf[cursor] = b'-';
        }
        ascii_to_string(&buf[cursor..buf_len])
    }

    /// Renders a 64-bit signed value in the given radix, normalizing any
    /// unsupported radix to 10. Values that fit the 32-bit word take that
    /// path unchanged.
    ///
    /// # Examples
    /// ```
    /// use infrastructure_integer_formatting::RadixFormatter;
    ///
    /// assert_eq!(RadixFormatter::i64_to_string(255, 16), "ff");
    /// assert_eq!(RadixFormatter::i64_to_string(i64::MIN, 2).len(), 65);
    /// ```
    pub fn i64_to_string(v: i64, radix: i32) -> String {
        let narrow = v as i32;
        if narrow as i64 == v {
            return Self::i32_to_string(narrow, radix);
        }
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) || radix == 10 {
            return DecimalFormatter::i64_to_string(v);
        }

        let negative = v < 0;
        let mut n = if negative { v } else { -v };
        let radix = radix as i64;

        // Worst case: 64 binary digits plus sign; 22 digits plus sign at
        // radix 8 and above.
        let buf_len = if radix < 8 { 65 } else { 23 };
        let mut buf = [0u8; 65];
        let mut cursor = buf_len;

        loop {
            let q = n / radix;
            cursor -= 1;
            buf[cursor] = DIGITS[(radix * q - n) as usize];
            n = q;
            if n == 0 {
                break;
            }
        }

        if negative {
            cursor -= 1;
            buf[cursor] = b'-';
        }
        ascii_to_string(&buf[cursor..buf_len])
    }

    /// Strict form of [`i32_to_string`](Self::i32_to_string): rejects an
    /// unsupported radix instead of clamping it.
    pub fn try_i32_to_string(i: i32, radix: i32) -> Result<String, RadixError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(RadixError::OutOfRange { radix });
        }
        Ok(Self::i32_to_string(i, radix))
    }

    /// Strict form of [`i64_to_string`](Self::i64_to_string): rejects an
    /// unsupported radix instead of clamping it.
    pub fn try_i64_to_string(v: i64, radix: i32) -> Result<String, RadixError> {
        if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
            return Err(RadixError::OutOfRange { radix });
        }
        Ok(Self::i64_to_string(v, radix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_renderings() {
        assert_eq!(RadixFormatter::i32_to_string(255, 16), "ff");
        assert_eq!(RadixFormatter::i32_to_string(-255, 16), "-ff");
        assert_eq!(RadixFormatter::i32_to_string(8, 2), "1000");
        assert_eq!(RadixFormatter::i32_to_string(35, 36), "z");
        assert_eq!(RadixFormatter::i32_to_string(36, 36), "10");
        assert_eq!(RadixFormatter::i64_to_string(255, 16), "ff");
        assert_eq!(
            RadixFormatter::i64_to_string(0x0123_4567_89ab_cdef, 16),
            "123456789abcdef"
        );
    }

    #[test]
    fn test_zero_in_every_radix() {
        for radix in 2..=36 {
            assert_eq!(RadixFormatter::i32_to_string(0, radix), "0");
            assert_eq!(RadixFormatter::i64_to_string(0, radix), "0");
        }
    }

    #[test]
    fn test_radix_clamp_quirk() {
        for bad_radix in [i32::MIN, -1, 0, 1, 37, 99, i32::MAX] {
            assert_eq!(RadixFormatter::i32_to_string(1234, bad_radix), "1234");
            assert_eq!(RadixFormatter::i32_to_string(-1234, bad_radix), "-1234");
            assert_eq!(
                RadixFormatter::i64_to_string(10_000_000_000, bad_radix),
                "10000000000"
            );
        }
    }

    #[test]
    fn test_radix_ten_matches_decimal_path() {
        for v in [0, 7, -7, 12_345, i32::MAX, i32::MIN] {
            assert_eq!(
                RadixFormatter::i32_to_string(v, 10),
                DecimalFormatter::i32_to_string(v)
            );
        }
    }

    #[test]
    fn test_min_values_render_without_wrapping() {
        assert_eq!(
            RadixFormatter::i32_to_string(i32::MIN, 2),
            format!("-1{}", "0".repeat(31))
        );
        assert_eq!(RadixFormatter::i32_to_string(i32::MIN, 16), "-80000000");
        assert_eq!(
            RadixFormatter::i64_to_string(i64::MIN, 16),
            "-8000000000000000"
        );
        assert_eq!(
            RadixFormatter::i64_to_string(i64::MIN, 2),
            format!("-1{}", "0".repeat(63))
        );
    }

    #[test]
    fn test_agrees_with_std_radix_rendering() {
        // Cross-check against the standard library's binary, octal and
        // hex renderings on non-negative values (those share digits with
        // positional notation).
        for v in [1_i32, 7, 8, 255, 4096, i32::MAX] {
            assert_eq!(RadixFormatter::i32_to_string(v, 2), format!("{v:b}"));
            assert_eq!(RadixFormatter::i32_to_string(v, 8), format!("{v:o}"));
            assert_eq!(RadixFormatter::i32_to_string(v, 16), format!("{v:x}"));
        }
        for v in [1_i64 << 40, i64::MAX] {
            assert_eq!(RadixFormatter::i64_to_string(v, 2), format!("{v:b}"));
            assert_eq!(RadixFormatter::i64_to_string(v, 8), format!("{v:o}"));
            assert_eq!(RadixFormatter::i64_to_string(v, 16), format!("{v:x}"));
        }
    }

    #[test]
    fn test_strict_variants() {
        assert_eq!(RadixFormatter::try_i32_to_string(255, 16), Ok("ff".into()));
        assert_eq!(
            RadixFormatter::try_i32_to_string(255, 1),
            Err(RadixError::OutOfRange { radix: 1 })
        );
        assert_eq!(
            RadixFormatter::try_i64_to_string(255, 37),
            Err(RadixError::OutOfRange { radix: 37 })
        );
        assert_eq!(
            RadixFormatter::try_i64_to_string(-255, 36),
            Ok("-73".into())
        );
    }

    #[test]
    fn test_radix_error_display() {
        let err = RadixError::OutOfRange { radix: 37 };
        assert_eq!(
            err.to_string(),
            "radix 37 is outside the supported range 2..=36"
        );
    }
}
