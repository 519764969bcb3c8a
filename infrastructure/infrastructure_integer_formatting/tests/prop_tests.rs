//! Property-based tests for infrastructure_integer_formatting.
//!
//! Uses proptest to verify the formatting contract across random values
//! and radices: positional round trips, canonical shape, agreement with
//! the standard library where the notations coincide, and the radix
//! clamp quirk.

use infrastructure_integer_formatting::{
    DecimalFormatter, RadixFormatter, SmallValueCache, UnsignedFormatter,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_decimal_i32_matches_display(v in any::<i32>()) {
        prop_assert_eq!(DecimalFormatter::i32_to_string(v), v.to_string());
    }

    #[test]
    fn prop_decimal_i64_matches_display(v in any::<i64>()) {
        prop_assert_eq!(DecimalFormatter::i64_to_string(v), v.to_string());
    }

    #[test]
    fn prop_radix_round_trips_i32(v in any::<i32>(), radix in 2_i32..=36) {
        let rendered = RadixFormatter::i32_to_string(v, radix);
        prop_assert_eq!(i32::from_str_radix(&rendered, radix as u32), Ok(v));
    }

    #[test]
    fn prop_radix_round_trips_i64(v in any::<i64>(), radix in 2_i32..=36) {
        let rendered = RadixFormatter::i64_to_string(v, radix);
        prop_assert_eq!(i64::from_str_radix(&rendered, radix as u32), Ok(v));
    }

    #[test]
    fn prop_canonical_shape(v in any::<i64>(), radix in 2_i32..=36) {
        let s = RadixFormatter::i64_to_string(v, radix);
        let digits = s.strip_prefix('-').unwrap_or(&s);
        // Sign iff negative, never a leading zero on a nonzero value,
        // every digit below the radix.
        prop_assert_eq!(s.starts_with('-'), v < 0);
        prop_assert!(!digits.is_empty());
        if v != 0 {
            prop_assert!(!digits.starts_with('0'));
        }
        for c in digits.chars() {
            let value = entities_digit_tables::digit_value(c);
            prop_assert!(value.is_some() && value.unwrap() < radix as u32);
        }
    }

    #[test]
    fn prop_out_of_range_radix_clamps_to_decimal(
        v in any::<i64>(),
        radix in prop_oneof![i32::MIN..2, 37..i32::MAX],
    ) {
        prop_assert_eq!(
            RadixFormatter::i64_to_string(v, radix),
            DecimalFormatter::i64_to_string(v)
        );
        prop_assert!(RadixFormatter::try_i64_to_string(v, radix).is_err());
    }

    #[test]
    fn prop_strict_agrees_with_lenient_in_range(v in any::<i32>(), radix in 2_i32..=36) {
        let strict = RadixFormatter::try_i32_to_string(v, radix);
        let lenient = RadixFormatter::i32_to_string(v, radix);
        prop_assert_eq!(
            strict.as_deref().ok(),
            Some(lenient.as_str())
        );
    }

    #[test]
    fn prop_unsigned_matches_std_i32(v in any::<i32>()) {
        let u = v as u32;
        prop_assert_eq!(UnsignedFormatter::i32_to_binary_string(v), format!("{u:b}"));
        prop_assert_eq!(UnsignedFormatter::i32_to_octal_string(v), format!("{u:o}"));
        prop_assert_eq!(UnsignedFormatter::i32_to_hex_string(v), format!("{u:x}"));
    }

    #[test]
    fn prop_unsigned_matches_std_i64(v in any::<i64>()) {
        let u = v as u64;
        prop_assert_eq!(UnsignedFormatter::i64_to_binary_string(v), format!("{u:b}"));
        prop_assert_eq!(UnsignedFormatter::i64_to_octal_string(v), format!("{u:o}"));
        prop_assert_eq!(UnsignedFormatter::i64_to_hex_string(v), format!("{u:x}"));
    }

    #[test]
    fn prop_unsigned_round_trips_through_the_bit_pattern(v in any::<i64>()) {
        let hex = UnsignedFormatter::i64_to_hex_string(v);
        prop_assert_eq!(u64::from_str_radix(&hex, 16), Ok(v as u64));
        let bin = UnsignedFormatter::i64_to_binary_string(v);
        prop_assert_eq!(u64::from_str_radix(&bin, 2), Ok(v as u64));
    }

    #[test]
    fn prop_small_values_hit_identical_cache_content(v in -99_i64..100) {
        let first = SmallValueCache::lookup(v).unwrap();
        let second = SmallValueCache::lookup(v).unwrap();
        prop_assert_eq!(first, v.to_string());
        // Same published entry, not merely equal content.
        prop_assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn prop_append_equals_to_string(v in any::<i64>(), prefix in "[a-z]{0,8}") {
        let mut out = prefix.clone();
        DecimalFormatter::append_i64(&mut out, v);
        prop_assert_eq!(out, format!("{prefix}{v}"));
    }
}
