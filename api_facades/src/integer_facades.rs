//! Integer Rendering Facades
//!
//! Thin delegation to the formatting layer, one function per public
//! operation and width.

use infrastructure_integer_formatting::{
    DecimalFormatter, RadixError, RadixFormatter, UnsignedFormatter,
};

/// Canonical decimal rendering of a 32-bit signed value.
pub fn int32_to_string(i: i32) -> String {
    DecimalFormatter::i32_to_string(i)
}

/// Canonical decimal rendering of a 64-bit signed value.
pub fn int64_to_string(v: i64) -> String {
    DecimalFormatter::i64_to_string(v)
}

/// Rendering of a 32-bit signed value in the given radix; an unsupported
/// radix silently becomes 10.
pub fn int32_to_string_radix(i: i32, radix: i32) -> String {
    RadixFormatter::i32_to_string(i, radix)
}

/// Rendering of a 64-bit signed value in the given radix; an unsupported
/// radix silently becomes 10.
pub fn int64_to_string_radix(v: i64, radix: i32) -> String {
    RadixFormatter::i64_to_string(v, radix)
}

/// Strict rendering of a 32-bit signed value: an unsupported radix is an
/// error, not a fallback.
pub fn try_int32_to_string_radix(i: i32, radix: i32) -> Result<String, RadixError> {
    RadixFormatter::try_i32_to_string(i, radix)
}

/// Strict rendering of a 64-bit signed value: an unsupported radix is an
/// error, not a fallback.
pub fn try_int64_to_string_radix(v: i64, radix: i32) -> Result<String, RadixError> {
    RadixFormatter::try_i64_to_string(v, radix)
}

/// Binary rendering of the unsigned 32-bit pattern; no sign character.
pub fn int32_to_binary_string(v: i32) -> String {
    UnsignedFormatter::i32_to_binary_string(v)
}

/// Octal rendering of the unsigned 32-bit pattern; no sign character.
pub fn int32_to_octal_string(v: i32) -> String {
    UnsignedFormatter::i32_to_octal_string(v)
}

/// Hexadecimal rendering of the unsigned 32-bit pattern; no sign
/// character.
pub fn int32_to_hex_string(v: i32) -> String {
    UnsignedFormatter::i32_to_hex_string(v)
}

/// Binary rendering of the unsigned 64-bit pattern; no sign character.
pub fn int64_to_binary_string(v: i64) -> String {
    UnsignedFormatter::i64_to_binary_string(v)
}

/// Octal rendering of the unsigned 64-bit pattern; no sign character.
pub fn int64_to_octal_string(v: i64) -> String {
    UnsignedFormatter::i64_to_octal_string(v)
}

/// Hexadecimal rendering of the unsigned 64-bit pattern; no sign
/// character.
pub fn int64_to_hex_string(v: i64) -> String {
    UnsignedFormatter::i64_to_hex_string(v)
}

/// Appends the decimal rendering of a 32-bit value to an existing buffer.
pub fn append_int32(out: &mut String, i: i32) {
    DecimalFormatter::append_i32(out, i)
}

/// Appends the decimal rendering of a 64-bit value to an existing buffer.
pub fn append_int64(out: &mut String, v: i64) {
    DecimalFormatter::append_i64(out, v)
}
