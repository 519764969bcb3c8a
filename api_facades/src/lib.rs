//! API Facades Layer
//!
//! The public surface of the integer kernel: decimal, radix and unsigned
//! bit-pattern rendering plus the single-word bit primitives, under the
//! operation names callers use. All facades delegate to the inner layers;
//! nothing here carries logic of its own.

pub mod bit_facades;
pub mod integer_facades;

pub use bit_facades::*;
pub use integer_facades::*;

// The inverse digit mapping stays consistent with the alphabet the
// formatters render from; parsers share it.
pub use entities_digit_tables::{digit_value, MAX_RADIX, MIN_RADIX};
pub use infrastructure_bit_primitives::MachineWord;
pub use infrastructure_integer_formatting::{RadixError, SmallValueCache};
