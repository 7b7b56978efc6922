// ============================================================================
// Numeric Module
// Lossless decimal normalization ahead of verbalization
// ============================================================================
//
// This module provides:
// - CanonicalDecimal: sign + digit strings, the only form strategies see
// - SpecialValue: zero / infinity / invalid short-circuits
// - NumberInput: float, text or rust_decimal input and its classification
// - NumericError: error types for parsing and magnitude checks
//
// Design principles:
// - No digit ever passes through a float after the boundary
// - All parsing returns Result (no panics)
// - Typed digits are kept exactly, trailing zeros included

mod canonical_decimal;
mod errors;
mod input;
mod special;

pub use canonical_decimal::{
    CanonicalDecimal, DEFAULT_FLOAT_FRACTION_DIGITS, DEFAULT_GROUPING_SEPARATORS,
};
pub use errors::{NumericError, NumericResult};
pub use input::{Classified, NumberInput};
pub use special::SpecialValue;
