// ============================================================================
// Numeric Module
// Arbitrary-precision decimal value and its construction primitives
// ============================================================================
//
// This module provides:
// - Decimal: BigDecimal plus NaN and the two infinities
// - Rounding: how precision-bounded construction treats discarded digits
// - DecimalError: Error types for construction and parsing
//
// Design principles:
// - Exact construction from integers and text
// - Floats and ratios are cut to a caller-chosen number of significant digits
// - Construction returns Result; formatting never fails

mod decimal;
mod errors;
mod parse;
mod rounding;

pub use decimal::{Decimal, MAX_EXPONENT, MAX_F64_DIGITS};
pub use errors::{DecimalError, DecimalResult};
pub use rounding::Rounding;
