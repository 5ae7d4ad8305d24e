// ============================================================================
// Conversion Module
// Capabilities that turn built-in values into a Decimal
// ============================================================================
//
// Every source type gets one entry point:
// - integers, floats, text, Option and Decimal itself: ToDecimal::to_d
// - floats with an explicit digit count: FloatToDecimal::to_d_with_precision
// - ratios, whose precision is mandatory: RatioToDecimal::to_d
//
// The two policies that matter:
// - floats default to f64::DIGITS (15) significant digits (f32::DIGITS for f32)
// - text that does not parse converts to zero instead of failing

mod config;
mod float;
mod identity;
mod integer;
mod ratio;
mod text;

use crate::numeric::{Decimal, DecimalResult};

pub use config::ConversionConfig;

/// Conversion into a [`Decimal`] that always succeeds.
pub trait ToDecimal {
    /// Convert `self` to a decimal.
    fn to_d(self) -> Decimal;
}

/// Float conversion with an explicit number of significant digits.
pub trait FloatToDecimal {
    /// Convert to a decimal with at most `precision` significant digits.
    ///
    /// A precision of zero picks the shortest digits that read back as the
    /// same float.
    fn to_d_with_precision(self, precision: usize) -> Decimal;
}

/// Ratio conversion. There is no default precision.
pub trait RatioToDecimal {
    /// Convert to a decimal with at most `precision` significant digits.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `precision` is zero
    /// - `DivisionByZero` if the denominator is zero
    fn to_d(&self, precision: usize) -> DecimalResult<Decimal>;
}
