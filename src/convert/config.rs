// ============================================================================
// Conversion Configuration
// Precision and rounding policy for the approximating conversions
// ============================================================================

use crate::numeric::{Decimal, DecimalResult, Rounding, MAX_F64_DIGITS};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Policy for float and ratio conversions.
///
/// The defaults are what the `to_d` conversions use: `f64::DIGITS` (15)
/// significant digits for doubles, `f32::DIGITS` (6) for singles, and
/// half-up rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionConfig {
    /// Significant digits kept when converting an `f64`; 0 means shortest
    /// round-trip digits
    pub f64_precision: usize,

    /// Significant digits kept when converting an `f32`; 0 means shortest
    /// round-trip digits
    pub f32_precision: usize,

    /// Rounding applied to discarded digits
    pub rounding: Rounding,
}

impl ConversionConfig {
    /// Default significant digits for `f64` conversion.
    pub const DEFAULT_F64_PRECISION: usize = f64::DIGITS as usize;

    /// Default significant digits for `f32` conversion.
    pub const DEFAULT_F32_PRECISION: usize = f32::DIGITS as usize;

    /// Create a configuration with the default policy
    pub fn new() -> Self {
        Self {
            f64_precision: Self::DEFAULT_F64_PRECISION,
            f32_precision: Self::DEFAULT_F32_PRECISION,
            rounding: Rounding::default(),
        }
    }

    /// Builder method: Set `f64` precision
    pub fn with_f64_precision(mut self, precision: usize) -> Self {
        self.f64_precision = precision;
        self
    }

    /// Builder method: Set `f32` precision
    pub fn with_f32_precision(mut self, precision: usize) -> Self {
        self.f32_precision = precision;
        self
    }

    /// Builder method: Set rounding mode
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.f64_precision > MAX_F64_DIGITS {
            return Err(format!(
                "f64 precision {} exceeds the exact expansion of any double ({} digits)",
                self.f64_precision, MAX_F64_DIGITS
            ));
        }

        if self.f32_precision > MAX_F64_DIGITS {
            return Err(format!(
                "f32 precision {} exceeds the exact expansion of any float ({} digits)",
                self.f32_precision, MAX_F64_DIGITS
            ));
        }

        Ok(())
    }

    // ========================================================================
    // Conversions
    // ========================================================================

    /// Convert a double under this policy.
    #[inline]
    pub fn convert_f64(&self, value: f64) -> Decimal {
        Decimal::from_f64(value, self.f64_precision, self.rounding)
    }

    /// Convert a single-precision float under this policy.
    #[inline]
    pub fn convert_f32(&self, value: f32) -> Decimal {
        Decimal::from_f32(value, self.f32_precision, self.rounding)
    }

    /// Convert a ratio to `precision` significant digits with this policy's
    /// rounding.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `precision` is zero
    /// - `DivisionByZero` if the denominator is zero
    pub fn convert_ratio<T>(&self, ratio: &Ratio<T>, precision: usize) -> DecimalResult<Decimal>
    where
        T: Clone + Integer + Into<BigInt>,
    {
        let numer: BigInt = ratio.numer().clone().into();
        let denom: BigInt = ratio.denom().clone().into();
        Decimal::from_ratio(&numer, &denom, precision, self.rounding)
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}
