// ============================================================================
// Floating-Point Sources
// ============================================================================

use super::{ConversionConfig, FloatToDecimal, ToDecimal};
use crate::numeric::{Decimal, Rounding};

/// Uses `f64::DIGITS` (15) significant digits.
impl ToDecimal for f64 {
    #[inline]
    fn to_d(self) -> Decimal {
        ConversionConfig::default().convert_f64(self)
    }
}

/// Uses `f32::DIGITS` (6) significant digits.
impl ToDecimal for f32 {
    #[inline]
    fn to_d(self) -> Decimal {
        ConversionConfig::default().convert_f32(self)
    }
}

impl FloatToDecimal for f64 {
    #[inline]
    fn to_d_with_precision(self, precision: usize) -> Decimal {
        Decimal::from_f64(self, precision, Rounding::default())
    }
}

impl FloatToDecimal for f32 {
    #[inline]
    fn to_d_with_precision(self, precision: usize) -> Decimal {
        Decimal::from_f32(self, precision, Rounding::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(text: &str) -> Decimal {
        text.parse().unwrap()
    }

    #[test]
    fn test_default_precision() {
        assert_eq!(0.5f64.to_d(), dec("0.5"));
        assert_eq!(0.5f64.to_d().to_string(), "0.5e0");
        assert_eq!((22.0f64 / 7.0).to_d(), dec("3.14285714285714"));
        assert_eq!((2.0f64 / 3.0).to_d(), dec("0.666666666666667"));
        assert_eq!(0.1f32.to_d(), dec("0.1"));
    }

    #[test]
    fn test_explicit_precision() {
        let x = 22.0f64 / 7.0;
        assert_eq!(x.to_d_with_precision(3), dec("3.14"));
        assert_eq!(x.to_d_with_precision(1), dec("3"));
        assert_eq!(x.to_d_with_precision(0), dec("3.142857142857143"));
        assert_eq!(1.5f32.to_d_with_precision(1), dec("2"));
    }

    #[test]
    fn test_non_finite_floats() {
        assert!(f64::NAN.to_d().is_nan());
        assert_eq!(f64::INFINITY.to_d(), Decimal::PositiveInfinity);
        assert_eq!(f32::NEG_INFINITY.to_d(), Decimal::NegativeInfinity);
        assert_eq!(f64::NAN.to_d().to_digits(), "NaN");
    }

    #[test]
    fn test_small_and_large_magnitudes() {
        assert_eq!(1e-300f64.to_d(), dec("1e-300"));
        assert_eq!(f64::MAX.to_d(), dec("1.79769313486232e308"));
        assert_eq!(f64::MIN_POSITIVE.to_d(), dec("2.2250738585072e-308"));
    }
}
