// ============================================================================
// Ratio Sources
// ============================================================================

use super::{ConversionConfig, RatioToDecimal};
use crate::numeric::{Decimal, DecimalResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::Ratio;

impl<T> RatioToDecimal for Ratio<T>
where
    T: Clone + Integer + Into<BigInt>,
{
    #[inline]
    fn to_d(&self, precision: usize) -> DecimalResult<Decimal> {
        ConversionConfig::default().convert_ratio(self, precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::DecimalError;
    use num_rational::BigRational;

    #[test]
    fn test_ratio_to_d() {
        let r = Ratio::new_raw(7077085128725065i64, 2251799813685248);
        let d = r.to_d(3).unwrap();
        assert_eq!(d.to_string(), "0.314e1");
        assert_eq!(d.to_digits(), "3.14");
    }

    #[test]
    fn test_ratio_signs() {
        assert_eq!(Ratio::new(-1i64, 3).to_d(2).unwrap().to_digits(), "-0.33");
        assert_eq!(Ratio::new_raw(1i64, -3).to_d(2).unwrap().to_digits(), "-0.33");
        assert_eq!(Ratio::new_raw(-2i64, -3).to_d(2).unwrap().to_digits(), "0.67");
    }

    #[test]
    fn test_big_ratio() {
        let r = BigRational::new(BigInt::from(1), BigInt::from(7));
        let d = r.to_d(30).unwrap();
        assert_eq!(d.to_digits(), "0.142857142857142857142857142857");
        assert_eq!(d.significant_digits(), 30);
    }

    #[test]
    fn test_exact_ratio_keeps_only_needed_digits() {
        let d = Ratio::new(5i32, 4).to_d(10).unwrap();
        assert_eq!(d.to_digits(), "1.25");
        assert_eq!(d.significant_digits(), 3);
    }

    #[test]
    fn test_precision_is_required() {
        assert_eq!(
            Ratio::new(1u64, 3).to_d(0),
            Err(DecimalError::InvalidPrecision)
        );
        assert_eq!(
            Ratio::new_raw(1u64, 0).to_d(3),
            Err(DecimalError::DivisionByZero)
        );
    }
}
