// ============================================================================
// Integer Sources
// ============================================================================

use super::ToDecimal;
use crate::numeric::Decimal;
use num_bigint::{BigInt, BigUint};

macro_rules! impl_to_decimal_for_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl ToDecimal for $t {
                #[inline]
                fn to_d(self) -> Decimal {
                    Decimal::from_integer(self)
                }
            }
        )*
    };
}

impl_to_decimal_for_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_to_decimal_for_integer!(BigInt, BigUint);

impl ToDecimal for &BigInt {
    #[inline]
    fn to_d(self) -> Decimal {
        Decimal::from_integer(self.clone())
    }
}

impl ToDecimal for &BigUint {
    #[inline]
    fn to_d(self) -> Decimal {
        Decimal::from_integer(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_integer_to_d() {
        assert_eq!(42i64.to_d().to_string(), "0.42e2");
        assert_eq!(0u8.to_d(), Decimal::zero());
        assert_eq!((-7i32).to_d().to_digits(), "-7.0");
        assert_eq!(i128::MAX.to_d().to_digits(), format!("{}.0", i128::MAX));
        assert_eq!(u128::MAX.to_d().to_digits(), format!("{}.0", u128::MAX));
    }

    #[test]
    fn test_big_integers() {
        let big: BigInt = "-123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            (&big).to_d().to_digits(),
            "-123456789012345678901234567890.0"
        );
        assert_eq!(big.to_d().significant_digits(), 29);

        let unsigned = num_traits::pow(BigUint::from(10u32), 40);
        assert_eq!(unsigned.to_d().to_string(), "0.1e41");
    }

    quickcheck! {
        fn prop_i64_is_exact(n: i64) -> bool {
            n.to_d().to_digits() == format!("{n}.0")
        }

        fn prop_u64_is_exact(n: u64) -> bool {
            n.to_d() == Decimal::from_integer(BigInt::from(n))
        }
    }
}
