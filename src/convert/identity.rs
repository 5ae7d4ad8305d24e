// ============================================================================
// Decimal-Like Sources
// Decimal itself, the fixed-precision rust_decimal type, and Option
// ============================================================================

use super::ToDecimal;
use crate::numeric::Decimal;
use num_bigint::BigInt;

/// Identity: the value is moved out unchanged.
impl ToDecimal for Decimal {
    #[inline]
    fn to_d(self) -> Decimal {
        self
    }
}

impl ToDecimal for &Decimal {
    #[inline]
    fn to_d(self) -> Decimal {
        self.clone()
    }
}

/// Exact: `mantissa × 10^-scale`.
impl ToDecimal for rust_decimal::Decimal {
    #[inline]
    fn to_d(self) -> Decimal {
        Decimal::from_parts(BigInt::from(self.mantissa()), i64::from(self.scale()))
    }
}

/// `None` converts to zero.
impl<T: ToDecimal> ToDecimal for Option<T> {
    #[inline]
    fn to_d(self) -> Decimal {
        self.map_or_else(Decimal::zero, ToDecimal::to_d)
    }
}
