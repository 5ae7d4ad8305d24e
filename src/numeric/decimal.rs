// ============================================================================
// Arbitrary-Precision Decimal
// BigDecimal plus the special values produced by float and text conversion
// ============================================================================

use super::errors::{DecimalError, DecimalResult};
use super::parse::parse_decimal;
use super::rounding::Rounding;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{Signed, Zero};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

/// Upper bound on the significant digits of any finite `f64`.
///
/// The exact decimal expansion of a double never needs more digits than
/// this, so larger precisions reproduce the float exactly.
pub const MAX_F64_DIGITS: usize = 767;

/// Largest exponent, in the `0.dddEn` shape of the default string form,
/// accepted from text in either direction.
///
/// `0.1e1000000` still parses; `0.1e1000001` does not. Rendering a value with
/// [`Decimal::to_digits`] pads at most this many zeros.
pub const MAX_EXPONENT: i64 = 1_000_000;

/// Arbitrary-precision base-10 number.
///
/// Finite values are held as a [`BigDecimal`] (sign, digit sequence and
/// exponent). Conversions from floats and text can also produce NaN and the
/// two infinities.
///
/// # Example
/// ```
/// use to_decimal::numeric::Decimal;
///
/// let pi: Decimal = "3.14".parse().unwrap();
/// assert_eq!(pi.to_string(), "0.314e1");
/// assert_eq!(pi.to_digits(), "3.14");
/// ```
#[derive(Debug, Clone)]
pub enum Decimal {
    /// A finite value
    Finite(BigDecimal),
    /// Positive infinity
    PositiveInfinity,
    /// Negative infinity
    NegativeInfinity,
    /// Not a number; compares unequal to everything, itself included
    NaN,
}

// ============================================================================
// Digit Helpers
// ============================================================================

/// 10^n
fn pow10(n: usize) -> BigInt {
    num_traits::pow(BigInt::from(10u8), n)
}

/// Number of decimal digits in the magnitude of `n` (1 for zero).
fn decimal_digits(n: &BigInt) -> i64 {
    BigDecimal::new(n.clone(), 0).digits() as i64
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Exact zero.
    #[inline]
    pub fn zero() -> Self {
        Decimal::Finite(BigDecimal::zero())
    }

    /// Create `mantissa × 10^-scale`.
    ///
    /// Trailing zeros are folded into the scale, so `from_parts(500, 3)` and
    /// `from_parts(5, 1)` hold the same digits.
    pub fn from_parts(mantissa: BigInt, scale: i64) -> Self {
        Decimal::Finite(BigDecimal::new(mantissa, scale).normalized())
    }

    /// Exact conversion of any integer.
    #[inline]
    pub fn from_integer<T: Into<BigInt>>(value: T) -> Self {
        Self::from_parts(value.into(), 0)
    }

    /// Approximate `numer / denom` to `precision` significant digits.
    ///
    /// # Errors
    /// - `InvalidPrecision` if `precision` is zero
    /// - `DivisionByZero` if `denom` is zero
    /// - `ExponentOverflow` if the result's scale leaves the `i64` range
    pub fn from_ratio(
        numer: &BigInt,
        denom: &BigInt,
        precision: usize,
        rounding: Rounding,
    ) -> DecimalResult<Self> {
        let prec = u64::try_from(precision)
            .ok()
            .and_then(NonZeroU64::new)
            .ok_or(DecimalError::InvalidPrecision)?;
        if denom.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        if numer.is_zero() {
            return Ok(Self::zero());
        }

        let negative = numer.is_negative() != denom.is_negative();
        let dividend = numer.abs();
        let divisor = denom.abs();

        // Scale so the integer quotient carries at least one digit more than
        // requested; bigdecimal then rounds it down to `precision`.
        let wanted = i64::try_from(prec.get())
            .ok()
            .and_then(|digits| digits.checked_add(1))
            .ok_or(DecimalError::InvalidPrecision)?;
        let mut scale = wanted
            .checked_sub(decimal_digits(&dividend) - decimal_digits(&divisor))
            .ok_or(DecimalError::ExponentOverflow)?;

        let (mut quotient, remainder) = scaled_division(&dividend, &divisor, scale)?;

        // A nonzero remainder becomes a trailing sticky digit, so the rounding
        // below never mistakes an inexact quotient for an exact tie.
        if !remainder.is_zero() {
            quotient = quotient * 10u32 + 1u32;
            scale = scale.checked_add(1).ok_or(DecimalError::ExponentOverflow)?;
        }

        tracing::trace!(
            precision,
            scale,
            ?rounding,
            "ratio divided to significant digits"
        );

        let mantissa = if negative { -quotient } else { quotient };
        let rounded = BigDecimal::new(mantissa, scale).with_precision_round(prec, rounding.into());
        Ok(Decimal::Finite(rounded.normalized()))
    }

    /// Approximate a double to `precision` significant digits.
    ///
    /// The float's exact binary value is rounded, so `0.1` at 15 digits is
    /// `0.1` while at 20 digits it is `0.10000000000000000555`. A precision of
    /// zero selects the shortest digits that read back as the same float.
    /// NaN and the infinities map to the matching special values; `-0.0`
    /// becomes zero.
    pub fn from_f64(value: f64, precision: usize, rounding: Rounding) -> Self {
        if let Some(special) = Self::non_finite(value) {
            return special;
        }
        if value == 0.0 {
            return Self::zero();
        }
        let Some(prec) = u64::try_from(precision).ok().and_then(NonZeroU64::new) else {
            return Self::shortest(format!("{value:e}"), value);
        };

        let Ok(exact) = BigDecimal::try_from(value) else {
            return Decimal::NaN;
        };
        let rounded = exact.with_precision_round(prec, rounding.into());
        Decimal::Finite(rounded.normalized())
    }

    /// Approximate a single-precision float to `precision` significant digits.
    ///
    /// Precision zero picks the shortest digits for the `f32`, not for its
    /// widened `f64` value.
    pub fn from_f32(value: f32, precision: usize, rounding: Rounding) -> Self {
        if precision == 0 && value.is_finite() && value != 0.0 {
            return Self::shortest(format!("{value:e}"), f64::from(value));
        }
        Self::from_f64(f64::from(value), precision, rounding)
    }

    fn non_finite(value: f64) -> Option<Self> {
        if value.is_nan() {
            Some(Decimal::NaN)
        } else if value == f64::INFINITY {
            Some(Decimal::PositiveInfinity)
        } else if value == f64::NEG_INFINITY {
            Some(Decimal::NegativeInfinity)
        } else {
            None
        }
    }

    /// Read back Rust's shortest round-trip rendering of a float.
    fn shortest(rendered: String, value: f64) -> Self {
        match parse_decimal(&rendered) {
            Ok(decimal) => decimal,
            Err(_) => Self::from_f64(value, MAX_F64_DIGITS, Rounding::default()),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if value is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Decimal::NaN)
    }

    /// Check if value is positive or negative infinity.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Decimal::PositiveInfinity | Decimal::NegativeInfinity)
    }

    /// Check if value is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Decimal::Finite(_))
    }

    /// Check if value is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        matches!(self, Decimal::Finite(value) if value.is_zero())
    }

    /// Check if value is below zero. NaN is neither negative nor positive.
    pub fn is_negative(&self) -> bool {
        match self {
            Decimal::Finite(value) => value.is_negative(),
            Decimal::NegativeInfinity => true,
            Decimal::PositiveInfinity | Decimal::NaN => false,
        }
    }

    /// Borrow the finite value.
    #[inline]
    pub fn as_big_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Decimal::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Take the finite value.
    #[inline]
    pub fn into_big_decimal(self) -> Option<BigDecimal> {
        match self {
            Decimal::Finite(value) => Some(value),
            _ => None,
        }
    }

    /// Mantissa without trailing zeros and its scale; `None` for zero and
    /// the special values.
    fn normalized_parts(&self) -> Option<(BigInt, i64)> {
        let value = self.as_big_decimal().filter(|value| !value.is_zero())?;
        Some(value.normalized().into_bigint_and_exponent())
    }

    /// Number of significant digits (0 for zero, NaN and the infinities).
    pub fn significant_digits(&self) -> usize {
        self.as_big_decimal()
            .filter(|value| !value.is_zero())
            .map_or(0, |value| value.normalized().digits() as usize)
    }

    /// Exponent `e` such that the value reads `0.ddd × 10^e`.
    ///
    /// Zero and the special values report 0.
    pub fn exponent(&self) -> i128 {
        self.as_big_decimal()
            .filter(|value| !value.is_zero())
            .map_or(0, |value| {
                let (_, scale) = value.as_bigint_and_exponent();
                i128::from(value.digits()) - i128::from(scale)
            })
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render as plain `integer.fraction` digits.
    ///
    /// NaN, the infinities and zero use the default string form, as do values
    /// whose exponent lies beyond [`MAX_EXPONENT`]. A value with no fractional
    /// part still gets `.0`. The sign is kept for values between -1 and 0.
    ///
    /// ```
    /// use to_decimal::numeric::Decimal;
    ///
    /// assert_eq!(Decimal::from_integer(42).to_digits(), "42.0");
    /// assert_eq!("1.05".parse::<Decimal>().unwrap().to_digits(), "1.05");
    /// assert_eq!(Decimal::NaN.to_digits(), "NaN");
    /// ```
    pub fn to_digits(&self) -> String {
        let Some((mantissa, scale)) = self.normalized_parts() else {
            return self.to_string();
        };
        if self.exponent().abs() > i128::from(MAX_EXPONENT) {
            return self.to_string();
        }

        let digits = mantissa.magnitude().to_str_radix(10);
        let (integer, fraction) = if scale <= 0 {
            let padding = "0".repeat(scale.unsigned_abs() as usize);
            (digits + &padding, "0".to_string())
        } else {
            let scale = scale as usize;
            if digits.len() > scale {
                let (integer, fraction) = digits.split_at(digits.len() - scale);
                (integer.to_string(), fraction.to_string())
            } else {
                let padding = "0".repeat(scale - digits.len());
                ("0".to_string(), padding + &digits)
            }
        };

        let sign = if mantissa.is_negative() { "-" } else { "" };
        format!("{sign}{integer}.{fraction}")
    }
}

// ============================================================================
// Division Helper
// ============================================================================

/// Integer division of `dividend × 10^scale` by `divisor`, with both operands
/// non-negative. A negative scale moves the power of ten onto the divisor.
/// Returns the quotient and remainder.
fn scaled_division(
    dividend: &BigInt,
    divisor: &BigInt,
    scale: i64,
) -> DecimalResult<(BigInt, BigInt)> {
    let shift =
        usize::try_from(scale.unsigned_abs()).map_err(|_| DecimalError::ExponentOverflow)?;
    let (dividend, divisor) = if scale >= 0 {
        (dividend * pow10(shift), divisor.clone())
    } else {
        (dividend.clone(), divisor * pow10(shift))
    };
    Ok(dividend.div_rem(&divisor))
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Decimal::Finite(a), Decimal::Finite(b)) => a == b,
            (Decimal::PositiveInfinity, Decimal::PositiveInfinity) => true,
            (Decimal::NegativeInfinity, Decimal::NegativeInfinity) => true,
            _ => false,
        }
    }
}

impl From<BigDecimal> for Decimal {
    #[inline]
    fn from(value: BigDecimal) -> Self {
        Decimal::Finite(value)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    /// Strict parse; see [`ToDecimal`](crate::convert::ToDecimal) for the
    /// lenient zero-on-failure conversion.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s)
    }
}

/// Default string form: `0.314e1`, `-0.5e0`, `0.0`, `NaN`, `Infinity`,
/// `-Infinity`.
impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decimal::NaN => write!(f, "NaN"),
            Decimal::PositiveInfinity => write!(f, "Infinity"),
            Decimal::NegativeInfinity => write!(f, "-Infinity"),
            Decimal::Finite(_) => match self.normalized_parts() {
                None => write!(f, "0.0"),
                Some((mantissa, scale)) => {
                    let digits = mantissa.magnitude().to_str_radix(10);
                    let exponent = digits.len() as i128 - i128::from(scale);
                    let sign = if mantissa.sign() == Sign::Minus { "-" } else { "" };
                    write!(f, "{sign}0.{digits}e{exponent}")
                },
            },
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse_decimal(&text).map_err(serde::de::Error::custom)
    }
}
