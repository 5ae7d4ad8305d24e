// ============================================================================
// Decimal Text Parser
// Strict reader for decimal literals
// ============================================================================
//
// Accepted forms (surrounding ASCII whitespace is ignored):
//   NaN | Infinity | +Infinity | -Infinity
//   [+-] digits [ . digits ] [ (e|E|d|D) [+-] digits ]
//   [+-] . digits [ (e|E|d|D) [+-] digits ]
//
// `digits` may contain single `_` separators between two digits. The value's
// decimal exponent must stay within MAX_EXPONENT in either direction.

use super::decimal::{Decimal, MAX_EXPONENT};
use super::errors::{DecimalError, DecimalResult};
use num_bigint::BigInt;

/// Parse a decimal literal.
///
/// # Errors
/// Returns `InvalidInput` for anything outside the grammar and
/// `ExponentOverflow` when the value's exponent exceeds [`MAX_EXPONENT`].
pub(crate) fn parse_decimal(text: &str) -> DecimalResult<Decimal> {
    let text = text.trim_matches(|c: char| c.is_ascii_whitespace());
    match text {
        "NaN" => return Ok(Decimal::NaN),
        "Infinity" | "+Infinity" => return Ok(Decimal::PositiveInfinity),
        "-Infinity" => return Ok(Decimal::NegativeInfinity),
        _ => {},
    }

    let bytes = text.as_bytes();
    let mut pos = 0;
    let negative = scan_sign(bytes, &mut pos);

    let mut digits = String::with_capacity(bytes.len());
    let integer_len = scan_digits(bytes, &mut pos, &mut digits)?;

    let mut fraction_len = 0;
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        fraction_len = scan_digits(bytes, &mut pos, &mut digits)?;
        if fraction_len == 0 {
            return Err(DecimalError::InvalidInput);
        }
    }

    if integer_len == 0 && fraction_len == 0 {
        return Err(DecimalError::InvalidInput);
    }

    let mut exponent: i64 = 0;
    if let Some(b'e' | b'E' | b'd' | b'D') = bytes.get(pos) {
        pos += 1;
        let exponent_negative = scan_sign(bytes, &mut pos);
        let mut exponent_digits = String::new();
        if scan_digits(bytes, &mut pos, &mut exponent_digits)? == 0 {
            return Err(DecimalError::InvalidInput);
        }
        exponent = exponent_digits
            .parse::<i64>()
            .map_err(|_| DecimalError::ExponentOverflow)?;
        if exponent_negative {
            exponent = -exponent;
        }
    }

    if pos != bytes.len() {
        return Err(DecimalError::InvalidInput);
    }

    // Leading zeros carry no value; trailing zeros fold into the scale so the
    // mantissa is built already normalized.
    let significant = digits.trim_start_matches('0');
    let trimmed = significant.trim_end_matches('0');
    if trimmed.is_empty() {
        return Ok(Decimal::zero());
    }
    let trailing_zeros = significant.len() - trimmed.len();

    let scale = i64::try_from(fraction_len)
        .ok()
        .and_then(|fraction_len| fraction_len.checked_sub(exponent))
        .and_then(|scale| scale.checked_sub(i64::try_from(trailing_zeros).ok()?))
        .ok_or(DecimalError::ExponentOverflow)?;

    let value_exponent = trimmed.len() as i128 - i128::from(scale);
    if value_exponent.abs() > i128::from(MAX_EXPONENT) {
        return Err(DecimalError::ExponentOverflow);
    }

    let magnitude =
        BigInt::parse_bytes(trimmed.as_bytes(), 10).ok_or(DecimalError::InvalidInput)?;
    let mantissa = if negative { -magnitude } else { magnitude };

    Ok(Decimal::from_parts(mantissa, scale))
}

/// Consume an optional sign; true when it was `-`.
fn scan_sign(bytes: &[u8], pos: &mut usize) -> bool {
    match bytes.get(*pos) {
        Some(b'-') => {
            *pos += 1;
            true
        },
        Some(b'+') => {
            *pos += 1;
            false
        },
        _ => false,
    }
}

/// Consume a run of digits with optional `_` separators, appending the digits
/// to `out`. Returns how many digits were read.
fn scan_digits(bytes: &[u8], pos: &mut usize, out: &mut String) -> DecimalResult<usize> {
    let mut count = 0;
    while let Some(&byte) = bytes.get(*pos) {
        match byte {
            b'0'..=b'9' => {
                out.push(char::from(byte));
                count += 1;
                *pos += 1;
            },
            b'_' => {
                let next_is_digit = bytes.get(*pos + 1).is_some_and(u8::is_ascii_digit);
                if count == 0 || !next_is_digit {
                    return Err(DecimalError::InvalidInput);
                }
                *pos += 1;
            },
            _ => break,
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(mantissa: i64, scale: i64) -> Decimal {
        Decimal::from_parts(BigInt::from(mantissa), scale)
    }

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_decimal("0.5"), Ok(parts(5, 1)));
        assert_eq!(parse_decimal("42"), Ok(parts(42, 0)));
        assert_eq!(parse_decimal("-3.14"), Ok(parts(-314, 2)));
        assert_eq!(parse_decimal("+7"), Ok(parts(7, 0)));
        assert_eq!(parse_decimal(".25"), Ok(parts(25, 2)));
        assert_eq!(parse_decimal("000123.4500"), Ok(parts(12345, 2)));
    }

    #[test]
    fn test_exponents() {
        assert_eq!(parse_decimal("1e3"), Ok(parts(1000, 0)));
        assert_eq!(parse_decimal("0.314e1"), Ok(parts(314, 2)));
        assert_eq!(parse_decimal("2.5E-2"), Ok(parts(25, 3)));
        assert_eq!(parse_decimal("1d2"), Ok(parts(100, 0)));
        assert_eq!(parse_decimal("1D+2"), Ok(parts(100, 0)));
    }

    #[test]
    fn test_whitespace_and_separators() {
        assert_eq!(parse_decimal("  12.5\n"), Ok(parts(125, 1)));
        assert_eq!(parse_decimal("1_000_000"), Ok(parts(1_000_000, 0)));
        assert_eq!(parse_decimal("0.000_1"), Ok(parts(1, 4)));
    }

    #[test]
    fn test_special_values() {
        assert!(parse_decimal("NaN").is_ok_and(|value| value.is_nan()));
        assert_eq!(parse_decimal("Infinity"), Ok(Decimal::PositiveInfinity));
        assert_eq!(parse_decimal("+Infinity"), Ok(Decimal::PositiveInfinity));
        assert_eq!(parse_decimal(" -Infinity "), Ok(Decimal::NegativeInfinity));
    }

    #[test]
    fn test_invalid_input() {
        for text in [
            "", " ", "-", "+", ".", "5.", "1e", "1e+", "abc", "not a number", "1.2.3", "1_",
            "_1", "1__0", "1._5", "0x10", "1.5f", "inf", "nan", "1 000",
        ] {
            assert_eq!(
                parse_decimal(text),
                Err(DecimalError::InvalidInput),
                "input {text:?}"
            );
        }
    }

    #[test]
    fn test_exponent_cap() {
        let widest = parse_decimal("1e999999").unwrap();
        assert_eq!(widest.exponent(), i128::from(MAX_EXPONENT));
        assert_eq!(
            parse_decimal("1e1000000"),
            Err(DecimalError::ExponentOverflow)
        );
        assert_eq!(
            parse_decimal("1e-1000001").map(|value| value.exponent()),
            Ok(-i128::from(MAX_EXPONENT))
        );
        assert_eq!(
            parse_decimal("1e-1000002"),
            Err(DecimalError::ExponentOverflow)
        );
        // Zero has no exponent to bound
        assert_eq!(parse_decimal("0e1000000000"), Ok(Decimal::zero()));
    }

    #[test]
    fn test_trailing_zeros_fold_into_scale() {
        let text = format!("1{}", "0".repeat(500_000));
        let value = parse_decimal(&text).unwrap();
        assert_eq!(value.significant_digits(), 1);
        assert_eq!(value.exponent(), 500_001);

        let text = format!("0.{}1{}", "0".repeat(1_000), "0".repeat(500_000));
        let value = parse_decimal(&text).unwrap();
        assert_eq!(value, Decimal::from_parts(BigInt::from(1), 1_001));
    }

    #[test]
    fn test_exponent_overflow() {
        assert_eq!(
            parse_decimal("1e99999999999999999999"),
            Err(DecimalError::ExponentOverflow)
        );
        assert_eq!(
            parse_decimal("0.5e-9223372036854775807"),
            Err(DecimalError::ExponentOverflow)
        );
    }
}
