// ============================================================================
// Text Sources
// ============================================================================
//
// Text that does not parse converts to zero. This is deliberate: callers that
// need to tell "0" from garbage should use `str::parse::<Decimal>()`.

use super::ToDecimal;
use crate::numeric::Decimal;

fn text_to_decimal(text: &str) -> Decimal {
    match text.parse::<Decimal>() {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(input = text, error = %err, "unparsable decimal text, substituting zero");
            Decimal::zero()
        },
    }
}

impl ToDecimal for &str {
    #[inline]
    fn to_d(self) -> Decimal {
        text_to_decimal(self)
    }
}

impl ToDecimal for &String {
    #[inline]
    fn to_d(self) -> Decimal {
        text_to_decimal(self)
    }
}

impl ToDecimal for String {
    #[inline]
    fn to_d(self) -> Decimal {
        text_to_decimal(&self)
    }
}
