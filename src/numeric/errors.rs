// ============================================================================
// Decimal Errors
// Error types for decimal construction and parsing
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing a [`Decimal`](super::Decimal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Input text is not a valid decimal literal
    InvalidInput,
    /// Requested significant-digit count is not usable
    InvalidPrecision,
    /// Ratio with a zero denominator
    DivisionByZero,
    /// Exponent does not fit the decimal's scale
    ExponentOverflow,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::InvalidInput => write!(f, "invalid input: could not parse value"),
            DecimalError::InvalidPrecision => {
                write!(f, "invalid precision: at least one significant digit is required")
            },
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::ExponentOverflow => {
                write!(f, "exponent overflow: scale exceeds the representable range")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal construction
pub type DecimalResult<T> = Result<T, DecimalError>;
