// ============================================================================
// To-Decimal Library
// Conversions from built-in values into arbitrary-precision decimals
// ============================================================================

//! # To-Decimal
//!
//! One conversion entry point per source type, all landing on
//! [`numeric::Decimal`], an arbitrary-precision base-10 value.
//!
//! ## Conversions
//!
//! - **Integers** convert exactly
//! - **Floats** keep `f64::DIGITS` (15) significant digits unless told otherwise
//! - **Text** parses, and silently becomes zero when it does not
//! - **Ratios** require an explicit number of significant digits
//! - **Decimals** convert to themselves, and render as plain digits with `to_digits`
//!
//! ## Example
//!
//! ```rust
//! use to_decimal::prelude::*;
//! use num_rational::Ratio;
//!
//! assert_eq!(42i64.to_d().to_string(), "0.42e2");
//! assert_eq!(0.5f64.to_d().to_string(), "0.5e0");
//! assert_eq!("0.5".to_d().to_digits(), "0.5");
//!
//! // Unparsable text is zero, not an error
//! assert!("not a number".to_d().is_zero());
//!
//! let r = Ratio::new(7077085128725065i64, 2251799813685248);
//! assert_eq!(r.to_d(3).unwrap().to_digits(), "3.14");
//!
//! let third = (1.0f64 / 3.0).to_d_with_precision(4);
//! assert_eq!(third.to_digits(), "0.3333");
//! ```

pub mod convert;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::convert::{ConversionConfig, FloatToDecimal, RatioToDecimal, ToDecimal};
    pub use crate::numeric::{Decimal, DecimalError, DecimalResult, Rounding};
}
