// ============================================================================
// Rounding Modes
// Configurable wrapper over bigdecimal's rounding modes
// ============================================================================

use bigdecimal::RoundingMode;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rounding mode applied when a value is cut to a number of significant digits.
///
/// Mirrors [`bigdecimal::RoundingMode`], adding a fixed default
/// ([`Rounding::HalfUp`]) and serde support for configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Away from zero
    Up,
    /// Toward zero (truncate)
    Down,
    /// To nearest, ties away from zero
    #[default]
    HalfUp,
    /// To nearest, ties toward zero
    HalfDown,
    /// To nearest, ties to the even neighbour (banker's rounding)
    HalfEven,
    /// Toward positive infinity
    Ceiling,
    /// Toward negative infinity
    Floor,
}

impl From<Rounding> for RoundingMode {
    fn from(rounding: Rounding) -> Self {
        match rounding {
            Rounding::Up => RoundingMode::Up,
            Rounding::Down => RoundingMode::Down,
            Rounding::HalfUp => RoundingMode::HalfUp,
            Rounding::HalfDown => RoundingMode::HalfDown,
            Rounding::HalfEven => RoundingMode::HalfEven,
            Rounding::Ceiling => RoundingMode::Ceiling,
            Rounding::Floor => RoundingMode::Floor,
        }
    }
}
