use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::{CurrencyUnit, CurrencyUsage};

/// Rounding mode applied when a value has more digits than the strategy keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingMode {
    Up,
    Down,
    Ceiling,
    Floor,
    HalfUp,
    HalfDown,
    #[default]
    HalfEven,
    Unnecessary,
}

/// Numeric precision and rounding mode bound to a rounding strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MathContext {
    /// Maximum number of significant digits; 0 means unlimited.
    pub precision: u32,
    pub rounding_mode: RoundingMode,
}

impl MathContext {
    /// Unlimited precision with the given rounding mode.
    pub fn unlimited(rounding_mode: RoundingMode) -> Self {
        Self {
            precision: 0,
            rounding_mode,
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.precision == 0
    }
}

/// How a formatted value is rounded. Exactly one strategy is chosen per
/// resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundingStrategy {
    /// Round to between `min` and `max` fraction digits; `max: None` keeps
    /// every fraction digit.
    Fraction { min: u32, max: Option<u32> },
    /// Round to between `min` and `max` significant digits.
    Significant { min: u32, max: u32 },
    /// Round to the nearest multiple of the increment.
    Increment(Decimal),
    /// Use the currency's own digits and increment for the given usage.
    /// The currency may be bound later by the formatting pipeline.
    Currency {
        usage: CurrencyUsage,
        currency: Option<CurrencyUnit>,
    },
    /// No rounding at all.
    Unlimited,
}

impl RoundingStrategy {
    pub fn is_fraction(&self) -> bool {
        matches!(self, Self::Fraction { .. })
    }

    /// Short label used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Fraction { .. } => "fraction",
            Self::Significant { .. } => "significant",
            Self::Increment(_) => "increment",
            Self::Currency { .. } => "currency",
            Self::Unlimited => "unlimited",
        }
    }
}

/// A rounding strategy together with its math context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rounder {
    pub strategy: RoundingStrategy,
    pub math_context: MathContext,
}

impl Rounder {
    pub fn new(strategy: RoundingStrategy, math_context: MathContext) -> Self {
        Self {
            strategy,
            math_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_math_context_is_unlimited_half_even() {
        let mc = MathContext::default();
        assert!(mc.is_unlimited());
        assert_eq!(mc.rounding_mode, RoundingMode::HalfEven);
    }

    #[test]
    fn test_rounding_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&RoundingMode::HalfUp).unwrap(),
            "\"HALF_UP\""
        );
        let mc: MathContext =
            serde_json::from_str(r#"{"precision":5,"roundingMode":"CEILING"}"#).unwrap();
        assert_eq!(mc.precision, 5);
        assert_eq!(mc.rounding_mode, RoundingMode::Ceiling);
    }

    #[test]
    fn test_strategy_kind() {
        assert!(RoundingStrategy::Fraction { min: 0, max: Some(2) }.is_fraction());
        assert!(!RoundingStrategy::Unlimited.is_fraction());
        assert_eq!(
            RoundingStrategy::Significant { min: 1, max: 3 }.kind(),
            "significant"
        );
    }
}
