//! Property export.
//!
//! Writes the effective values of a resolution back into a property bag so
//! callers can read settings such as the fraction digits a currency implies.

use super::digits::DigitBounds;
use crate::models::{
    CurrencyUnit, CurrencyUsage, MathContext, PropertyBag, RoundingStrategy, UNBOUNDED_EXPORT,
};
use crate::registry::CurrencyDataProvider;

/// Everything the exporter reads from a finished resolution.
#[derive(Clone, Copy, Debug)]
pub struct ExportInputs<'r> {
    pub bag: &'r PropertyBag,
    pub math_context: MathContext,
    /// Bounds after every display correction.
    pub digits: &'r DigitBounds,
    /// The strategy chosen before notation rewrote it.
    pub strategy: Option<&'r RoundingStrategy>,
    /// The resolved currency, bound to currency strategies.
    pub unit: &'r CurrencyUnit,
}

/// Write the effective rounding and digit settings into `export`.
pub fn write_exported(
    export: &mut PropertyBag,
    inputs: &ExportInputs<'_>,
    data: &dyn CurrencyDataProvider,
) {
    export.math_context = Some(inputs.math_context);
    export.rounding_mode = Some(inputs.math_context.rounding_mode);
    export.minimum_integer_digits = Some(to_exported(inputs.digits.min_int));
    export.maximum_integer_digits =
        Some(inputs.digits.max_int.map_or(UNBOUNDED_EXPORT, to_exported));

    let mut min_frac = to_exported(inputs.digits.min_frac);
    let mut max_frac = inputs.digits.max_frac.map_or(UNBOUNDED_EXPORT, to_exported);
    let mut min_sig = inputs.bag.minimum_significant_digits;
    let mut max_sig = inputs.bag.maximum_significant_digits;
    let mut increment = None;

    let concrete = inputs
        .strategy
        .map(|strategy| concretize(strategy, inputs.unit, data));
    match concrete {
        Some(RoundingStrategy::Fraction { min, max }) => {
            min_frac = to_exported(min);
            max_frac = max.map_or(UNBOUNDED_EXPORT, to_exported);
        }
        Some(RoundingStrategy::Increment(value)) => {
            min_frac = to_exported(value.scale());
            max_frac = to_exported(value.scale());
            increment = Some(value);
        }
        Some(RoundingStrategy::Significant { min, max }) => {
            min_sig = Some(to_exported(min));
            max_sig = Some(to_exported(max));
        }
        Some(RoundingStrategy::Currency { .. }) | Some(RoundingStrategy::Unlimited) | None => {}
    }

    export.minimum_fraction_digits = Some(min_frac);
    export.maximum_fraction_digits = Some(max_frac);
    export.minimum_significant_digits = min_sig;
    export.maximum_significant_digits = max_sig;
    export.rounding_increment = increment;
}

/// Bind a currency strategy to the resolved currency, turning it into the
/// fraction or increment rounding that currency uses. Any currency already
/// bound to the strategy is replaced. Other strategies are returned unchanged.
pub fn concretize(
    strategy: &RoundingStrategy,
    unit: &CurrencyUnit,
    data: &dyn CurrencyDataProvider,
) -> RoundingStrategy {
    let RoundingStrategy::Currency { usage, .. } = strategy else {
        return strategy.clone();
    };
    currency_rounding(&unit.code, *usage, data)
}

fn currency_rounding(
    code: &str,
    usage: CurrencyUsage,
    data: &dyn CurrencyDataProvider,
) -> RoundingStrategy {
    let digits = data.fraction_digits(code, usage);
    match data.rounding_increment(code, usage) {
        Some(increment) => RoundingStrategy::Increment(increment),
        None => RoundingStrategy::Fraction {
            min: digits,
            max: Some(digits),
        },
    }
}

fn to_exported(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(UNBOUNDED_EXPORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RoundingMode;
    use crate::registry::BuiltinCurrencyData;
    use rust_decimal_macros::dec;

    fn digits() -> DigitBounds {
        DigitBounds {
            min_int: 1,
            max_int: None,
            min_frac: 0,
            max_frac: None,
        }
    }

    fn export(bag: &PropertyBag, strategy: Option<&RoundingStrategy>, unit: &str) -> PropertyBag {
        let unit = CurrencyUnit::new(unit).unwrap();
        let digits = digits();
        let inputs = ExportInputs {
            bag,
            math_context: MathContext::unlimited(RoundingMode::HalfUp),
            digits: &digits,
            strategy,
            unit: &unit,
        };
        let mut exported = bag.clone();
        write_exported(&mut exported, &inputs, &BuiltinCurrencyData);
        exported
    }

    #[test]
    fn test_no_strategy_writes_normalized_bounds() {
        let bag = PropertyBag {
            minimum_significant_digits: Some(-1),
            ..Default::default()
        };
        let exported = export(&bag, None, "USD");
        assert_eq!(exported.rounding_mode, Some(RoundingMode::HalfUp));
        assert_eq!(
            exported.math_context,
            Some(MathContext::unlimited(RoundingMode::HalfUp))
        );
        assert_eq!(exported.minimum_integer_digits, Some(1));
        assert_eq!(exported.maximum_integer_digits, Some(UNBOUNDED_EXPORT));
        assert_eq!(exported.minimum_fraction_digits, Some(0));
        assert_eq!(exported.maximum_fraction_digits, Some(UNBOUNDED_EXPORT));
        // Raw significant fields pass through.
        assert_eq!(exported.minimum_significant_digits, Some(-1));
        assert_eq!(exported.maximum_significant_digits, None);
        assert_eq!(exported.rounding_increment, None);
    }

    #[test]
    fn test_increment_exports_its_scale() {
        let strategy = RoundingStrategy::Increment(dec!(0.05));
        let exported = export(&PropertyBag::default(), Some(&strategy), "USD");
        assert_eq!(exported.minimum_fraction_digits, Some(2));
        assert_eq!(exported.maximum_fraction_digits, Some(2));
        assert_eq!(exported.rounding_increment, Some(dec!(0.05)));
    }

    #[test]
    fn test_significant_exports_its_bounds() {
        let strategy = RoundingStrategy::Significant { min: 2, max: 5 };
        let exported = export(&PropertyBag::default(), Some(&strategy), "USD");
        assert_eq!(exported.minimum_significant_digits, Some(2));
        assert_eq!(exported.maximum_significant_digits, Some(5));
        assert_eq!(exported.rounding_increment, None);
    }

    #[test]
    fn test_unlimited_fraction_max_exports_as_unbounded() {
        let strategy = RoundingStrategy::Fraction { min: 1, max: None };
        let exported = export(&PropertyBag::default(), Some(&strategy), "USD");
        assert_eq!(exported.minimum_fraction_digits, Some(1));
        assert_eq!(exported.maximum_fraction_digits, Some(UNBOUNDED_EXPORT));
    }

    #[test]
    fn test_currency_strategy_is_concretized() {
        let strategy = RoundingStrategy::Currency {
            usage: CurrencyUsage::Standard,
            currency: None,
        };
        let exported = export(&PropertyBag::default(), Some(&strategy), "JPY");
        assert_eq!(exported.minimum_fraction_digits, Some(0));
        assert_eq!(exported.maximum_fraction_digits, Some(0));

        let strategy = RoundingStrategy::Currency {
            usage: CurrencyUsage::Cash,
            currency: None,
        };
        let exported = export(&PropertyBag::default(), Some(&strategy), "CHF");
        assert_eq!(exported.rounding_increment, Some(dec!(0.05)));
        assert_eq!(exported.minimum_fraction_digits, Some(2));
        assert_eq!(exported.maximum_fraction_digits, Some(2));
    }

    #[test]
    fn test_resolved_unit_replaces_bound_currency() {
        let strategy = RoundingStrategy::Currency {
            usage: CurrencyUsage::Standard,
            currency: Some(CurrencyUnit::new("KWD").unwrap()),
        };
        assert_eq!(
            concretize(&strategy, &CurrencyUnit::new("USD").unwrap(), &BuiltinCurrencyData),
            RoundingStrategy::Fraction {
                min: 2,
                max: Some(2)
            }
        );

        let exported = export(&PropertyBag::default(), Some(&strategy), "JPY");
        assert_eq!(exported.minimum_fraction_digits, Some(0));
        assert_eq!(exported.maximum_fraction_digits, Some(0));
    }

    #[test]
    fn test_cash_increment_is_normalized() {
        // DKK cash rounds to 0.5
        let strategy = RoundingStrategy::Currency {
            usage: CurrencyUsage::Cash,
            currency: None,
        };
        match concretize(&strategy, &CurrencyUnit::new("DKK").unwrap(), &BuiltinCurrencyData) {
            RoundingStrategy::Increment(increment) => {
                assert_eq!(increment, dec!(0.5));
                assert_eq!(increment.scale(), 1);
            }
            other => panic!("Expected increment, got {other:?}"),
        }

        let exported = export(&PropertyBag::default(), Some(&strategy), "DKK");
        assert_eq!(exported.rounding_increment, Some(dec!(0.5)));
        assert_eq!(exported.minimum_fraction_digits, Some(1));
        assert_eq!(exported.maximum_fraction_digits, Some(1));
    }

    #[test]
    fn test_non_currency_strategies_are_unchanged() {
        let unit = CurrencyUnit::new("USD").unwrap();
        for strategy in [
            RoundingStrategy::Unlimited,
            RoundingStrategy::Significant { min: 1, max: 3 },
            RoundingStrategy::Increment(dec!(0.25)),
        ] {
            assert_eq!(concretize(&strategy, &unit, &BuiltinCurrencyData), strategy);
        }
    }
}
