//! PropertyMapper - the entry point that runs every resolution step in order.

use std::sync::Arc;

use lazy_static::lazy_static;
use log::{debug, warn};

use super::affixes::select_affix_provider;
use super::currency::resolve_currency;
use super::digits::normalize_digits;
use super::export::{write_exported, ExportInputs};
use super::layout::{
    resolve_decimal_display, resolve_grouper, resolve_multiplier, resolve_padder,
    resolve_sign_display,
};
use super::notation::{apply_scientific, compact_notation};
use super::rounding::{resolve_rounder, RoundingInputs};
use crate::models::{IntegerWidth, Notation, PropertyBag, ResolvedConfig, Symbols};
use crate::registry::{BuiltinCurrencyData, CurrencyDataProvider};

lazy_static! {
    static ref DEFAULT_MAPPER: PropertyMapper = PropertyMapper::new();
}

/// Resolve a bag with the built-in currency data.
pub fn map_properties<'a>(bag: &'a PropertyBag, symbols: &'a Symbols) -> ResolvedConfig<'a> {
    DEFAULT_MAPPER.map(bag, symbols)
}

/// Maps legacy property bags to resolved formatter configurations.
///
/// Resolution never fails and never mutates its inputs. The mapper holds
/// only immutable currency data and can be shared across threads.
///
/// # Example
///
/// ```ignore
/// let bag = PropertyBag {
///     currency: Some("USD".into()),
///     ..Default::default()
/// };
/// let symbols = Symbols::for_locale("en-US");
///
/// let mapper = PropertyMapper::new();
/// let config = mapper.map(&bag, &symbols);
/// // config.unit = Some(USD), config.integer_width.min_int = 1
///
/// let exported = mapper.export_properties(&bag, &symbols);
/// // exported.minimum_fraction_digits = Some(2)
/// ```
#[derive(Clone)]
pub struct PropertyMapper {
    currency_data: Arc<dyn CurrencyDataProvider>,
}

impl PropertyMapper {
    /// Create a mapper backed by the built-in currency table.
    pub fn new() -> Self {
        Self::with_currency_data(Arc::new(BuiltinCurrencyData))
    }

    /// Create a mapper backed by caller-supplied currency data.
    pub fn with_currency_data(currency_data: Arc<dyn CurrencyDataProvider>) -> Self {
        Self { currency_data }
    }

    pub fn currency_data(&self) -> &dyn CurrencyDataProvider {
        self.currency_data.as_ref()
    }

    /// Resolve `bag` against `symbols`.
    pub fn map<'a>(&self, bag: &'a PropertyBag, symbols: &'a Symbols) -> ResolvedConfig<'a> {
        self.resolve(bag, symbols, None)
    }

    /// Resolve `bag` and write the effective settings into `export`.
    pub fn map_with_export<'a>(
        &self,
        bag: &'a PropertyBag,
        symbols: &'a Symbols,
        export: &mut PropertyBag,
    ) -> ResolvedConfig<'a> {
        self.resolve(bag, symbols, Some(export))
    }

    /// Copy of `bag` with the effective settings written over it.
    pub fn export_properties(&self, bag: &PropertyBag, symbols: &Symbols) -> PropertyBag {
        let mut exported = bag.clone();
        self.map_with_export(bag, symbols, &mut exported);
        exported
    }

    fn resolve<'a>(
        &self,
        bag: &'a PropertyBag,
        symbols: &'a Symbols,
        export: Option<&mut PropertyBag>,
    ) -> ResolvedConfig<'a> {
        let data = self.currency_data();

        // Affixes and currency
        let affixes = select_affix_provider(bag);
        let currency = resolve_currency(bag, symbols, &affixes, data);

        // Digits and rounding
        let currency_digits = currency
            .use_currency
            .then(|| data.fraction_digits(&currency.unit.code, currency.usage));
        let mut digits = normalize_digits(bag, currency_digits);
        let math_context = bag.math_context_or_unlimited();
        let mut rounder = resolve_rounder(
            &RoundingInputs {
                bag,
                currency: &currency,
                digits: &digits,
            },
            math_context,
        );
        // Export reports the strategy as chosen, before notation rewrites it.
        let chosen_strategy = rounder.as_ref().map(|rounder| rounder.strategy.clone());

        // Layout
        let grouper = resolve_grouper(bag);
        let padder = resolve_padder(bag);
        let decimal = resolve_decimal_display(bag);
        let sign = resolve_sign_display(bag);

        // Notation
        let mut notation = apply_scientific(bag, &mut digits, &mut rounder, math_context)
            .map(Notation::Scientific)
            .unwrap_or_default();
        let mut affix_provider = Some(affixes);
        if let Some(compact) = compact_notation(bag) {
            if notation.is_scientific() {
                warn!("Both compact and scientific notation are set; using compact notation");
            }
            notation = Notation::Compact(compact);
            affix_provider = None;
        }

        let multiplier = resolve_multiplier(bag);

        if let Some(export) = export {
            let inputs = ExportInputs {
                bag,
                math_context,
                digits: &digits,
                strategy: chosen_strategy.as_ref(),
                unit: &currency.unit,
            };
            write_exported(export, &inputs, data);
        }

        debug!(
            "Resolved property bag: currency={}, rounding={}, notation={:?}",
            currency.use_currency,
            rounder
                .as_ref()
                .map_or("default", |rounder| rounder.strategy.kind()),
            notation
        );

        ResolvedConfig {
            symbols,
            affix_provider,
            unit: currency.use_currency.then_some(currency.unit),
            rounder,
            integer_width: IntegerWidth::zero_fill_to(digits.min_int).truncate_at(digits.max_int),
            grouper,
            padder,
            decimal,
            sign,
            notation,
            multiplier,
        }
    }
}

impl Default for PropertyMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PropertyMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyMapper").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        CompactNotation, CompactStyle, CurrencyUsage, Grouper, Multiplier, RoundingStrategy,
        SignDisplay,
    };
    use crate::registry::CurrencyTable;
    use rust_decimal_macros::dec;

    fn symbols() -> Symbols {
        Symbols::for_locale("en-US")
    }

    #[test]
    fn test_empty_bag_resolves_to_defaults() {
        let bag = PropertyBag::default();
        let symbols = symbols();
        let config = map_properties(&bag, &symbols);

        assert!(config.affix_provider.is_some());
        assert!(config.unit.is_none());
        assert!(config.rounder.is_none());
        assert_eq!(config.integer_width, IntegerWidth::zero_fill_to(1));
        assert_eq!(config.grouper, Grouper::new(-1, -1, false));
        assert!(config.padder.is_none());
        assert_eq!(config.sign, SignDisplay::Auto);
        assert_eq!(config.notation, Notation::Simple);
        assert!(config.multiplier.is_none());
        assert_eq!(config.symbols.locale, "en-US");
    }

    #[test]
    fn test_currency_bag_keeps_unit_and_default_strategy() {
        let bag = PropertyBag {
            currency: Some("EUR".into()),
            grouping_size: Some(3),
            ..Default::default()
        };
        let symbols = symbols();
        let config = PropertyMapper::new().map(&bag, &symbols);

        assert_eq!(config.unit.as_ref().unwrap().code, "EUR");
        assert!(config.is_currency());
        assert_eq!(
            config.rounder.unwrap().strategy,
            RoundingStrategy::Currency {
                usage: CurrencyUsage::Standard,
                currency: None,
            }
        );
        assert!(config.grouper.is_grouping());
    }

    #[test]
    fn test_compact_clears_affixes_and_wins_over_scientific() {
        let bag = PropertyBag {
            compact_style: Some(CompactStyle::Long),
            minimum_exponent_digits: Some(1),
            ..Default::default()
        };
        let symbols = symbols();
        let config = map_properties(&bag, &symbols);

        assert!(config.affix_provider.is_none());
        assert_eq!(config.notation, Notation::Compact(CompactNotation::Long));
    }

    #[test]
    fn test_multiplier_and_sign() {
        let bag = PropertyBag {
            magnitude_multiplier: Some(2),
            sign_always_shown: true,
            ..Default::default()
        };
        let symbols = symbols();
        let config = map_properties(&bag, &symbols);
        assert_eq!(config.multiplier, Some(Multiplier::Magnitude(2)));
        assert_eq!(config.sign, SignDisplay::Always);
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let bag = PropertyBag {
            currency: Some("USD".into()),
            minimum_exponent_digits: Some(1),
            maximum_integer_digits: Some(12),
            ..Default::default()
        };
        let before = bag.clone();
        let symbols = symbols();
        let _ = PropertyMapper::new().export_properties(&bag, &symbols);
        assert_eq!(bag, before);
    }

    #[test]
    fn test_custom_currency_data() {
        let table = CurrencyTable::from_json(
            r#"{"currencies":{"DEFAULT":{"digits":2},"ABC":{"digits":4,"cashDigits":1}}}"#,
        )
        .unwrap();
        let mapper = PropertyMapper::with_currency_data(Arc::new(table));
        let bag = PropertyBag {
            currency: Some("ABC".into()),
            ..Default::default()
        };
        let symbols = symbols();
        let exported = mapper.export_properties(&bag, &symbols);
        assert_eq!(exported.minimum_fraction_digits, Some(4));
        assert_eq!(exported.maximum_fraction_digits, Some(4));

        let bag = PropertyBag {
            currency: Some("ABC".into()),
            currency_usage: Some(CurrencyUsage::Cash),
            ..Default::default()
        };
        let exported = mapper.export_properties(&bag, &symbols);
        assert_eq!(exported.minimum_fraction_digits, Some(1));
        assert_eq!(exported.maximum_fraction_digits, Some(1));
    }

    #[test]
    fn test_export_uses_strategy_chosen_before_scientific() {
        let bag = PropertyBag {
            minimum_integer_digits: Some(0),
            minimum_fraction_digits: Some(0),
            maximum_fraction_digits: Some(2),
            minimum_exponent_digits: Some(1),
            ..Default::default()
        };
        let symbols = symbols();
        let mut exported = PropertyBag::default();
        let config = PropertyMapper::new().map_with_export(&bag, &symbols, &mut exported);

        assert_eq!(
            config.rounder.unwrap().strategy,
            RoundingStrategy::Significant { min: 1, max: 3 }
        );
        assert_eq!(exported.minimum_fraction_digits, Some(1));
        assert_eq!(exported.maximum_fraction_digits, Some(2));
        assert_eq!(exported.minimum_significant_digits, None);
        assert_eq!(exported.rounding_increment, None);
    }

    #[test]
    fn test_increment_export() {
        let bag = PropertyBag {
            rounding_increment: Some(dec!(0.05)),
            ..Default::default()
        };
        let symbols = symbols();
        let exported = PropertyMapper::default().export_properties(&bag, &symbols);
        assert_eq!(exported.rounding_increment, Some(dec!(0.05)));
        assert_eq!(exported.minimum_fraction_digits, Some(2));
        assert_eq!(exported.maximum_fraction_digits, Some(2));
    }
}
