//! Currency mode and unit resolution.

use log::debug;

use crate::models::{
    AffixProvider, CurrencyCode, CurrencyUnit, CurrencyUsage, PropertyBag, Symbols,
    UNKNOWN_CURRENCY,
};
use crate::registry::CurrencyDataProvider;

/// Outcome of currency resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrencyResolution {
    /// Whether the bag formats a currency amount.
    pub use_currency: bool,
    /// The concrete currency, resolved even when currency mode is off.
    pub unit: CurrencyUnit,
    /// Explicit usage, else standard.
    pub usage: CurrencyUsage,
    /// Whether the usage came from the bag.
    pub explicit_usage: bool,
}

/// Decide whether currency mode is active and which currency applies.
///
/// Currency mode is on when the bag names a currency, a currency plural
/// table or a currency usage, or when an affix pattern holds a currency sign.
pub fn resolve_currency(
    bag: &PropertyBag,
    symbols: &Symbols,
    affixes: &AffixProvider<'_>,
    data: &dyn CurrencyDataProvider,
) -> CurrencyResolution {
    let use_currency = bag.currency.is_some()
        || bag.currency_plural_info.is_some()
        || bag.currency_usage.is_some()
        || affixes.has_currency_sign();

    let unit = resolve_unit(bag.currency.as_deref(), symbols, data);
    let explicit_usage = bag.currency_usage.is_some();
    let usage = bag.currency_usage.unwrap_or_default();

    if use_currency {
        debug!(
            "Currency mode active: {} ({:?}, explicit usage: {})",
            unit.code, usage, explicit_usage
        );
    }

    CurrencyResolution {
        use_currency,
        unit,
        usage,
        explicit_usage,
    }
}

/// Resolve the currency: the bag's currency, else the symbols' currency, else
/// the locale region's currency, else `XXX`.
///
/// When the result is the symbols' own currency, the symbols' display
/// overrides travel with it.
pub fn resolve_unit(
    explicit: Option<&str>,
    symbols: &Symbols,
    data: &dyn CurrencyDataProvider,
) -> CurrencyUnit {
    let code: CurrencyCode = match explicit.or(symbols.currency.as_deref()) {
        Some(code) => CurrencyCode::Owned(code.trim().to_ascii_uppercase()),
        None => symbols
            .region()
            .and_then(|region| data.currency_for_region(&region))
            .unwrap_or(CurrencyCode::Borrowed(UNKNOWN_CURRENCY)),
    };

    let mut unit = CurrencyUnit::from_code(code);
    let matches_symbols = symbols
        .currency
        .as_deref()
        .is_some_and(|own| unit.is(own.trim()));
    if matches_symbols {
        unit.symbol = symbols.currency_symbol.clone();
        unit.iso_symbol = symbols.international_currency_symbol.clone();
    }
    unit
}
