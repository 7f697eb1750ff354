//! Currency data used during resolution.
//!
//! Locale data is owned by the caller. The crate ships a small CLDR-derived
//! digit table as the default provider so that currency back-fill works out
//! of the box.

mod currency_data;

pub use currency_data::{
    BuiltinCurrencyData, CurrencyDataProvider, CurrencyTable, DEFAULT_ENTRY, MAX_CURRENCY_DIGITS,
};
