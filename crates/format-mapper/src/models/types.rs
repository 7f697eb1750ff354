use std::borrow::Cow;

/// Currency code (ISO 4217) - mostly static
pub type CurrencyCode = Cow<'static, str>;

/// Shared upper bound for integer, fraction and significant digit counts.
///
/// Integer and fraction counts above the bound collapse to "unbounded",
/// significant counts collapse to the bound itself.
pub const MAX_INT_FRAC_SIG: u32 = 999;

/// Value written to exported bags for an unbounded digit count.
pub const UNBOUNDED_EXPORT: i32 = i32::MAX;

/// Currency code used when neither the bag, the symbols nor the locale name one.
pub const UNKNOWN_CURRENCY: &str = "XXX";
