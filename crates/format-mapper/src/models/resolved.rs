use super::affix::AffixProvider;
use super::currency::CurrencyUnit;
use super::layout::{
    DecimalSeparatorDisplay, Grouper, IntegerWidth, Multiplier, Padder, SignDisplay,
};
use super::notation::Notation;
use super::rounding::Rounder;
use super::symbols::Symbols;

/// Fully consistent formatter settings produced from a property bag.
///
/// Borrows the bag (through the affix provider and custom compact data) and
/// the symbols it was resolved from.
#[derive(Debug, Clone)]
pub struct ResolvedConfig<'a> {
    pub symbols: &'a Symbols,
    /// Absent when compact notation supplies its own affixes.
    pub affix_provider: Option<AffixProvider<'a>>,
    /// Set only when currency mode is active.
    pub unit: Option<CurrencyUnit>,
    /// Absent when the pipeline's default rounding applies.
    pub rounder: Option<Rounder>,
    pub integer_width: IntegerWidth,
    pub grouper: Grouper,
    pub padder: Option<Padder>,
    pub decimal: DecimalSeparatorDisplay,
    pub sign: SignDisplay,
    pub notation: Notation<'a>,
    pub multiplier: Option<Multiplier>,
}

impl ResolvedConfig<'_> {
    pub fn is_currency(&self) -> bool {
        self.unit.is_some()
    }
}
