//! Affix providers.
//!
//! An affix provider answers the prefix and suffix patterns the formatting
//! pipeline wraps around a number. Patterns use the affix quoting rules:
//! text between single quotes is literal, `''` is a literal quote, and an
//! unquoted `¤` is a currency placeholder.

use std::borrow::Cow;

use super::bag::{AffixPatterns, CurrencyPluralInfo, PluralCategory, PropertyBag};

const CURRENCY_SIGN: char = '¤';

/// Which of the four affixes is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixField {
    PositivePrefix,
    PositiveSuffix,
    NegativePrefix,
    NegativeSuffix,
}

impl AffixField {
    pub const ALL: [AffixField; 4] = [
        AffixField::PositivePrefix,
        AffixField::PositiveSuffix,
        AffixField::NegativePrefix,
        AffixField::NegativeSuffix,
    ];
}

/// Quote a literal string so that none of its characters is read as a
/// pattern symbol.
pub fn escape_affix(literal: &str) -> String {
    let mut output = String::with_capacity(literal.len() + 2);
    let mut quoted = false;
    for c in literal.chars() {
        match c {
            '\'' => output.push_str("''"),
            '-' | '+' | '%' | '‰' | CURRENCY_SIGN => {
                if !quoted {
                    output.push('\'');
                    quoted = true;
                }
                output.push(c);
            }
            _ => {
                if quoted {
                    output.push('\'');
                    quoted = false;
                }
                output.push(c);
            }
        }
    }
    if quoted {
        output.push('\'');
    }
    output
}

/// Whether an affix pattern contains an unquoted currency placeholder.
pub fn has_currency_symbols(pattern: &str) -> bool {
    let mut quoted = false;
    let mut chars = pattern.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                } else {
                    quoted = !quoted;
                }
            }
            CURRENCY_SIGN if !quoted => return true,
            _ => {}
        }
    }
    false
}

/// Affixes read directly from a property bag.
///
/// Literal affixes win over patterns. A missing negative prefix is the
/// resolved positive prefix preceded by a minus sign; a missing negative
/// suffix repeats the resolved positive suffix.
#[derive(Debug, Clone, Copy)]
pub struct PropertiesAffixProvider<'a> {
    bag: &'a PropertyBag,
}

impl<'a> PropertiesAffixProvider<'a> {
    pub fn new(bag: &'a PropertyBag) -> Self {
        Self { bag }
    }

    pub fn affix(&self, field: AffixField) -> Cow<'a, str> {
        if let Some(affix) = self.explicit(field) {
            return affix;
        }
        match field {
            AffixField::PositivePrefix | AffixField::PositiveSuffix => Cow::Borrowed(""),
            AffixField::NegativePrefix => {
                Cow::Owned(format!("-{}", self.affix(AffixField::PositivePrefix)))
            }
            AffixField::NegativeSuffix => self.affix(AffixField::PositiveSuffix),
        }
    }

    /// The escaped literal, else the pattern, for one field.
    fn explicit(&self, field: AffixField) -> Option<Cow<'a, str>> {
        let bag = self.bag;
        let (literal, pattern) = match field {
            AffixField::PositivePrefix => (&bag.positive_prefix, &bag.positive_prefix_pattern),
            AffixField::PositiveSuffix => (&bag.positive_suffix, &bag.positive_suffix_pattern),
            AffixField::NegativePrefix => (&bag.negative_prefix, &bag.negative_prefix_pattern),
            AffixField::NegativeSuffix => (&bag.negative_suffix, &bag.negative_suffix_pattern),
        };
        match (literal, pattern) {
            (Some(literal), _) => Some(Cow::Owned(escape_affix(literal))),
            (None, Some(pattern)) => Some(Cow::Borrowed(pattern.as_str())),
            (None, None) => None,
        }
    }

    /// Checks the affixes as resolved, so a literal hides its pattern.
    pub fn has_currency_sign(&self) -> bool {
        AffixField::ALL
            .into_iter()
            .any(|field| has_currency_symbols(&self.affix(field)))
    }

    pub fn has_negative_subpattern(&self) -> bool {
        let bag = self.bag;
        bag.negative_prefix.is_some()
            || bag.negative_suffix.is_some()
            || bag.negative_prefix_pattern.is_some()
            || bag.negative_suffix_pattern.is_some()
    }
}

/// Affixes chosen per plural form from a currency plural table.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyPluralAffixProvider<'a> {
    info: &'a CurrencyPluralInfo,
}

impl<'a> CurrencyPluralAffixProvider<'a> {
    pub fn new(info: &'a CurrencyPluralInfo) -> Self {
        Self { info }
    }

    pub fn affix(&self, field: AffixField, plural: PluralCategory) -> Cow<'a, str> {
        let Some(patterns) = self.info.get(plural) else {
            return match field {
                AffixField::NegativePrefix => Cow::Borrowed("-"),
                _ => Cow::Borrowed(""),
            };
        };
        Self::pick(patterns, field)
    }

    fn pick(patterns: &'a AffixPatterns, field: AffixField) -> Cow<'a, str> {
        match field {
            AffixField::PositivePrefix => Cow::Borrowed(patterns.positive_prefix.as_str()),
            AffixField::PositiveSuffix => Cow::Borrowed(patterns.positive_suffix.as_str()),
            AffixField::NegativePrefix => match &patterns.negative_prefix {
                Some(prefix) => Cow::Borrowed(prefix.as_str()),
                None => Cow::Owned(format!("-{}", patterns.positive_prefix)),
            },
            AffixField::NegativeSuffix => match &patterns.negative_suffix {
                Some(suffix) => Cow::Borrowed(suffix.as_str()),
                None => Cow::Borrowed(patterns.positive_suffix.as_str()),
            },
        }
    }

    /// Decided by the `other` form alone.
    pub fn has_currency_sign(&self) -> bool {
        self.other().is_some_and(|patterns| {
            AffixField::ALL
                .into_iter()
                .any(|field| has_currency_symbols(&Self::pick(patterns, field)))
        })
    }

    /// Decided by the `other` form alone.
    pub fn has_negative_subpattern(&self) -> bool {
        self.other()
            .is_some_and(|p| p.negative_prefix.is_some() || p.negative_suffix.is_some())
    }

    fn other(&self) -> Option<&'a AffixPatterns> {
        self.info.patterns.get(&PluralCategory::Other)
    }
}

/// The affix source selected for a bag.
#[derive(Debug, Clone, Copy)]
pub enum AffixProvider<'a> {
    Properties(PropertiesAffixProvider<'a>),
    CurrencyPlural(CurrencyPluralAffixProvider<'a>),
}

impl<'a> AffixProvider<'a> {
    /// Affix pattern for a field. The plural form only matters for currency
    /// plural tables.
    pub fn affix(&self, field: AffixField, plural: PluralCategory) -> Cow<'a, str> {
        match self {
            Self::Properties(provider) => provider.affix(field),
            Self::CurrencyPlural(provider) => provider.affix(field, plural),
        }
    }

    pub fn has_currency_sign(&self) -> bool {
        match self {
            Self::Properties(provider) => provider.has_currency_sign(),
            Self::CurrencyPlural(provider) => provider.has_currency_sign(),
        }
    }

    pub fn has_negative_subpattern(&self) -> bool {
        match self {
            Self::Properties(provider) => provider.has_negative_subpattern(),
            Self::CurrencyPlural(provider) => provider.has_negative_subpattern(),
        }
    }
}
