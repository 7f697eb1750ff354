//! Affix source selection.

use crate::models::{
    AffixProvider, CurrencyPluralAffixProvider, PropertiesAffixProvider, PropertyBag,
};

/// Pick the affix provider for a bag.
///
/// A currency plural table takes over the affixes entirely; otherwise the
/// provider reads the bag's affix fields in place.
pub fn select_affix_provider(bag: &PropertyBag) -> AffixProvider<'_> {
    match &bag.currency_plural_info {
        Some(info) => AffixProvider::CurrencyPlural(CurrencyPluralAffixProvider::new(info)),
        None => AffixProvider::Properties(PropertiesAffixProvider::new(bag)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AffixField, AffixPatterns, CurrencyPluralInfo, PluralCategory};

    #[test]
    fn test_selects_properties_provider_by_default() {
        let bag = PropertyBag {
            positive_suffix_pattern: Some("%".to_string()),
            ..Default::default()
        };
        let provider = select_affix_provider(&bag);
        assert!(matches!(provider, AffixProvider::Properties(_)));
        assert_eq!(
            provider.affix(AffixField::PositiveSuffix, PluralCategory::Other),
            "%"
        );
        assert!(!provider.has_currency_sign());
    }

    #[test]
    fn test_selects_plural_provider_when_table_present() {
        let mut info = CurrencyPluralInfo::new();
        info.insert(
            PluralCategory::Other,
            AffixPatterns {
                positive_suffix: " ¤¤¤".to_string(),
                ..Default::default()
            },
        );
        let bag = PropertyBag {
            currency_plural_info: Some(info),
            // Ignored once a plural table is present.
            positive_suffix_pattern: Some("%".to_string()),
            ..Default::default()
        };
        let provider = select_affix_provider(&bag);
        assert!(matches!(provider, AffixProvider::CurrencyPlural(_)));
        assert_eq!(
            provider.affix(AffixField::PositiveSuffix, PluralCategory::One),
            " ¤¤¤"
        );
        assert!(provider.has_currency_sign());
    }
}
