//! Rounding strategy selection.
//!
//! Exactly one strategy is picked by walking an ordered rule list and
//! stopping at the first rule whose predicate holds:
//!
//! 1. Explicit currency usage -> currency strategy bound to the resolved currency
//! 2. Explicit rounding increment -> increment
//! 3. Explicit significant digits -> significant (clamped)
//! 4. Explicit fraction digits -> fraction (normalized)
//! 5. Currency mode -> currency strategy with standard usage
//!
//! When no rule matches the pipeline's default rounding applies. Usage and
//! increment come first because they are the most specific intents and must
//! win over fraction digits that may have been back-filled from the currency.

use log::debug;

use super::currency::CurrencyResolution;
use super::digits::{clamp_significant, DigitBounds};
use crate::models::{CurrencyUsage, MathContext, PropertyBag, Rounder, RoundingStrategy};

/// Everything the rounding rules look at.
#[derive(Clone, Copy, Debug)]
pub struct RoundingInputs<'r> {
    pub bag: &'r PropertyBag,
    pub currency: &'r CurrencyResolution,
    pub digits: &'r DigitBounds,
}

/// One entry of the priority chain.
#[derive(Clone, Copy)]
pub struct RoundingRule {
    pub name: &'static str,
    applies: fn(&RoundingInputs<'_>) -> bool,
    build: fn(&RoundingInputs<'_>) -> RoundingStrategy,
}

impl RoundingRule {
    pub fn applies(&self, inputs: &RoundingInputs<'_>) -> bool {
        (self.applies)(inputs)
    }

    pub fn build(&self, inputs: &RoundingInputs<'_>) -> RoundingStrategy {
        (self.build)(inputs)
    }
}

impl std::fmt::Debug for RoundingRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundingRule")
            .field("name", &self.name)
            .finish()
    }
}

/// The priority chain, highest priority first.
pub static ROUNDING_RULES: [RoundingRule; 5] = [
    RoundingRule {
        name: "explicit-currency-usage",
        applies: |inputs| inputs.currency.explicit_usage,
        build: |inputs| RoundingStrategy::Currency {
            usage: inputs.currency.usage,
            currency: Some(inputs.currency.unit.clone()),
        },
    },
    RoundingRule {
        name: "explicit-increment",
        applies: |inputs| inputs.bag.effective_rounding_increment().is_some(),
        build: |inputs| match inputs.bag.effective_rounding_increment() {
            Some(increment) => RoundingStrategy::Increment(increment),
            None => RoundingStrategy::Unlimited,
        },
    },
    RoundingRule {
        name: "explicit-significant-digits",
        applies: |inputs| inputs.bag.has_explicit_significant_digits(),
        build: |inputs| {
            let (min, max) = clamp_significant(
                inputs.bag.minimum_significant_digits,
                inputs.bag.maximum_significant_digits,
            );
            RoundingStrategy::Significant { min, max }
        },
    },
    RoundingRule {
        name: "explicit-fraction-digits",
        applies: |inputs| inputs.bag.has_explicit_fraction_digits(),
        build: |inputs| RoundingStrategy::Fraction {
            min: inputs.digits.min_frac,
            max: inputs.digits.max_frac,
        },
    },
    RoundingRule {
        name: "currency-default",
        applies: |inputs| inputs.currency.use_currency,
        build: |_| RoundingStrategy::Currency {
            usage: CurrencyUsage::Standard,
            currency: None,
        },
    },
];

/// Walk the chain and return the first matching rule with its strategy.
pub fn select_strategy(
    inputs: &RoundingInputs<'_>,
) -> Option<(&'static RoundingRule, RoundingStrategy)> {
    ROUNDING_RULES
        .iter()
        .find(|rule| rule.applies(inputs))
        .map(|rule| (rule, rule.build(inputs)))
}

/// Select a strategy and bind it to the math context.
pub fn resolve_rounder(inputs: &RoundingInputs<'_>, math_context: MathContext) -> Option<Rounder> {
    match select_strategy(inputs) {
        Some((rule, strategy)) => {
            debug!(
                "Rounding rule '{}' selected {} strategy",
                rule.name,
                strategy.kind()
            );
            Some(Rounder::new(strategy, math_context))
        }
        None => {
            debug!("No rounding rule matched; using the pipeline default");
            None
        }
    }
}
