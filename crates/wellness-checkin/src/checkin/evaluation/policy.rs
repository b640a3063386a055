use super::super::domain::{StrategyKey, Theme};
use super::super::lexicon::{FALLBACK_STRATEGIES, STRATEGIES};

pub(crate) fn select_strategies(themes: &[Theme]) -> Vec<StrategyKey> {
    let selected: Vec<StrategyKey> = STRATEGIES
        .iter()
        .filter(|strategy| strategy.addresses(themes))
        .map(|strategy| strategy.key)
        .collect();

    if selected.is_empty() {
        FALLBACK_STRATEGIES.to_vec()
    } else {
        selected
    }
}
