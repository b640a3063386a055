mod policy;
mod rules;
mod themes;

pub use rules::ScoreRule;

use super::domain::{AnswerSet, StrategyKey, Theme};
use serde::{Deserialize, Serialize};

/// Discrete contribution to the distress score, kept for transparent logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoreRule,
    pub points: u32,
    pub notes: String,
}

/// Everything derived from a completed answer set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub score: u32,
    pub components: Vec<ScoreComponent>,
    pub themes: Vec<Theme>,
    pub strategies: Vec<StrategyKey>,
}

/// Runs the scorer, theme extractor, and strategy selector over one answer set.
pub fn assess(answers: &AnswerSet) -> Assessment {
    let components = score_breakdown(answers);
    let score = components.iter().map(|component| component.points).sum();
    let themes = rank_themes(answers);
    let strategies = choose_strategies(&themes);

    Assessment {
        score,
        components,
        themes,
        strategies,
    }
}

/// Distress score; higher means more distress. Pure function of the answers.
pub fn score_checkin(answers: &AnswerSet) -> u32 {
    score_breakdown(answers)
        .iter()
        .map(|component| component.points)
        .sum()
}

/// The rules that fired for `answers`, in evaluation order.
pub fn score_breakdown(answers: &AnswerSet) -> Vec<ScoreComponent> {
    rules::score_components(answers)
}

/// Themes detected in `answers`, in rule order. Each theme appears at most once.
pub fn rank_themes(answers: &AnswerSet) -> Vec<Theme> {
    themes::extract_themes(answers)
}

/// Strategies whose themes overlap `themes`, in lexicon order, falling back to
/// mindfulness and reaching out when nothing overlaps.
pub fn choose_strategies(themes: &[Theme]) -> Vec<StrategyKey> {
    policy::select_strategies(themes)
}
