//! Guided wellness check-in: crisis screening, distress scoring, theme
//! extraction, strategy recommendation, and the session that sequences them.

pub mod crisis;
pub mod domain;
pub mod evaluation;
pub mod explain;
pub mod lexicon;
pub mod narration;
pub mod prompter;
pub mod script;
pub mod session;

#[cfg(test)]
mod tests;

pub use crisis::{contains_crisis, crisis_matches};
pub use domain::{title_case, AnswerSet, CueSet, QuestionKey, Strategy, StrategyKey, Theme};
pub use evaluation::{
    assess, choose_strategies, rank_themes, score_breakdown, score_checkin, Assessment,
    ScoreComponent, ScoreRule,
};
pub use explain::{explain_why, Explanation, ThemeEvidence};
pub use narration::{spoken_form, Narrator, SilentNarrator};
pub use prompter::{PromptError, Prompter};
pub use session::{
    CheckinReport, CheckinSession, CrisisExit, CrisisStage, SessionError, SessionOutcome,
};
