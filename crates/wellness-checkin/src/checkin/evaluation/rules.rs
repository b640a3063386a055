use super::super::crisis::contains_crisis;
use super::super::domain::{AnswerSet, QuestionKey};
use super::ScoreComponent;
use serde::{Deserialize, Serialize};

/// Additive distress rules, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreRule {
    SevereStress,
    ModerateStress,
    LowEnergy,
    CrisisThoughts,
    ReportedDifficulties,
}

impl ScoreRule {
    pub const fn points(self) -> u32 {
        match self {
            ScoreRule::SevereStress => 2,
            ScoreRule::ModerateStress => 1,
            ScoreRule::LowEnergy => 1,
            ScoreRule::CrisisThoughts => 3,
            ScoreRule::ReportedDifficulties => 1,
        }
    }
}

pub(crate) fn score_components(answers: &AnswerSet) -> Vec<ScoreComponent> {
    let mut components = Vec::new();

    let stress = answers.lowered(QuestionKey::Stress);
    if stress.contains("severe") {
        components.push(component(ScoreRule::SevereStress, "stress reported as severe"));
    } else if stress.contains("moderate") {
        components.push(component(
            ScoreRule::ModerateStress,
            "stress reported as moderate",
        ));
    }

    if answers.lowered(QuestionKey::Energy).contains("low") {
        components.push(component(ScoreRule::LowEnergy, "energy reported as low"));
    }

    if contains_crisis(answers.get(QuestionKey::Thoughts)) {
        components.push(component(
            ScoreRule::CrisisThoughts,
            "thoughts include crisis language",
        ));
    }

    if !answers.get(QuestionKey::Difficulties).trim().is_empty() {
        components.push(component(
            ScoreRule::ReportedDifficulties,
            "difficulties described",
        ));
    }

    components
}

fn component(rule: ScoreRule, notes: &str) -> ScoreComponent {
    ScoreComponent {
        rule,
        points: rule.points(),
        notes: notes.to_string(),
    }
}
