use super::super::domain::{AnswerSet, QuestionKey, Theme};

/// One extraction rule: a trigger substring looked up in a single answer field.
struct ThemeRule {
    field: QuestionKey,
    trigger: &'static str,
    theme: Theme,
}

const THEME_RULES: &[ThemeRule] = &[
    ThemeRule {
        field: QuestionKey::Stress,
        trigger: "anx",
        theme: Theme::Anxiety,
    },
    ThemeRule {
        field: QuestionKey::Energy,
        trigger: "low",
        theme: Theme::LowEnergy,
    },
    ThemeRule {
        field: QuestionKey::Thoughts,
        trigger: "overthink",
        theme: Theme::Overthinking,
    },
    ThemeRule {
        field: QuestionKey::Emotion,
        trigger: "hopeless",
        theme: Theme::Hopelessness,
    },
    ThemeRule {
        field: QuestionKey::Emotion,
        trigger: "panic",
        theme: Theme::Panic,
    },
    ThemeRule {
        field: QuestionKey::Emotion,
        trigger: "lonely",
        theme: Theme::Loneliness,
    },
    ThemeRule {
        field: QuestionKey::Thoughts,
        trigger: "self-crit",
        theme: Theme::SelfCriticism,
    },
];

pub(crate) fn extract_themes(answers: &AnswerSet) -> Vec<Theme> {
    THEME_RULES
        .iter()
        .filter(|rule| answers.lowered(rule.field).contains(rule.trigger))
        .map(|rule| rule.theme)
        .collect()
}
