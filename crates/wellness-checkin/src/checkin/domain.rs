use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Keys of the fixed check-in schedule. Declaration order is question order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKey {
    Emotion,
    Stress,
    Energy,
    Thoughts,
    Difficulties,
}

impl QuestionKey {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Emotion,
            Self::Stress,
            Self::Energy,
            Self::Thoughts,
            Self::Difficulties,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Emotion => "emotion",
            Self::Stress => "stress",
            Self::Energy => "energy",
            Self::Thoughts => "thoughts",
            Self::Difficulties => "difficulties",
        }
    }
}

/// Free-text answers keyed by question. Iterates in question order; a key
/// that was never answered reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<QuestionKey, String>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: QuestionKey, answer: impl Into<String>) {
        self.answers.insert(key, answer.into());
    }

    pub fn get(&self, key: QuestionKey) -> &str {
        self.answers.get(&key).map(String::as_str).unwrap_or("")
    }

    /// Lowercased answer for case-insensitive substring rules.
    pub fn lowered(&self, key: QuestionKey) -> String {
        self.get(key).to_lowercase()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.answers.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        QuestionKey::ordered()
            .iter()
            .all(|key| self.answers.contains_key(key))
    }

    /// Lowercase concatenation of every answer, used as the evidence corpus.
    pub fn corpus(&self) -> String {
        self.values().collect::<Vec<_>>().join(" ").to_lowercase()
    }
}

impl<S: Into<String>> FromIterator<(QuestionKey, S)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (QuestionKey, S)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (key, answer) in iter {
            answers.insert(key, answer);
        }
        answers
    }
}

/// Closed set of emotional themes. The first seven are produced by theme
/// extraction; the rest only appear in strategy definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[serde(rename = "anxiety")]
    Anxiety,
    #[serde(rename = "low energy")]
    LowEnergy,
    #[serde(rename = "overthinking")]
    Overthinking,
    #[serde(rename = "hopelessness")]
    Hopelessness,
    #[serde(rename = "panic")]
    Panic,
    #[serde(rename = "loneliness")]
    Loneliness,
    #[serde(rename = "self-criticism")]
    SelfCriticism,
    #[serde(rename = "stress")]
    Stress,
    #[serde(rename = "rumination")]
    Rumination,
    #[serde(rename = "sadness")]
    Sadness,
    #[serde(rename = "confusion")]
    Confusion,
    #[serde(rename = "crisis")]
    Crisis,
    #[serde(rename = "tension")]
    Tension,
    #[serde(rename = "restlessness")]
    Restlessness,
    #[serde(rename = "shame")]
    Shame,
    #[serde(rename = "guilt")]
    Guilt,
    #[serde(rename = "dissociation")]
    Dissociation,
}

impl Theme {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Anxiety => "anxiety",
            Self::LowEnergy => "low energy",
            Self::Overthinking => "overthinking",
            Self::Hopelessness => "hopelessness",
            Self::Panic => "panic",
            Self::Loneliness => "loneliness",
            Self::SelfCriticism => "self-criticism",
            Self::Stress => "stress",
            Self::Rumination => "rumination",
            Self::Sadness => "sadness",
            Self::Confusion => "confusion",
            Self::Crisis => "crisis",
            Self::Tension => "tension",
            Self::Restlessness => "restlessness",
            Self::Shame => "shame",
            Self::Guilt => "guilt",
            Self::Dissociation => "dissociation",
        }
    }

    pub fn title(self) -> String {
        title_case(self.label())
    }
}

/// Identifier of a coping strategy. Declaration order is recommendation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKey {
    #[serde(rename = "mindfulness")]
    Mindfulness,
    #[serde(rename = "journaling")]
    Journaling,
    #[serde(rename = "reach out")]
    ReachOut,
    #[serde(rename = "movement")]
    Movement,
    #[serde(rename = "self-compassion")]
    SelfCompassion,
    #[serde(rename = "grounding")]
    Grounding,
}

impl StrategyKey {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mindfulness => "mindfulness",
            Self::Journaling => "journaling",
            Self::ReachOut => "reach out",
            Self::Movement => "movement",
            Self::SelfCompassion => "self-compassion",
            Self::Grounding => "grounding",
        }
    }

    pub fn title(self) -> String {
        title_case(self.label())
    }

    /// Resolve a key from a label in any letter case, e.g. `"Reach Out"`.
    pub fn from_label(raw: &str) -> Option<Self> {
        let wanted = raw.trim().to_lowercase();
        super::lexicon::STRATEGIES
            .iter()
            .map(|strategy| strategy.key)
            .find(|key| key.label() == wanted)
    }
}

/// Static coping strategy definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strategy {
    pub key: StrategyKey,
    pub description: &'static str,
    pub themes: &'static [Theme],
}

impl Strategy {
    pub fn addresses(&self, themes: &[Theme]) -> bool {
        self.themes.iter().any(|theme| themes.contains(theme))
    }
}

/// Evidence cues for one theme: substrings that signal it, and plain-language
/// items whose absence is worth pointing out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueSet {
    pub theme: Theme,
    pub present: &'static [&'static str],
    pub missing_examples: &'static [&'static str],
}

/// Capitalises the first letter of every alphabetic run, so `"self-compassion"`
/// becomes `"Self-Compassion"` and `"reach out"` becomes `"Reach Out"`.
pub fn title_case(raw: &str) -> String {
    let mut titled = String::with_capacity(raw.len());
    let mut at_word_start = true;
    for ch in raw.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                titled.extend(ch.to_uppercase());
            } else {
                titled.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            titled.push(ch);
            at_word_start = true;
        }
    }
    titled
}
