use super::domain::{CueSet, Strategy, StrategyKey, Theme};

/// Phrases that route a session straight to crisis resources. Matched as
/// lowercase substrings.
pub const CRISIS_KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end my life",
    "can't go on",
    "hopeless",
    "self-harm",
    "hurting myself",
    "overdose",
    "jump",
    "cut",
    "die",
    "ending it",
    "give up",
];

/// Strategies in recommendation order.
pub const STRATEGIES: &[Strategy] = &[
    Strategy {
        key: StrategyKey::Mindfulness,
        description:
            "Practice being present: try mindful breathing, or notice sensations around you.",
        themes: &[
            Theme::Anxiety,
            Theme::Stress,
            Theme::Overthinking,
            Theme::Panic,
        ],
    },
    Strategy {
        key: StrategyKey::Journaling,
        description: "Write down your thoughts and feelings for 5-10 minutes.",
        themes: &[Theme::Rumination, Theme::Sadness, Theme::Confusion],
    },
    Strategy {
        key: StrategyKey::ReachOut,
        description: "Connect with a friend, family member, or helpline.",
        themes: &[Theme::Loneliness, Theme::Hopelessness, Theme::Crisis],
    },
    Strategy {
        key: StrategyKey::Movement,
        description: "Move your body gently: stretch, walk, or dance for a few minutes.",
        themes: &[Theme::LowEnergy, Theme::Tension, Theme::Restlessness],
    },
    Strategy {
        key: StrategyKey::SelfCompassion,
        description: "Speak kindly to yourself as you would to a friend.",
        themes: &[Theme::SelfCriticism, Theme::Shame, Theme::Guilt],
    },
    Strategy {
        key: StrategyKey::Grounding,
        description: "Try the 5-4-3-2-1 technique: notice 5 things you see, 4 you feel, 3 you hear, 2 you smell, 1 you taste.",
        themes: &[Theme::Panic, Theme::Dissociation, Theme::Anxiety],
    },
];

/// Recommended when no theme was detected.
pub const FALLBACK_STRATEGIES: [StrategyKey; 2] = [StrategyKey::Mindfulness, StrategyKey::ReachOut];

pub const THEME_CUES: &[CueSet] = &[
    CueSet {
        theme: Theme::Anxiety,
        present: &["anx", "worry", "on edge", "keyed-up", "keyed up", "panic"],
        missing_examples: &["muscle tension", "racing thoughts", "restlessness"],
    },
    CueSet {
        theme: Theme::LowEnergy,
        present: &["low energy", "exhausted", "tired"],
        missing_examples: &["refreshing sleep", "regular meals", "light activity"],
    },
    CueSet {
        theme: Theme::Overthinking,
        present: &["overthink", "ruminat"],
        missing_examples: &["time-boxed worry", "journaling"],
    },
    CueSet {
        theme: Theme::Hopelessness,
        present: &["hopeless"],
        missing_examples: &["recent positive moments", "supportive contact"],
    },
    CueSet {
        theme: Theme::Panic,
        present: &["panic"],
        missing_examples: &["grounding technique used", "breathing exercise tried"],
    },
    CueSet {
        theme: Theme::Loneliness,
        present: &["lonely", "alone"],
        missing_examples: &["recent check-in with someone"],
    },
    CueSet {
        theme: Theme::SelfCriticism,
        present: &["self-crit", "guilt", "shame"],
        missing_examples: &["self-compassion practice"],
    },
];

/// Definition for `key`. Every key has exactly one entry in `STRATEGIES`.
pub fn strategy(key: StrategyKey) -> &'static Strategy {
    STRATEGIES
        .iter()
        .find(|strategy| strategy.key == key)
        .expect("every strategy key has a lexicon entry")
}

/// Cue set for a theme; strategy-only themes have none.
pub fn cues_for(theme: Theme) -> Option<&'static CueSet> {
    THEME_CUES.iter().find(|cues| cues.theme == theme)
}
