use std::collections::BTreeSet;

use serde::Serialize;

use super::domain::{AnswerSet, StrategyKey, Theme};
use super::lexicon::cues_for;

const MAX_EXPLAINED_THEMES: usize = 3;
const MAX_MISSING_EXAMPLES: usize = 2;

pub const GENERAL_GUIDANCE: &str = "These are generally helpful strategies for well-being.";
const SPOKEN_LEAD_IN: &str = "Here is why I suggested those.";
const HEARD_FALLBACK: &str = "general check-in responses";

/// Evidence backing one detected theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeEvidence {
    pub theme: Theme,
    /// Present cues found in the answers, deduplicated and sorted.
    pub heard: Vec<&'static str>,
    /// Suggested items nobody mentioned.
    pub missing: Vec<&'static str>,
}

impl ThemeEvidence {
    pub fn render_line(&self) -> String {
        let mut line = format!("  • {}: signals heard → ", self.theme.title());
        if self.heard.is_empty() {
            line.push_str(HEARD_FALLBACK);
        } else {
            line.push_str(&self.heard.join(", "));
        }
        if !self.missing.is_empty() {
            line.push_str("; signals not heard → ");
            line.push_str(&self.missing.join(", "));
        }
        line
    }

    pub fn render_spoken(&self) -> String {
        let mut spoken = format!("{}. ", self.theme.title());
        if self.heard.is_empty() {
            spoken.push_str("I mainly relied on your general responses. ");
        } else {
            spoken.push_str(&format!(
                "I noticed signals like {}. ",
                self.heard.join(", ")
            ));
        }
        if !self.missing.is_empty() {
            spoken.push_str(&format!(
                "I did not hear mentions of {}.",
                self.missing.join(", ")
            ));
        }
        spoken.trim_end().to_string()
    }
}

/// Why the recommended strategies were chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Explanation {
    /// No theme was detected; the fallback strategies are general advice.
    General,
    Evidence {
        strategies: Vec<StrategyKey>,
        themes: Vec<Theme>,
        evidence: Vec<ThemeEvidence>,
    },
}

impl Explanation {
    /// Lines for display, in order.
    pub fn display_lines(&self) -> Vec<String> {
        match self {
            Explanation::General => vec![GENERAL_GUIDANCE.to_string()],
            Explanation::Evidence {
                themes, evidence, ..
            } => {
                let mentioned: Vec<&str> = themes.iter().map(|theme| theme.label()).collect();
                let mut lines = vec![format!(
                    "I suggested these because you mentioned: {}.",
                    mentioned.join(", ")
                )];
                lines.extend(evidence.iter().map(ThemeEvidence::render_line));
                lines
            }
        }
    }

    /// Prose for narration, in order.
    pub fn spoken_lines(&self) -> Vec<String> {
        match self {
            Explanation::General => vec![GENERAL_GUIDANCE.to_string()],
            Explanation::Evidence { evidence, .. } => {
                let mut lines = vec![SPOKEN_LEAD_IN.to_string()];
                lines.extend(evidence.iter().map(ThemeEvidence::render_spoken));
                lines
            }
        }
    }
}

/// Builds the evidence for the first few detected themes from the raw answers.
/// Themes are taken as given and never re-derived.
pub fn explain_why(strategies: &[StrategyKey], themes: &[Theme], answers: &AnswerSet) -> Explanation {
    if themes.is_empty() {
        return Explanation::General;
    }

    let corpus = answers.corpus();
    let evidence = themes
        .iter()
        .take(MAX_EXPLAINED_THEMES)
        .map(|theme| gather_evidence(*theme, &corpus))
        .collect();

    Explanation::Evidence {
        strategies: strategies.to_vec(),
        themes: themes.to_vec(),
        evidence,
    }
}

fn gather_evidence(theme: Theme, corpus: &str) -> ThemeEvidence {
    let Some(cues) = cues_for(theme) else {
        return ThemeEvidence {
            theme,
            heard: Vec::new(),
            missing: Vec::new(),
        };
    };

    let heard: BTreeSet<&'static str> = cues
        .present
        .iter()
        .copied()
        .filter(|cue| corpus.contains(cue))
        .collect();

    let missing = cues
        .missing_examples
        .iter()
        .copied()
        .filter(|example| !corpus.contains(&example.to_lowercase()))
        .take(MAX_MISSING_EXAMPLES)
        .collect();

    ThemeEvidence {
        theme,
        heard: heard.into_iter().collect(),
        missing,
    }
}
