use std::sync::OnceLock;

use regex::Regex;

/// Best-effort speech output. Implementations swallow every failure: narration
/// never changes what the session does next.
pub trait Narrator {
    fn speak(&self, text: &str);

    /// Narrate at a reduced pace. Defaults to the regular pace.
    fn speak_slow(&self, text: &str) {
        self.speak(text);
    }
}

/// Narrator used when speech is disabled or unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&self, _text: &str) {}
}

fn parenthetical_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s*\([^)]*\)").expect("parenthetical pattern is valid"))
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Prompt text as it should be spoken: bracketed hints such as `(yes/no)`
/// removed and whitespace collapsed.
pub fn spoken_form(text: &str) -> String {
    let stripped = parenthetical_pattern().replace_all(text, "");
    whitespace_pattern()
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
