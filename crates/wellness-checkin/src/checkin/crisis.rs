use super::lexicon::CRISIS_KEYWORDS;

/// True when any crisis phrase occurs in `text`, ignoring case.
///
/// This is a keyword gate, not a classifier: it will miss phrasing outside the
/// lexicon and will fire on incidental matches such as "cut the grass".
pub fn contains_crisis(text: &str) -> bool {
    let lowered = text.to_lowercase();
    CRISIS_KEYWORDS
        .iter()
        .any(|keyword| lowered.contains(keyword))
}

/// Crisis phrases found in `text`, in lexicon order.
pub fn crisis_matches(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    CRISIS_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| lowered.contains(keyword))
        .collect()
}
