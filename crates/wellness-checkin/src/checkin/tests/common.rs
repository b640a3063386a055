use std::cell::RefCell;
use std::collections::VecDeque;

use crate::checkin::domain::{AnswerSet, QuestionKey};
use crate::checkin::narration::Narrator;
use crate::checkin::prompter::{PromptError, Prompter};
use crate::checkin::session::CheckinSession;

/// Prompter that replays canned replies and records everything it displayed.
#[derive(Debug, Default)]
pub(super) struct ScriptedPrompter {
    replies: VecDeque<String>,
    pub(super) asked: Vec<String>,
    pub(super) shown: Vec<String>,
}

impl ScriptedPrompter {
    pub(super) fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: replies.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
            shown: Vec::new(),
        }
    }

    pub(super) fn showed(&self, needle: &str) -> bool {
        self.shown.iter().any(|line| line.contains(needle))
    }

    /// Index of the first displayed line containing `needle`.
    pub(super) fn shown_at(&self, needle: &str) -> usize {
        self.shown
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("{needle:?} was never shown"))
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.asked.push(prompt.to_string());
        self.replies
            .pop_front()
            .map(|reply| reply.trim().to_string())
            .ok_or(PromptError::Closed)
    }

    fn show(&mut self, text: &str) -> Result<(), PromptError> {
        self.shown.push(text.to_string());
        Ok(())
    }
}

/// Narrator that remembers what it was asked to say, split by pace.
#[derive(Debug, Default)]
pub(super) struct RecordingNarrator {
    pub(super) spoken: RefCell<Vec<String>>,
    pub(super) spoken_slow: RefCell<Vec<String>>,
}

impl Narrator for RecordingNarrator {
    fn speak(&self, text: &str) {
        self.spoken.borrow_mut().push(text.to_string());
    }

    fn speak_slow(&self, text: &str) {
        self.spoken_slow.borrow_mut().push(text.to_string());
    }
}

pub(super) fn session<I, S>(replies: I) -> CheckinSession<ScriptedPrompter, RecordingNarrator>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CheckinSession::new(ScriptedPrompter::new(replies), RecordingNarrator::default())
}

pub(super) fn answers(
    emotion: &str,
    stress: &str,
    energy: &str,
    thoughts: &str,
    difficulties: &str,
) -> AnswerSet {
    [
        (QuestionKey::Emotion, emotion),
        (QuestionKey::Stress, stress),
        (QuestionKey::Energy, energy),
        (QuestionKey::Thoughts, thoughts),
        (QuestionKey::Difficulties, difficulties),
    ]
    .into_iter()
    .collect()
}

/// Answers from the worked example: moderate stress, low energy, a deadline.
pub(super) fn overwhelmed_answers() -> AnswerSet {
    answers(
        "anxious and overwhelmed",
        "moderate",
        "low",
        "racing thoughts",
        "work deadline",
    )
}
