//! Fixed conversation copy: the check-in schedule, follow-up rules, and the
//! lines the session shows and speaks at each step.

use super::domain::{AnswerSet, QuestionKey};

/// A check-in question and the answer key it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckinQuestion {
    pub key: QuestionKey,
    pub prompt: &'static str,
}

pub const CHECKIN_QUESTIONS: [CheckinQuestion; 5] = [
    CheckinQuestion {
        key: QuestionKey::Emotion,
        prompt: "How are you feeling emotionally right now?",
    },
    CheckinQuestion {
        key: QuestionKey::Stress,
        prompt: "Are you experiencing any stress or anxiety? (none/mild/moderate/severe)",
    },
    CheckinQuestion {
        key: QuestionKey::Energy,
        prompt: "How is your energy level? (low/ok/high)",
    },
    CheckinQuestion {
        key: QuestionKey::Thoughts,
        prompt: "Are you having any thoughts that are hard to manage?",
    },
    CheckinQuestion {
        key: QuestionKey::Difficulties,
        prompt: "Is there anything making things especially difficult today?",
    },
];

pub const GREETING: [&str; 2] = [
    "Hello, I'm here to support your mental wellness today.",
    "Let's do a quick check-in. You can type as much or as little as you like.",
];

pub const SUMMARY_PREFIX: &str = "It sounds like: ";
pub const SUMMARY_ACKNOWLEDGEMENT: &str = "Thanks for sharing. I'll tailor suggestions based on that.";
pub const FOLLOW_UP_ANNOUNCEMENT: &str =
    "I'll ask a couple of quick follow-up questions to tailor things.";
pub const FOLLOW_UP_THANKS: &str = "Thank you for sharing more.";

pub const RECOMMENDATION_HEADER: &str =
    "Based on what you shared, here are some personalized suggestions:";
pub const RECOMMENDATION_LIST_HEADER: &str =
    "Here are some things you might try to support yourself:";
pub const EXPLANATION_HEADER: &str = "Here's why I suggested those strategies:";
pub const EXPLANATION_SPOKEN_HEADER: &str = "Here's why I suggested those strategies.";

pub const EXERCISE_OFFER: &str = "If you'd like, we can try one strategy together now.";
pub const EXERCISE_QUESTION: &str = "Would you like to try one of these strategies now?";
pub const EXERCISE_PICK: &str = "Which would you like to try?";
pub const YES: &str = "yes";
pub const NO: &str = "no";

pub const CLOSING: [&str; 3] = [
    "Before we wrap up, just a quick reminder:",
    "Thank you for checking in today. Remember, you're not alone.",
    "If things feel hard, reaching out to a professional or a trusted person can help.",
];

pub const CRISIS_MESSAGE: &str = "It sounds like you might be in a lot of pain. \
If you are thinking about harming yourself, please reach out for support. \
You can call the Suicide & Crisis Lifeline at 988 (in the US), or visit https://988lifeline.org/. \
You are not alone, always remember that.";

pub const CRISIS_SPOKEN: [&str; 2] = [
    "If you're in immediate danger, please call your local emergency number.",
    "Here are some resources you can reach out to right now.",
];

const SEVERE_STRESS_FOLLOW_UP: &str =
    "I'm sorry to hear your stress feels severe. Would you like to share more about what's causing it?";
const LOW_ENERGY_FOLLOW_UP: &str =
    "Low energy can be tough. Have you been able to rest or take care of yourself lately?";
const DIFFICULTIES_FOLLOW_UP: &str =
    "Thank you for sharing what's difficult. Is there any support you wish you had right now?";

/// Follow-up questions triggered by the check-in answers, in asking order.
/// Each condition is independent.
pub fn follow_up_questions(answers: &AnswerSet) -> Vec<&'static str> {
    let mut questions = Vec::new();
    if answers.lowered(QuestionKey::Stress).contains("severe") {
        questions.push(SEVERE_STRESS_FOLLOW_UP);
    }
    if answers.lowered(QuestionKey::Energy).contains("low") {
        questions.push(LOW_ENERGY_FOLLOW_UP);
    }
    if !answers.get(QuestionKey::Difficulties).trim().is_empty() {
        questions.push(DIFFICULTIES_FOLLOW_UP);
    }
    questions
}

/// Reflective summary echoing the raw answers back in question order.
pub fn reflect_summary(answers: &AnswerSet) -> String {
    let echoed: Vec<&str> = answers.values().collect();
    format!("{SUMMARY_PREFIX}{}", echoed.join("; "))
}
