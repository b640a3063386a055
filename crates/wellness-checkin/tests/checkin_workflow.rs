use std::collections::VecDeque;

use wellness_checkin::checkin::{
    choose_strategies, contains_crisis, explain_why, rank_themes, score_checkin, AnswerSet,
    CheckinSession, Explanation, PromptError, Prompter, QuestionKey, SessionOutcome,
    SilentNarrator, StrategyKey, Theme,
};

struct CannedPrompter {
    replies: VecDeque<&'static str>,
    transcript: Vec<String>,
}

impl CannedPrompter {
    fn new(replies: &[&'static str]) -> Self {
        Self {
            replies: replies.iter().copied().collect(),
            transcript: Vec::new(),
        }
    }
}

impl Prompter for CannedPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.transcript.push(format!("? {prompt}"));
        self.replies
            .pop_front()
            .map(|reply| reply.trim().to_string())
            .ok_or(PromptError::Closed)
    }

    fn show(&mut self, text: &str) -> Result<(), PromptError> {
        self.transcript.push(text.to_string());
        Ok(())
    }
}

fn answers(pairs: &[(QuestionKey, &str)]) -> AnswerSet {
    pairs.iter().map(|(key, value)| (*key, *value)).collect()
}

#[test]
fn crisis_gate_matches_phrases_anywhere_in_text() {
    assert!(contains_crisis("I want to end my life"));
    assert!(contains_crisis("sometimes I think about SELF-HARM"));
    assert!(!contains_crisis("I feel okay today"));
}

#[test]
fn engine_functions_compose_into_recommendations() {
    let answers = answers(&[
        (QuestionKey::Emotion, "I feel hopeless and panicky"),
        (QuestionKey::Stress, ""),
        (QuestionKey::Energy, ""),
        (QuestionKey::Thoughts, ""),
        (QuestionKey::Difficulties, ""),
    ]);

    let themes = rank_themes(&answers);
    assert_eq!(themes, vec![Theme::Hopelessness, Theme::Panic]);

    let strategies = choose_strategies(&themes);
    assert_eq!(
        strategies,
        vec![
            StrategyKey::Mindfulness,
            StrategyKey::ReachOut,
            StrategyKey::Grounding
        ]
    );
    assert_eq!(score_checkin(&answers), 0);

    match explain_why(&strategies, &themes, &answers) {
        Explanation::Evidence { evidence, .. } => {
            assert_eq!(evidence.len(), 2);
            assert_eq!(evidence[0].heard, vec!["hopeless"]);
            assert_eq!(evidence[1].heard, vec!["panic"]);
        }
        other => panic!("expected evidence, got {other:?}"),
    }
}

#[test]
fn completed_session_report_serializes_with_readable_labels() {
    let prompter = CannedPrompter::new(&[
        "lonely",
        "a bit anxious",
        "ok",
        "I overthink everything",
        "",
        "no",
    ]);
    let mut session = CheckinSession::new(prompter, SilentNarrator);

    let report = match session.run().expect("session runs") {
        SessionOutcome::Completed(report) => report,
        other => panic!("expected completed session, got {other:?}"),
    };

    assert_eq!(
        report.assessment.themes,
        vec![Theme::Anxiety, Theme::Overthinking, Theme::Loneliness]
    );
    assert_eq!(
        report.assessment.strategies,
        vec![
            StrategyKey::Mindfulness,
            StrategyKey::ReachOut,
            StrategyKey::Grounding
        ]
    );

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["score"], 0);
    assert_eq!(json["themes"][2], "loneliness");
    assert_eq!(json["strategies"][1], "reach out");
    assert_eq!(json["answers"]["thoughts"], "I overthink everything");
    assert!(json["exercise"].is_null());

    let transcript = &session.prompter().transcript;
    assert!(transcript
        .iter()
        .any(|line| line == "- Grounding: Try the 5-4-3-2-1 technique: notice 5 things you see, 4 you feel, 3 you hear, 2 you smell, 1 you taste."));
}

#[test]
fn crisis_session_never_reaches_recommendations() {
    let prompter = CannedPrompter::new(&["okay", "severe", "low", "I might overdose", "money"]);
    let mut session = CheckinSession::new(prompter, SilentNarrator);

    match session.run().expect("session runs") {
        SessionOutcome::CrisisExit(exit) => assert_eq!(exit.answered, 4),
        other => panic!("expected crisis exit, got {other:?}"),
    }

    let transcript = &session.prompter().transcript;
    assert!(!transcript.iter().any(|line| line.starts_with("- ")));
    assert!(!transcript.iter().any(|line| line.contains("signals heard")));
}
