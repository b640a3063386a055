use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::crisis::{contains_crisis, crisis_matches};
use super::domain::{AnswerSet, QuestionKey, StrategyKey};
use super::evaluation::{assess, Assessment};
use super::explain::explain_why;
use super::lexicon::strategy;
use super::narration::{spoken_form, Narrator};
use super::prompter::{choice_hint, choice_prompt, match_choice, PromptError, Prompter};
use super::script::{
    follow_up_questions, reflect_summary, CHECKIN_QUESTIONS, CLOSING, CRISIS_MESSAGE,
    CRISIS_SPOKEN, EXERCISE_OFFER, EXERCISE_PICK, EXERCISE_QUESTION, EXPLANATION_HEADER,
    EXPLANATION_SPOKEN_HEADER, FOLLOW_UP_ANNOUNCEMENT, FOLLOW_UP_THANKS, GREETING, NO,
    RECOMMENDATION_HEADER, RECOMMENDATION_LIST_HEADER, SUMMARY_ACKNOWLEDGEMENT, YES,
};

/// Where in the conversation crisis language was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum CrisisStage {
    Checkin { question: QuestionKey },
    FollowUp,
}

/// Terminal crisis path. Carries no score, themes, or strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisExit {
    pub stage: CrisisStage,
    /// Check-in questions answered before the exit.
    pub answered: usize,
}

/// Record of a check-in that reached the closing remarks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinReport {
    pub answers: AnswerSet,
    pub follow_ups: Vec<String>,
    #[serde(flatten)]
    pub assessment: Assessment,
    pub exercise: Option<StrategyKey>,
    pub completed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(CheckinReport),
    CrisisExit(CrisisExit),
}

/// Error raised by a check-in session. Prompt failures are not recoverable.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Prompt(#[from] PromptError),
}

/// Mutable state of one run. Dropped when the run ends.
#[derive(Debug, Default)]
struct SessionState {
    answers: AnswerSet,
    follow_ups: Vec<String>,
    crisis: bool,
}

impl SessionState {
    /// Stores a check-in answer and reports whether the crisis flag is now set.
    fn record_answer(&mut self, key: QuestionKey, answer: String) -> bool {
        self.crisis |= contains_crisis(&answer);
        self.answers.insert(key, answer);
        self.crisis
    }

    fn record_follow_up(&mut self, answer: String) -> bool {
        self.crisis |= contains_crisis(&answer);
        self.follow_ups.push(answer);
        self.crisis
    }
}

/// Drives one check-in conversation against the injected prompter and narrator.
pub struct CheckinSession<P, N> {
    prompter: P,
    narrator: N,
}

impl<P, N> CheckinSession<P, N>
where
    P: Prompter,
    N: Narrator,
{
    pub fn new(prompter: P, narrator: N) -> Self {
        Self { prompter, narrator }
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn narrator(&self) -> &N {
        &self.narrator
    }

    /// Run the full conversation. Every run starts from an empty state.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        let mut state = SessionState::default();
        info!("check-in session started");

        for line in GREETING {
            self.announce(line)?;
        }

        for question in CHECKIN_QUESTIONS {
            let reply = self.ask(question.prompt)?;
            let matched = crisis_matches(&reply);
            if state.record_answer(question.key, reply) {
                warn!(
                    question = question.key.label(),
                    ?matched,
                    "crisis language detected during check-in"
                );
                return self.crisis_exit(
                    CrisisStage::Checkin {
                        question: question.key,
                    },
                    &state,
                );
            }
        }

        self.prompter.show(&reflect_summary(&state.answers))?;
        self.narrator.speak(SUMMARY_ACKNOWLEDGEMENT);
        self.announce(FOLLOW_UP_ANNOUNCEMENT)?;

        for question in follow_up_questions(&state.answers) {
            let reply = self.ask(question)?;
            let matched = crisis_matches(&reply);
            if state.record_follow_up(reply) {
                warn!(?matched, "crisis language detected in follow-up");
            }
        }
        if !state.follow_ups.is_empty() {
            self.announce(FOLLOW_UP_THANKS)?;
        }

        let assessment = assess(&state.answers);
        let theme_labels: Vec<&str> = assessment.themes.iter().map(|t| t.label()).collect();
        let strategy_labels: Vec<&str> =
            assessment.strategies.iter().map(|s| s.label()).collect();
        info!(
            score = assessment.score,
            themes = ?theme_labels,
            strategies = ?strategy_labels,
            "check-in assessed"
        );
        if let Ok(json) = serde_json::to_string(&assessment) {
            debug!(assessment = %json, "score breakdown");
        }

        self.recommend(&assessment.strategies)?;
        self.explain(&assessment, &state.answers)?;

        if state.crisis {
            return self.crisis_exit(CrisisStage::FollowUp, &state);
        }

        let exercise = self.offer_exercise(&assessment.strategies)?;
        self.close()?;

        let report = CheckinReport {
            answers: state.answers,
            follow_ups: state.follow_ups,
            assessment,
            exercise,
            completed_at: Utc::now(),
        };
        info!(
            follow_ups = report.follow_ups.len(),
            exercise = ?report.exercise.map(StrategyKey::label),
            "check-in session completed"
        );

        Ok(SessionOutcome::Completed(report))
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PromptError> {
        self.narrator.speak(&spoken_form(prompt));
        self.prompter.ask(prompt)
    }

    /// Same contract as `Prompter::ask_choice`, but every re-ask is spoken too.
    fn ask_choice(&mut self, prompt: &str, choices: &[String]) -> Result<String, PromptError> {
        let framed = choice_prompt(prompt, choices);
        loop {
            let reply = self.ask(&framed)?;
            if let Some(choice) = match_choice(&reply, choices) {
                return Ok(choice.to_string());
            }
            debug!(prompt, "reply matched none of the offered choices");
            self.prompter.show(&choice_hint(choices))?;
        }
    }

    fn announce(&mut self, line: &str) -> Result<(), PromptError> {
        self.prompter.show(line)?;
        self.narrator.speak(line);
        Ok(())
    }

    fn crisis_exit(
        &mut self,
        stage: CrisisStage,
        state: &SessionState,
    ) -> Result<SessionOutcome, SessionError> {
        self.prompter.show(CRISIS_MESSAGE)?;
        for line in CRISIS_SPOKEN {
            self.narrator.speak(line);
        }
        info!(?stage, "check-in ended with crisis resources");

        Ok(SessionOutcome::CrisisExit(CrisisExit {
            stage,
            answered: state.answers.len(),
        }))
    }

    fn recommend(&mut self, strategies: &[StrategyKey]) -> Result<(), PromptError> {
        self.announce(RECOMMENDATION_HEADER)?;
        self.prompter.show(RECOMMENDATION_LIST_HEADER)?;
        for key in strategies {
            let line = format!("{}: {}", key.title(), strategy(*key).description);
            self.prompter.show(&format!("- {line}"))?;
            self.narrator.speak(&line);
        }
        Ok(())
    }

    fn explain(&mut self, assessment: &Assessment, answers: &AnswerSet) -> Result<(), PromptError> {
        self.prompter.show(EXPLANATION_HEADER)?;
        self.narrator.speak_slow(EXPLANATION_SPOKEN_HEADER);

        let explanation = explain_why(&assessment.strategies, &assessment.themes, answers);
        let general = assessment.themes.is_empty();
        for (line, spoken) in explanation
            .display_lines()
            .into_iter()
            .zip(explanation.spoken_lines())
        {
            self.prompter.show(&line)?;
            if general {
                self.narrator.speak(&spoken);
            } else {
                self.narrator.speak_slow(&spoken);
            }
        }
        Ok(())
    }

    fn offer_exercise(
        &mut self,
        strategies: &[StrategyKey],
    ) -> Result<Option<StrategyKey>, PromptError> {
        self.announce(EXERCISE_OFFER)?;
        let choice = self.ask_choice(EXERCISE_QUESTION, &[YES.to_string(), NO.to_string()])?;
        if choice != YES {
            return Ok(None);
        }

        let titles: Vec<String> = strategies.iter().map(|key| key.title()).collect();
        let chosen = self.ask_choice(EXERCISE_PICK, &titles)?;
        let Some(key) = StrategyKey::from_label(&chosen) else {
            warn!(%chosen, "picked strategy is not in the lexicon");
            return Ok(None);
        };

        let title = key.title();
        self.prompter
            .show(&format!("Great! Here are some steps for {title}:"))?;
        self.narrator
            .speak(&format!("Here are some steps for {title}."));
        self.announce(strategy(key).description)?;

        Ok(Some(key))
    }

    fn close(&mut self) -> Result<(), PromptError> {
        for line in CLOSING {
            self.announce(line)?;
        }
        Ok(())
    }
}
