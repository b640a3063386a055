use crate::infra::TerminalPrompter;
use crate::speech::SpeechNarrator;
use clap::Parser;
use std::io::{self, Write};
use tracing::info;
use wellness_checkin::checkin::{
    CheckinSession, Narrator, Prompter, SessionOutcome, SilentNarrator,
};
use wellness_checkin::config::AppConfig;
use wellness_checkin::error::AppError;
use wellness_checkin::telemetry;

/// Runs one interactive check-in. Narration and logging are configured through
/// CHECKIN_* environment variables.
#[derive(Parser, Debug)]
#[command(
    name = "wellness-checkin",
    about = "A short guided wellness check-in with coping-strategy suggestions",
    version
)]
struct Cli {}

pub(crate) fn run() -> Result<(), AppError> {
    let _cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    info!(
        ?config.environment,
        narration = config.narration.enabled,
        "starting wellness check-in"
    );

    let stdin = io::stdin();
    let prompter = TerminalPrompter::new(stdin.lock(), io::stdout());

    if config.narration.enabled {
        run_session(prompter, SpeechNarrator::detect(&config.narration))
    } else {
        run_session(prompter, SilentNarrator)
    }
}

fn run_session<P, N>(prompter: P, narrator: N) -> Result<(), AppError>
where
    P: Prompter,
    N: Narrator,
{
    let mut session = CheckinSession::new(prompter, narrator);
    let outcome = session.run()?;

    match outcome {
        SessionOutcome::Completed(report) => {
            info!(score = report.assessment.score, "session closed normally");
        }
        SessionOutcome::CrisisExit(exit) => {
            info!(stage = ?exit.stage, "session closed with crisis resources");
        }
    }

    io::stdout().flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wellness_checkin::checkin::{PromptError, SessionError};

    #[test]
    fn crisis_answer_ends_the_run_cleanly() {
        let input = Cursor::new("fine\nI want to end my life\n");
        let prompter = TerminalPrompter::new(input, Vec::new());

        run_session(prompter, SilentNarrator).expect("crisis exit is not an error");
    }

    #[test]
    fn closed_input_surfaces_as_session_error() {
        let input = Cursor::new("fine\n");
        let prompter = TerminalPrompter::new(input, Vec::new());

        match run_session(prompter, SilentNarrator) {
            Err(AppError::Session(SessionError::Prompt(PromptError::Closed))) => {}
            other => panic!("expected closed input error, got {other:?}"),
        }
    }
}
