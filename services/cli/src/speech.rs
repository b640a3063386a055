use std::env;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::debug;
use wellness_checkin::checkin::Narrator;
use wellness_checkin::config::NarrationConfig;

const ESPEAK_VOICE: &str = "en-gb";

/// Speech program chosen once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SpeechBackend {
    /// macOS `say`.
    Say(PathBuf),
    /// `espeak-ng` or `espeak`.
    Espeak(PathBuf),
}

/// Narrator that shells out to the platform speech synthesiser. When no
/// synthesiser is installed it stays silent.
#[derive(Debug, Clone)]
pub(crate) struct SpeechNarrator {
    backend: Option<SpeechBackend>,
    voice: String,
    rate: u16,
    slow_rate: u16,
}

impl SpeechNarrator {
    pub(crate) fn detect(config: &NarrationConfig) -> Self {
        let backend = detect_backend();
        match &backend {
            Some(found) => debug!(?found, "speech backend selected"),
            None => debug!("no speech backend found; narration disabled"),
        }
        Self::with_backend(backend, config)
    }

    pub(crate) fn with_backend(backend: Option<SpeechBackend>, config: &NarrationConfig) -> Self {
        Self {
            backend,
            voice: config.voice.clone(),
            rate: config.rate,
            slow_rate: config.explanation_rate(),
        }
    }

    fn command(&self, text: &str, rate: u16) -> Option<Command> {
        let backend = self.backend.as_ref()?;
        let mut command = match backend {
            SpeechBackend::Say(program) => {
                let mut command = Command::new(program);
                command
                    .arg("-v")
                    .arg(&self.voice)
                    .arg("-r")
                    .arg(rate.to_string());
                command
            }
            SpeechBackend::Espeak(program) => {
                let mut command = Command::new(program);
                command
                    .arg("-v")
                    .arg(ESPEAK_VOICE)
                    .arg("-s")
                    .arg(rate.to_string());
                command
            }
        };
        command
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        Some(command)
    }

    fn say(&self, text: &str, rate: u16) {
        if text.trim().is_empty() {
            return;
        }
        let Some(mut command) = self.command(text, rate) else {
            return;
        };

        match command.status() {
            Ok(status) if status.success() => {}
            Ok(status) => debug!(%status, "speech backend exited unsuccessfully"),
            Err(err) => debug!(error = %err, "speech backend failed to start"),
        }
    }
}

impl Narrator for SpeechNarrator {
    fn speak(&self, text: &str) {
        self.say(text, self.rate);
    }

    fn speak_slow(&self, text: &str) {
        self.say(text, self.slow_rate);
    }
}

fn detect_backend() -> Option<SpeechBackend> {
    if cfg!(target_os = "macos") {
        if let Some(say) = find_program("say") {
            return Some(SpeechBackend::Say(say));
        }
    }
    find_program("espeak-ng")
        .or_else(|| find_program("espeak"))
        .map(SpeechBackend::Espeak)
}

fn find_program(name: &str) -> Option<PathBuf> {
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
