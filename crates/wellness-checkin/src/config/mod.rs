use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the check-in tool.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub narration: NarrationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("CHECKIN_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let enabled = read_toggle("CHECKIN_NARRATION", true)?;
        let voice = env::var("CHECKIN_VOICE").unwrap_or_else(|_| DEFAULT_VOICE.to_string());
        let rate = read_rate("CHECKIN_SPEECH_RATE", DEFAULT_SPEECH_RATE)?;
        let slow_rate = read_rate("CHECKIN_SLOW_RATE", DEFAULT_SLOW_RATE)?;
        let slow_explanations = read_toggle("CHECKIN_SLOW_EXPLANATIONS", true)?;

        let log_level = env::var("CHECKIN_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            narration: NarrationConfig {
                enabled,
                voice,
                rate,
                slow_rate,
                slow_explanations,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

const DEFAULT_VOICE: &str = "Daniel";
const DEFAULT_SPEECH_RATE: u16 = 175;
const DEFAULT_SLOW_RATE: u16 = 160;

/// Settings for spoken narration of prompts and explanations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrationConfig {
    pub enabled: bool,
    pub voice: String,
    /// Words per minute for regular narration.
    pub rate: u16,
    /// Words per minute for explanations.
    pub slow_rate: u16,
    /// When false, slow narration falls back to the regular rate.
    pub slow_explanations: bool,
}

impl NarrationConfig {
    pub fn explanation_rate(&self) -> u16 {
        if self.slow_explanations {
            self.slow_rate
        } else {
            self.rate
        }
    }
}

impl Default for NarrationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            voice: DEFAULT_VOICE.to_string(),
            rate: DEFAULT_SPEECH_RATE,
            slow_rate: DEFAULT_SLOW_RATE,
            slow_explanations: true,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn read_toggle(var: &'static str, default: bool) -> Result<bool, ConfigError> {
    let Ok(raw) = env::var(var) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidToggle { var, value: raw }),
    }
}

fn read_rate(var: &'static str, default: u16) -> Result<u16, ConfigError> {
    match env::var(var) {
        Ok(raw) => match raw.trim().parse::<u16>() {
            Ok(rate) if rate > 0 => Ok(rate),
            _ => Err(ConfigError::InvalidRate { var, value: raw }),
        },
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidToggle { var: &'static str, value: String },
    InvalidRate { var: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidToggle { var, value } => {
                write!(f, "{var} must be one of on/off/true/false/yes/no/1/0 (found '{value}')")
            }
            ConfigError::InvalidRate { var, value } => {
                write!(f, "{var} must be a positive words-per-minute value (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
