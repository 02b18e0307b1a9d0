use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::workflows::screening::ScreeningConfig;

/// Distinguishes runtime behavior for different stages of the service.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningConfig,
    pub corpora: CorporaConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let screening = ScreeningConfig {
            suitability_threshold: parse_number("SUITABILITY_THRESHOLD", 50.0)?,
            plagiarism_threshold: parse_number("PLAGIARISM_THRESHOLD", 0.8)?,
            experience_gap_days: parse_days("EXPERIENCE_GAP_DAYS", 365)?,
        };

        let corpora = CorporaConfig {
            resume_corpus: env::var("RESUME_CORPUS_PATH").ok().map(PathBuf::from),
            valid_institutions: env::var("VALID_INSTITUTIONS_PATH").ok().map(PathBuf::from),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            screening,
            corpora,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_number(name: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidNumber { name }),
    }
}

fn parse_days(name: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidNumber { name }),
    }
}

/// Locations of the reference corpora consumed by the fraud heuristics.
#[derive(Debug, Clone, Default)]
pub struct CorporaConfig {
    /// CSV of historical resume texts (plagiarism corpus); optional.
    pub resume_corpus: Option<PathBuf>,
    /// CSV of recognized institution names; optional (check disabled when unset).
    pub valid_institutions: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { name: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name } => {
                write!(f, "{name} must be a valid number")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
