use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::directory::seed;
use crate::directory::{RateRange, TagVocabulary};

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
    pub directory: DirectoryConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let rate_min = parse_rate("DIRECTORY_RATE_MIN", 0.0)?;
        let rate_max = parse_rate("DIRECTORY_RATE_MAX", 200.0)?;
        let rate_step = parse_rate("DIRECTORY_RATE_STEP", 5.0)?;
        if rate_step <= 0.0 {
            return Err(ConfigError::InvalidNumber {
                key: "DIRECTORY_RATE_STEP",
            });
        }
        let rate_bounds = RateRange::new(rate_min, rate_max)
            .map_err(|_| ConfigError::InvertedRateBounds { rate_min, rate_max })?;

        let vocabulary = match env::var("DIRECTORY_TAGS") {
            Ok(raw) if !raw.trim().is_empty() => {
                let vocabulary = TagVocabulary::new(raw.split(',').map(str::trim));
                if vocabulary.is_empty() {
                    return Err(ConfigError::EmptyVocabulary);
                }
                vocabulary
            }
            _ => seed::expertise_vocabulary(),
        };

        let source = env::var("DIRECTORY_SOURCE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            directory: DirectoryConfig {
                rate_bounds,
                rate_step,
                vocabulary,
                source,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_rate(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite() && *value >= 0.0)
            .ok_or(ConfigError::InvalidNumber { key }),
        Err(_) => Ok(default),
    }
}

/// Filter bounds and vocabulary handed to the engine at start-up.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub rate_bounds: RateRange,
    /// Slider granularity advertised to hosts; the engine accepts any value.
    pub rate_step: f64,
    pub vocabulary: TagVocabulary,
    /// Optional CSV/JSON export replacing the sample directory.
    pub source: Option<PathBuf>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            rate_bounds: RateRange::default(),
            rate_step: 5.0,
            vocabulary: seed::expertise_vocabulary(),
            source: None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { key: &'static str },
    InvertedRateBounds { rate_min: f64, rate_max: f64 },
    EmptyVocabulary,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative number")
            }
            ConfigError::InvertedRateBounds { rate_min, rate_max } => write!(
                f,
                "DIRECTORY_RATE_MIN ({rate_min}) must not exceed DIRECTORY_RATE_MAX ({rate_max})"
            ),
            ConfigError::EmptyVocabulary => {
                write!(f, "DIRECTORY_TAGS must name at least one expertise label")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("DIRECTORY_RATE_MIN");
        env::remove_var("DIRECTORY_RATE_MAX");
        env::remove_var("DIRECTORY_RATE_STEP");
        env::remove_var("DIRECTORY_TAGS");
        env::remove_var("DIRECTORY_SOURCE");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.directory.rate_bounds.min(), 0.0);
        assert_eq!(config.directory.rate_bounds.max(), 200.0);
        assert_eq!(config.directory.rate_step, 5.0);
        assert_eq!(config.directory.vocabulary.len(), 11);
        assert!(config.directory.source.is_none());
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn reads_vocabulary_and_bounds_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "production");
        env::set_var("DIRECTORY_RATE_MAX", "300");
        env::set_var("DIRECTORY_TAGS", "Career Coaching, Change Management ,");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(config.directory.rate_bounds.max(), 300.0);
        assert_eq!(
            config.directory.vocabulary.labels(),
            &["Career Coaching".to_string(), "Change Management".to_string()]
        );
        reset_env();
    }

    #[test]
    fn rejects_tag_lists_without_any_label() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        for raw in [",", " , ", ", ,,"] {
            env::set_var("DIRECTORY_TAGS", raw);
            let err = AppConfig::load().unwrap_err();
            assert!(matches!(err, ConfigError::EmptyVocabulary));
        }
        reset_env();
    }

    #[test]
    fn rejects_inverted_bounds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("DIRECTORY_RATE_MIN", "250");
        let err = AppConfig::load().unwrap_err();
        assert!(matches!(err, ConfigError::InvertedRateBounds { .. }));
        env::set_var("DIRECTORY_RATE_MIN", "cheap");
        let err = AppConfig::load().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidNumber {
                key: "DIRECTORY_RATE_MIN"
            }
        ));
        reset_env();
    }
}
