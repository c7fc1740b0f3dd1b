use crate::services::providers::gemini::{GeminiConfig, GEMINI_API_BASE};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::time::Duration;

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-05-20";

/// Upstream request timeout when `GEMINI_TIMEOUT_SECS` is not set.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone, Deserialize)]
pub struct CaseConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub google: GoogleConfig,
    pub gemini: GeminiSettings,
    #[serde(default)]
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    /// Absent keys are tolerated at startup; every action then fails with
    /// "API key not configured".
    #[serde(default)]
    pub api_key: Option<SecretString>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeminiSettings {
    pub api_base: String,
    pub model: String,
    pub timeout_secs: u64,
}

impl CaseConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(CaseConfig {
            common: common_config,
            google: GoogleConfig {
                api_key: optional_env("GEMINI_API_KEY").map(SecretString::new),
            },
            gemini: GeminiSettings {
                api_base: get_env("GEMINI_API_BASE", GEMINI_API_BASE),
                model: get_env("GEMINI_MODEL", DEFAULT_MODEL),
                timeout_secs: parse_env("GEMINI_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            },
            otlp_endpoint: optional_env("OTLP_ENDPOINT"),
        })
    }

    /// Configuration suitable for tests: no key, default upstream, random port.
    pub fn for_tests(api_base: &str, api_key: Option<&str>) -> Self {
        CaseConfig {
            common: core_config::Config {
                port: 0,
                ..Default::default()
            },
            google: GoogleConfig {
                api_key: api_key.map(|k| SecretString::new(k.to_string())),
            },
            gemini: GeminiSettings {
                api_base: api_base.to_string(),
                model: DEFAULT_MODEL.to_string(),
                timeout_secs: 5,
            },
            otlp_endpoint: None,
        }
    }

    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_base: self.gemini.api_base.clone(),
            model: self.gemini.model.clone(),
            timeout: Duration::from_secs(self.gemini.timeout_secs),
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.google
            .api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().is_empty())
    }
}

fn optional_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env(key: &str, default: &str) -> String {
    optional_env(key).unwrap_or_else(|| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, AppError>
where
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!("{} has invalid value {:?}: {}", key, raw, e))
        }),
    }
}
