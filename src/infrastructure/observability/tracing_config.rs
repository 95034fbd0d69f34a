use crate::presentation::config::{Environment, LoggingSettings};

pub const DEFAULT_FILTER: &str = "info,tolk=debug,tower_http=debug";

pub struct TracingConfig {
    pub environment: String,
    pub filter: String,
    pub json_format: bool,
}

impl TracingConfig {
    /// `LOG_FORMAT=json` forces JSON output regardless of settings.
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        Self {
            environment: environment.to_string(),
            filter: logging.level.clone(),
            json_format: logging.json || json_requested(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "local".to_string()),
            filter: DEFAULT_FILTER.to_string(),
            json_format: json_requested(),
        }
    }
}

fn json_requested() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
