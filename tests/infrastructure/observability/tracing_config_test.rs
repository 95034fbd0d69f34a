use tolk::infrastructure::observability::{DEFAULT_FILTER, TracingConfig};
use tolk::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_logging_settings_when_building_config_then_carries_filter_and_environment() {
    let logging = LoggingSettings {
        level: "warn,tolk=info".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert_eq!(config.filter, "warn,tolk=info");
    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
}

#[test]
fn given_default_logging_settings_when_compared_then_match_default_filter() {
    assert_eq!(LoggingSettings::default().level, DEFAULT_FILTER);
}
