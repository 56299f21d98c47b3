use eco_observability::{init, LogFormat, LogLevel, LoggingConfig, LoggingError};

#[derive(serde::Deserialize)]
struct Settings {
    #[serde(default)]
    logging: LoggingConfig,
}

#[test]
fn logging_section_parses_from_config_json() {
    let settings: Settings =
        serde_json::from_str(r#"{"logging": {"level": "debug", "format": "json"}}"#).unwrap();
    assert_eq!(
        settings.logging,
        LoggingConfig::default()
            .with_level(LogLevel::Debug)
            .with_format(LogFormat::Json)
    );

    let settings: Settings = serde_json::from_str("{}").unwrap();
    assert_eq!(settings.logging.level, LogLevel::Warn);
    assert_eq!(settings.logging.format, LogFormat::Human);
}

#[test]
fn verbose_flag_raises_level() {
    let config = LoggingConfig::default();
    let raised = config.clone().with_level(config.level.min(LogLevel::Debug));
    assert_eq!(raised.directive(None), "debug");

    let quiet = LoggingConfig::default().with_level(LogLevel::Trace);
    assert_eq!(quiet.level.min(LogLevel::Debug), LogLevel::Trace);
}

#[test]
fn subscriber_installs_once() {
    let config = LoggingConfig::default().with_format(LogFormat::Json);
    assert_eq!(init(&config), Ok(()));
    tracing::info!(order = "ECO-1", "logged after init");
    assert!(matches!(init(&config), Err(LoggingError::Init(_))));
}
