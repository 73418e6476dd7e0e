use crate::domain::Reading;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    logging: Logging,
    #[serde(default)]
    reporters: Vec<Reporter>,
    #[serde(default)]
    readings: Vec<Reading>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(config::File::with_name("config").required(true))
                .add_source(config::File::with_name("config_local").required(false))
                .add_source(config::Environment::default().separator("__")),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    pub fn logging(&self) -> &Logging {
        &self.logging
    }

    pub fn reporters(&self) -> &[Reporter] {
        &self.reporters
    }

    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }
}

#[derive(Debug, Deserialize)]
pub struct Logging {
    level: String,
}

impl Logging {
    pub fn level(&self) -> Result<Level, AppConfigError> {
        Level::from_str(&self.level).map_err(|_| AppConfigError::InvalidLogLevel(self.level.clone()))
    }
}

#[derive(Debug, Deserialize)]
pub struct Reporter {
    name: String,
    leave_after: Option<usize>,
}

impl Reporter {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of readings after which the reporter unsubscribes, if it leaves early at all.
    pub fn leave_after(&self) -> Option<usize> {
        self.leave_after
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error("invalid log level '{0}', expected one of trace, debug, info, warn or error")]
    InvalidLogLevel(String),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                logging: Logging { level: "info".to_string() },
                reporters: vec![],
                readings: vec![],
            },
        }
    }

    pub fn reporter(mut self, name: &str, leave_after: Option<usize>) -> Self {
        self.config.reporters.push(Reporter {
            name: name.to_string(),
            leave_after,
        });
        self
    }

    pub fn reading(mut self, reading: Reading) -> Self {
        self.config.readings.push(reading);
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Location;
    use config::{File, FileFormat};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn parse(toml: &str) -> Result<AppConfig, ConfigError> {
        AppConfig::from_builder(Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    #[test]
    fn parses_reporters_and_readings_in_order() -> Result<(), ConfigError> {
        let config = parse(
            r#"
            [logging]
            level = "debug"

            [[reporters]]
            name = "FixedGPS"

            [[reporters]]
            name = "MobileGPS"
            leave_after = 1

            [[readings]]
            latitude = 47.6456
            longitude = -122.1312

            [[readings]]

            [[readings]]
            latitude = 47.6677
            longitude = -122.1199
            "#,
        )?;

        assert_eq!(config.logging().level().unwrap(), Level::DEBUG);
        let names = config.reporters().iter().map(Reporter::name).collect::<Vec<_>>();
        assert_eq!(names, vec!["FixedGPS", "MobileGPS"]);
        assert_eq!(config.reporters()[0].leave_after(), None);
        assert_eq!(config.reporters()[1].leave_after(), Some(1));
        assert_eq!(
            config.readings(),
            &[
                Reading::known(Location::new(47.6456, -122.1312)),
                Reading::unknown(),
                Reading::known(Location::new(47.6677, -122.1199)),
            ]
        );

        Ok(())
    }

    #[test]
    fn reporters_and_readings_are_optional() -> Result<(), ConfigError> {
        let config = parse("[logging]\nlevel = \"warn\"")?;

        assert!(config.reporters().is_empty());
        assert!(config.readings().is_empty());

        Ok(())
    }

    #[test]
    fn logging_is_required() {
        assert!(parse("").is_err());
    }

    #[rstest]
    #[case("trace", Level::TRACE)]
    #[case("INFO", Level::INFO)]
    #[case("error", Level::ERROR)]
    fn parses_log_levels(#[case] level: &str, #[case] expected: Level) {
        let logging = Logging { level: level.to_string() };

        assert_eq!(logging.level().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_log_levels() {
        let logging = Logging { level: "loud".to_string() };

        assert!(matches!(logging.level(), Err(AppConfigError::InvalidLogLevel(level)) if level == "loud"));
    }
}
