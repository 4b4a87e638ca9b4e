use anyhow::Result;
use config::Config;
use config::builder::DefaultState;
use serde::Deserialize;

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_WINDOW_MONTHS, ENV_PREFIX, MAX_OCCURRENCES_PER_EVENT,
};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub recurrence: RecurrenceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Bounds applied when recurring events are expanded on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RecurrenceConfig {
    /// Window length used when an event has no explicit recurrence end date.
    pub default_window_months: u32,
    /// Cap on synthetic occurrences per base event.
    pub max_occurrences: usize,
}

impl Default for RecurrenceConfig {
    fn default() -> Self {
        Self {
            default_window_months: DEFAULT_WINDOW_MONTHS,
            max_occurrences: MAX_OCCURRENCES_PER_EVENT,
        }
    }
}

impl RecurrenceConfig {
    /// ## Summary
    /// Checks that the bounds keep expansion finite and synthetic ids unique.
    ///
    /// ## Errors
    /// Returns `InvalidConfiguration` if the window is empty or the occurrence cap is zero or
    /// larger than the synthetic id space allows.
    pub fn validate(&self) -> CoreResult<()> {
        if self.default_window_months == 0 {
            return Err(CoreError::InvalidConfiguration(
                "recurrence.default_window_months must be at least 1".to_string(),
            ));
        }
        if self.max_occurrences == 0 || self.max_occurrences > MAX_OCCURRENCES_PER_EVENT {
            return Err(CoreError::InvalidConfiguration(format!(
                "recurrence.max_occurrences must be between 1 and {MAX_OCCURRENCES_PER_EVENT}, got {}",
                self.max_occurrences
            )));
        }
        Ok(())
    }
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder pre-populated with every default value.
    ///
    /// ## Errors
    /// Returns an error if a default cannot be registered.
    pub fn builder() -> Result<config::ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default(
                "recurrence.default_window_months",
                i64::from(DEFAULT_WINDOW_MONTHS),
            )?
            .set_default(
                "recurrence.max_occurrences",
                i64::try_from(MAX_OCCURRENCES_PER_EVENT)?,
            )?)
    }

    /// ## Summary
    /// Deserializes and validates settings from a built configuration.
    ///
    /// ## Errors
    /// Returns an error if deserialization fails or the recurrence bounds are invalid.
    pub fn from_config(config: Config) -> Result<Self> {
        let settings = config.try_deserialize::<Settings>()?;
        settings.recurrence.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional `eventure.toml` into a
    /// `Settings`. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        let config = Self::builder()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Environment
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        level = %settings.logging.level,
        default_window_months = settings.recurrence.default_window_months,
        max_occurrences = settings.recurrence.max_occurrences,
        "Configuration loaded"
    );
    Ok(settings)
}
