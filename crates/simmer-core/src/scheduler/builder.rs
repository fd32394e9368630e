//! Builder for creating and configuring Scheduler instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::{KeywordClassifier, Scheduler};
use crate::{config::SchedulerConfig, error::Result};

/// Where the configuration comes from.
#[derive(Debug, Clone)]
enum ConfigSource {
    /// Explicit file, then the XDG user file, then defaults
    Discover(Option<PathBuf>),
    /// Defaults only, ignoring any user file
    Defaults,
    /// Ready-made configuration
    Inline(SchedulerConfig),
}

/// Builder for creating and configuring Scheduler instances.
#[derive(Debug, Clone)]
pub struct SchedulerBuilder {
    source: ConfigSource,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            source: ConfigSource::Discover(None),
        }
    }

    /// Sets a configuration file to load.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_CONFIG_HOME/simmer/config.json` when it exists, built-in
    /// defaults otherwise.
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.source = ConfigSource::Discover(Some(path.as_ref().to_path_buf()));
        }
        self
    }

    /// Uses the given configuration as-is.
    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.source = ConfigSource::Inline(config);
        self
    }

    /// Ignores any configuration file and uses built-in defaults.
    pub fn without_user_config(mut self) -> Self {
        self.source = ConfigSource::Defaults;
        self
    }

    /// Builds the configured scheduler with the keyword classifier.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::FileSystem` if an explicit configuration file
    /// cannot be read, `ScheduleError::Configuration` if the configuration is
    /// malformed or invalid.
    pub fn build(self) -> Result<Scheduler<KeywordClassifier>> {
        let config = match self.source {
            ConfigSource::Inline(config) => {
                config.validate()?;
                config
            }
            ConfigSource::Defaults => SchedulerConfig::default(),
            ConfigSource::Discover(explicit) => match explicit.or_else(SchedulerConfig::default_path)
            {
                Some(path) => {
                    debug!("Loading scheduler configuration from {}", path.display());
                    SchedulerConfig::load(&path)?
                }
                None => SchedulerConfig::default(),
            },
        };

        let classifier = KeywordClassifier::from_config(&config);
        Ok(Scheduler::with_classifier(config, classifier))
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
