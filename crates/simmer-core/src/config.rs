//! Scheduler configuration.
//!
//! Configuration is an optional JSON file. Every field has a default, so a
//! file only needs the keys it wants to override:
//!
//! ```json
//! { "max_passes": 20, "ingredients": ["egg", "tofu"] }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Repair pass cap used when nothing else is configured.
pub const DEFAULT_MAX_PASSES: usize = 10;

/// Total time reported for a plan without steps, in minutes.
pub const DEFAULT_MIN_PLAN_DURATION: u32 = 30;

/// Ingredient terms matched as case-sensitive substrings of descriptions.
pub const DEFAULT_INGREDIENTS: &[&str] = &[
    "egg", "tomato", "onion", "garlic", "ginger", "scallion", "chicken", "beef", "pork", "lamb",
    "fish", "shrimp", "tofu", "rice", "noodle", "pasta", "potato", "carrot", "mushroom",
    "cabbage", "spinach", "broccoli", "cheese", "butter", "milk", "cream", "flour",
];

/// Appliance groups; two steps mentioning terms from the same group compete
/// for that appliance.
pub const DEFAULT_EQUIPMENT_GROUPS: &[&[&str]] = &[
    &["pan", "wok", "stir-fry", "sauté", "fry"],
    &["pot", "boil", "simmer"],
    &["oven", "roast", "bake"],
    &["microwave", "reheat", "defrost"],
    &["steamer", "steam"],
];

const CONFIG_FILE_NAME: &str = "config.json";

/// Tunables for the scheduler and its default conflict classifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Maximum number of repair passes before giving up on a fixpoint
    pub max_passes: usize,

    /// Reported total time of an empty plan, in minutes
    pub min_plan_duration: u32,

    /// Ingredient vocabulary for the keyword classifier
    pub ingredients: Vec<String>,

    /// Equipment groups for the keyword classifier
    pub equipment_groups: Vec<Vec<String>>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_passes: DEFAULT_MAX_PASSES,
            min_plan_duration: DEFAULT_MIN_PLAN_DURATION,
            ingredients: DEFAULT_INGREDIENTS.iter().map(ToString::to_string).collect(),
            equipment_groups: DEFAULT_EQUIPMENT_GROUPS
                .iter()
                .map(|group| group.iter().map(ToString::to_string).collect())
                .collect(),
        }
    }
}

impl SchedulerConfig {
    /// Load and validate a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::FileSystem` if the file cannot be read,
    /// `ScheduleError::Configuration` if it is not valid configuration JSON
    /// or fails [`SchedulerConfig::validate`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| ScheduleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: SchedulerConfig =
            serde_json::from_str(&text).map_err(|e| ScheduleError::Configuration {
                message: format!("{}: {}", path.display(), e),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the values make sense.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Configuration` when `max_passes` is zero or a
    /// vocabulary entry is blank.
    pub fn validate(&self) -> Result<()> {
        if self.max_passes == 0 {
            return Err(ScheduleError::Configuration {
                message: "max_passes must be at least 1".to_string(),
            });
        }
        let blank_term = self
            .ingredients
            .iter()
            .chain(self.equipment_groups.iter().flatten())
            .any(|term| term.trim().is_empty());
        if blank_term {
            return Err(ScheduleError::Configuration {
                message: "vocabulary terms must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Location of the user configuration file, if one exists.
    ///
    /// Looks for `$XDG_CONFIG_HOME/simmer/config.json` and then the XDG
    /// system config directories.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("simmer").find_config_file(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents.as_bytes())
            .expect("Failed to write config");
        file
    }

    #[test]
    fn test_defaults() {
        let config = SchedulerConfig::default();
        assert_eq!(config.max_passes, 10);
        assert_eq!(config.min_plan_duration, 30);
        assert!(config.ingredients.iter().any(|t| t == "egg"));
        assert!(config
            .equipment_groups
            .iter()
            .any(|g| g.iter().any(|t| t == "microwave")));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config(r#"{"max_passes": 25}"#);
        let config = SchedulerConfig::load(file.path()).expect("Failed to load config");
        assert_eq!(config.max_passes, 25);
        assert_eq!(config.min_plan_duration, DEFAULT_MIN_PLAN_DURATION);
        assert_eq!(config.ingredients.len(), DEFAULT_INGREDIENTS.len());
    }

    #[test]
    fn test_zero_passes_rejected() {
        let file = write_config(r#"{"max_passes": 0}"#);
        let err = SchedulerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration { .. }));
    }

    #[test]
    fn test_blank_term_rejected() {
        let config = SchedulerConfig {
            ingredients: vec!["egg".to_string(), "  ".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let file = write_config("{ max_passes = 3 }");
        let err = SchedulerConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ScheduleError::Configuration { .. }));
    }

    #[test]
    fn test_missing_file_is_filesystem_error() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let err = SchedulerConfig::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, ScheduleError::FileSystem { .. }));
    }
}
