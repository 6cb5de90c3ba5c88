//=========================================================================
// Configuration
//=========================================================================
//
// File-backed settings for the runtime and for level trigger placement.
//
// Formats are picked by extension:
//   *.toml → toml
//   *.ron  → ron
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;
use serde::Deserialize;

//=== Internal Dependencies ===============================================

use crate::core::scene::SceneKey;
use crate::core::trigger::{EntityCategory, SceneTrigger};

//=== ConfigError =========================================================

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Parsed, but the values are unusable
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

//=== Config Trait ========================================================

/// Loading and validation shared by every configuration document.
pub trait Config: DeserializeOwned {
    /// Checks values that the type system cannot.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Loads and validates a `.toml` or `.ron` file.
    fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        debug!("Loading configuration from {}", path.display());

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&contents),
            Some("ron") => Self::from_ron_str(&contents),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn from_ron_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

//=== EngineConfig ========================================================

/// Runtime settings read by [`EngineBuilder::from_config`].
///
/// [`EngineBuilder::from_config`]: crate::EngineBuilder::from_config
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Core ticks per second.
    pub tps: f64,

    /// Capacity of the host → core event channel.
    pub channel_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }
}

impl Config for EngineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tps > 0.0) {
            return Err(ConfigError::Invalid(format!("tps must be positive, got {}", self.tps)));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::Invalid("channel_capacity must be positive".to_string()));
        }
        Ok(())
    }
}

//=== Level Data ==========================================================

/// One trigger as written in level data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TriggerPlacement<S> {
    /// Scene loaded when the trigger fires.
    pub target: S,

    #[serde(default = "default_activator")]
    pub activator: EntityCategory,
}

fn default_activator() -> EntityCategory {
    EntityCategory::Player
}

impl<S: SceneKey> TriggerPlacement<S> {
    pub fn to_trigger(&self) -> SceneTrigger<S> {
        SceneTrigger::new(self.target).with_activator(self.activator)
    }
}

/// The triggers placed in one level.
///
/// ```rust
/// # use scene_switch::prelude::*;
/// let level: LevelData<SceneIndex> = LevelData::from_ron_str(r#"(
///     name: "forest",
///     triggers: [(target: 3)],
/// )"#).unwrap();
///
/// assert_eq!(level.triggers[0].activator, EntityCategory::Player);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LevelData<S> {
    pub name: String,

    #[serde(default = "Vec::new")]
    pub triggers: Vec<TriggerPlacement<S>>,
}

impl<S: SceneKey + DeserializeOwned> Config for LevelData<S> {}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::SceneIndex;
    use std::io::Write;

    #[test]
    fn engine_config_fills_missing_fields_with_defaults() {
        let config = EngineConfig::from_toml_str("tps = 30.0").unwrap();
        assert_eq!(config.tps, 30.0);
        assert_eq!(config.channel_capacity, 128);
    }

    #[test]
    fn engine_config_rejects_non_positive_tps() {
        let err = EngineConfig::from_toml_str("tps = 0.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn engine_config_rejects_zero_capacity() {
        let err = EngineConfig::from_ron_str("(channel_capacity: 0)").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = EngineConfig::from_toml_str("tps = = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn level_data_from_toml() {
        let level = LevelData::<SceneIndex>::from_toml_str(
            r#"
            name = "forest"

            [[triggers]]
            target = 3

            [[triggers]]
            target = 1
            activator = "Enemy"
            "#,
        )
        .unwrap();

        assert_eq!(level.name, "forest");
        assert_eq!(level.triggers.len(), 2);
        assert_eq!(level.triggers[0].to_trigger(), SceneTrigger::new(SceneIndex(3)));
        assert_eq!(level.triggers[1].activator, EntityCategory::Enemy);
    }

    #[test]
    fn load_from_file_picks_format_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        write!(file, "(name: \"boss\", triggers: [(target: 2, activator: Player)])").unwrap();

        let level = LevelData::<SceneIndex>::load_from_file(file.path()).unwrap();

        assert_eq!(level.name, "boss");
        assert_eq!(level.triggers[0].target, SceneIndex(2));
    }

    #[test]
    fn load_from_file_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        let err = EngineConfig::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = EngineConfig::load_from_file("/nonexistent/engine.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
