use std::path::Path;

use crate::error::ConfigError;

/// Settings for the Q-table driven player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TabularConfig {
    /// Probability of overriding the table lookup with a random free cell.
    pub epsilon: f32,
}

impl Default for TabularConfig {
    fn default() -> Self {
        TabularConfig { epsilon: 0.1 }
    }
}

/// Settings for the model-driven player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Probability of overriding the model arg-max with a random free cell.
    pub epsilon: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig { epsilon: 0.0 }
    }
}

/// Settings for agent-vs-agent series.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub num_games: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig { num_games: 100 }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tabular: TabularConfig,
    pub model: ModelConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::info!(
                "config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.tabular.epsilon) {
            return Err(ConfigError::Validation(
                "tabular.epsilon must be in [0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.model.epsilon) {
            return Err(ConfigError::Validation(
                "model.epsilon must be in [0, 1]".into(),
            ));
        }
        if self.session.num_games == 0 {
            return Err(ConfigError::Validation(
                "session.num_games must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
