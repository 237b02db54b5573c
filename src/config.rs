use crate::error::{Result, SoilSenseError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_PATH: &str = "model/fertility_forest.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub model: ModelConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// Path to the trained forest artifact.
    pub path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration, most specific source first: an explicit file,
    /// `./config/config.yaml`, then the platform config directory. A missing
    /// file is not an error; built-in defaults apply. The
    /// `SOILSENSE_MODEL_PATH` environment variable overrides the model path
    /// regardless of source.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match Self::find_file(explicit)? {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                Self::from_file(&path)?
            }
            None => {
                tracing::debug!("No configuration file found, using defaults");
                Self::default()
            }
        };

        if let Ok(path) = std::env::var("SOILSENSE_MODEL_PATH") {
            config.model.path = PathBuf::from(path);
        }

        Ok(config)
    }

    fn find_file(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(SoilSenseError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from("config/config.yaml");
        if local.exists() {
            return Ok(Some(local));
        }

        if let Some(dir) = dirs::config_dir() {
            let user = dir.join("soilsense").join("config.yaml");
            if user.exists() {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents)
            .map_err(|e| SoilSenseError::Config(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.model.path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn parses_yaml() {
        let config: Config = serde_yaml::from_str("model:\n  path: /opt/models/forest.json\n")
            .unwrap();
        assert_eq!(config.model.path, PathBuf::from("/opt/models/forest.json"));
    }

    #[test]
    fn empty_yaml_falls_back_to_default_model() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.model.path, PathBuf::from(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/config.yaml"))).unwrap_err();
        assert!(matches!(err, SoilSenseError::Config(_)));
    }
}
