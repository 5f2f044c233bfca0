use crate::core::error::ChatError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// On-disk settings, merged with CLI flags at startup (flag wins over file,
/// file wins over built-in default).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HuggingFace API token used as the bearer credential.
    pub api_token: Option<String>,
    /// Catalog identifier of the model selected at startup.
    pub model: Option<String>,
    /// Inference endpoint base URL override.
    pub endpoint: Option<String>,
    /// Default output length bound.
    pub max_length: Option<u32>,
    /// Default sampling temperature.
    pub temperature: Option<f64>,
}

impl Config {
    fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hfchat")
    }

    fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    pub fn input_history_path() -> PathBuf {
        Self::config_dir().join("input_history.txt")
    }

    pub fn load() -> Result<Config, ChatError> {
        let path = Self::config_path();

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config = serde_yml::from_str::<Config>(&contents)
                .map_err(|e| ChatError::Config(format!("Parse {}: {}", path.display(), e)))?;
            return Ok(config);
        }

        // First run: write an empty template the user can fill in.
        let config = Config::default();
        let _ = config.save();
        Ok(config)
    }

    pub fn save(&self) -> Result<(), ChatError> {
        let path = Self::config_path();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml_content = serde_yml::to_string(self)?;
        fs::write(&path, yaml_content)?;
        Ok(())
    }
}
