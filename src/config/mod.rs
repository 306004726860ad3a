use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::constants;


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Container engine binary used for build and push
    #[serde(default = "default_engine")]
    pub engine: String,

    /// Build configuration
    #[serde(default)]
    pub build: BuildConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    /// Extra arguments passed to `build` ahead of the context directory
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_engine() -> String {
    constants::engine::DEFAULT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            engine: default_engine(),
            build: BuildConfig::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("update").join("config.toml");
            if config_path.exists() {
                return Self::from_path(&config_path);
            }
        }
        Ok(Config::default())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Engine from the command line wins over the config file
    pub fn with_engine_override(mut self, engine: Option<String>) -> Self {
        if let Some(engine) = engine {
            self.engine = engine;
        }
        self
    }
}
