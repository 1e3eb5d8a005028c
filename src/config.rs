use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::cli::DEFAULT_PORT;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_endpoint() -> String {
    format!("http://127.0.0.1:{}/clipboard/", DEFAULT_PORT)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 9123);
        assert_eq!(config.endpoint, "http://127.0.0.1:9123/clipboard/");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("port"));
        assert!(toml_str.contains("endpoint"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        port = 4500
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.port, 4500);
        assert_eq!(config.endpoint, "http://127.0.0.1:9123/clipboard/");
    }
}
