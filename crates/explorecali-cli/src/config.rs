//! Configuration management for the Explore California CLI
//!
//! Stores the API base URL and a default tour in
//! ~/.config/explorecali/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "explorecali";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the configured base URL
pub const URL_ENV: &str = "EXPLORECALI_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tour: Option<i32>,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_tour: None,
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Base URL, with `EXPLORECALI_URL` taking precedence
    pub fn effective_base_url(&self) -> String {
        std::env::var(URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }

    /// Tour given on the command line, else the default tour
    pub fn resolve_tour(&self, tour: Option<i32>) -> Result<i32> {
        tour.or(self.default_tour).context(
            "No tour specified and no default tour set. Use --tour <ID> or 'explorecali config set-tour <ID>'.",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fills_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::parse("default_tour = 3").unwrap();
        assert_eq!(config.base_url, default_base_url());
        assert_eq!(config.default_tour, Some(3));
    }

    #[test]
    fn test_round_trip() {
        let config = Config {
            base_url: "https://tours.example.com".to_string(),
            default_tour: Some(12),
        };
        let content = toml::to_string_pretty(&config).unwrap();
        assert_eq!(Config::parse(&content).unwrap(), config);
    }

    #[test]
    fn test_resolve_tour() {
        let mut config = Config::default();
        assert!(config.resolve_tour(None).is_err());
        assert_eq!(config.resolve_tour(Some(4)).unwrap(), 4);

        config.default_tour = Some(2);
        assert_eq!(config.resolve_tour(None).unwrap(), 2);
        assert_eq!(config.resolve_tour(Some(4)).unwrap(), 4);
    }
}
