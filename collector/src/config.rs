//! Server configuration, read from `config.toml` next to the binary.
//!
//! A missing file is not an error: the default configuration is written out
//! and used for the run, so a first start leaves an editable file behind.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Collector server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display name used in startup logging.
    pub name: String,
    /// Address the session listener binds to.
    pub address: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            name: "Skin Collector".to_string(),
            address: "0.0.0.0:19132".to_string(),
        }
    }
}

impl Config {
    /// Read the configuration from `path`, or create the file with defaults
    /// if it does not yet exist.
    pub fn read_or_create(path: &Path) -> crate::error::Result<Config> {
        if !path.exists() {
            let config = Config::default();
            std::fs::write(path, toml::to_string_pretty(&config)?)?;
            log::info!("Created default configuration at {}", path.display());
            return Ok(config);
        }

        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::read_or_create(&path).unwrap();
        assert_eq!(config.address, Config::default().address);
        assert!(path.exists());

        // second read parses the file that was just written
        let reread = Config::read_or_create(&path).unwrap();
        assert_eq!(reread.name, config.name);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "name = \"Lobby One\"\n").unwrap();

        let config = Config::read_or_create(&path).unwrap();
        assert_eq!(config.name, "Lobby One");
        assert_eq!(config.address, Config::default().address);
    }
}
