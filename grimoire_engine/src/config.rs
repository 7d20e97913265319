//! Importer configuration.
//!
//! Loaded from `grimoire.toml` in the platform config directory. Every field
//! has a default so a missing or partial file still yields a usable config;
//! a malformed file is reported and replaced with defaults rather than
//! aborting an import. Secrets (the cobalt session token) are never logged.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default proxy endpoint for the character-builder service.
pub const DEFAULT_API_ENDPOINT: &str = "https://proxy.grimoire-vtt.dev";

/// Connection settings for the character-builder proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImporterConfig {
    /// Base URL of the proxy service.
    pub api_endpoint: String,
    /// Session token for the character-builder account.
    pub cobalt: String,
    /// Campaign scoping for shared content; empty means account-wide.
    pub campaign_id: String,
    /// Early-access key, if the account has one.
    pub beta_key: String,
}

impl Default for ImporterConfig {
    fn default() -> Self {
        ImporterConfig {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            cobalt: String::new(),
            campaign_id: String::new(),
            beta_key: String::new(),
        }
    }
}

/// Path to the user's config file (`<config dir>/grimoire/grimoire.toml`).
pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("grimoire")
        .join("grimoire.toml")
}

/// Load the importer config, falling back to defaults when the file is
/// missing or malformed.
pub fn load_config() -> ImporterConfig {
    let path = config_path();
    match fs::read_to_string(&path) {
        Ok(raw) => match toml::from_str::<ImporterConfig>(&raw) {
            Ok(config) => {
                info!("loaded importer config from {}", path.display());
                config
            },
            Err(err) => {
                warn!("malformed config at {}: {err}; using defaults", path.display());
                ImporterConfig::default()
            },
        },
        Err(_) => {
            info!("no config at {}; using defaults", path.display());
            ImporterConfig::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_endpoint() {
        let config = ImporterConfig::default();
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert!(config.cobalt.is_empty());
    }

    #[test]
    fn partial_toml_fills_missing_fields_with_defaults() {
        let config: ImporterConfig = toml::from_str("cobalt = \"token\"").unwrap();
        assert_eq!(config.cobalt, "token");
        assert_eq!(config.api_endpoint, DEFAULT_API_ENDPOINT);
        assert!(config.beta_key.is_empty());
    }
}
