//! Configuration management
//!
//! Settings are layered: built-in defaults, then an optional TOML file under
//! the platform config directory, then `TICKET_SHADOW_*` environment
//! variables. The base URL varies by deployment (emulator vs host vs real
//! server), so it is configuration, never code.

use crate::error::{Result, ShadowError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default endpoint of the helpdesk service
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api.php";

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the single service endpoint
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Local session storage settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Directory for the persisted session; platform data dir when unset
    pub dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults where nothing is set
    pub fn load_or_default() -> Result<Self> {
        let mut builder = config::Config::builder()
            .set_default("api.base_url", DEFAULT_BASE_URL)
            .map_err(|err| ShadowError::Config(err.to_string()))?;

        if let Some(path) = Self::config_file_path() {
            if path.exists() {
                builder = builder.add_source(config::File::from(path));
            }
        }

        builder = builder.add_source(
            config::Environment::with_prefix("TICKET_SHADOW").separator("__"),
        );

        builder
            .build()
            .and_then(config::Config::try_deserialize)
            .map_err(|err| ShadowError::Config(err.to_string()))
    }

    /// The directory the session store lives in
    pub fn session_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.session.dir {
            return Ok(dir.clone());
        }
        ProjectDirs::from("", "", "ticket-shadow")
            .map(|dirs| dirs.data_dir().join("session"))
            .ok_or_else(|| {
                ShadowError::Config("could not determine a data directory".to_string())
            })
    }

    fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "ticket-shadow")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_points_at_localhost() {
        let config = Config::default();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert!(config.session.dir.is_none());
    }

    #[test]
    fn test_explicit_session_dir_wins() {
        let config = Config {
            session: SessionConfig {
                dir: Some(PathBuf::from("/tmp/shadow-session")),
            },
            ..Config::default()
        };
        assert_eq!(
            config.session_dir().unwrap(),
            PathBuf::from("/tmp/shadow-session")
        );
    }

    #[test]
    fn test_config_deserializes_from_toml() {
        let parsed: Config = toml_from_str(
            r#"
            [api]
            base_url = "http://10.0.2.2:8000/api.php"
            "#,
        );
        assert_eq!(parsed.api.base_url, "http://10.0.2.2:8000/api.php");
    }

    fn toml_from_str(raw: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .set_default("api.base_url", DEFAULT_BASE_URL)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }
}
