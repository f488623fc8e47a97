//! Configuration management for the Mock-Mate client.
//!
//! Loads configuration from ${MOCKMATE_HOME}/config.toml with sensible defaults.
//! The backend base URL can be overridden with `MOCKMATE_API_URL`.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Env var selecting the backend base URL.
pub const API_URL_ENV: &str = "MOCKMATE_API_URL";

/// Local development backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

pub mod paths {
    //! Path resolution for Mock-Mate state.
    //!
    //! MOCKMATE_HOME resolution order:
    //! 1. MOCKMATE_HOME environment variable (if set)
    //! 2. ~/.config/mockmate (default)

    use std::path::PathBuf;

    /// Returns the Mock-Mate home directory.
    pub fn mockmate_home() -> PathBuf {
        if let Ok(home) = std::env::var("MOCKMATE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("mockmate")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        mockmate_home().join("config.toml")
    }

    /// Returns the path to the persisted bearer credential.
    pub fn credentials_path() -> PathBuf {
        mockmate_home().join("credentials.json")
    }
}

/// On-disk config file shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend base URL, e.g. `https://mockmate.example.com/api`
    pub api_url: Option<String>,
    /// Whole-request timeout in seconds
    pub timeout_secs: u64,
    /// TCP connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            timeout_secs: ClientConfig::DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: ClientConfig::DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

impl FileConfig {
    /// Loads a config file, returning defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Self::default())
        }
    }
}

/// Resolved configuration for [`crate::ApiGateway`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL without trailing slash; call paths are appended verbatim
    pub base_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(Self::DEFAULT_CONNECT_TIMEOUT_SECS),
            user_agent: concat!("mockmate/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    /// Config pointing at `base_url` with default timeouts.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
            ..Self::default()
        })
    }

    /// Loads configuration from the default config path plus environment.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path plus environment.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = FileConfig::load_from(path)?;
        Self::from_sources(&file, std::env::var(API_URL_ENV).ok().as_deref())
    }

    /// Merges a parsed file with an optional env override.
    ///
    /// Base URL resolution order:
    /// 1. `MOCKMATE_API_URL` (if set and non-empty)
    /// 2. `api_url` from the config file (if non-empty)
    /// 3. Default: `http://localhost:8080/api`
    pub fn from_sources(file: &FileConfig, env_url: Option<&str>) -> Result<Self> {
        let chosen = [env_url, file.api_url.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);

        if file.timeout_secs == 0 || file.connect_timeout_secs == 0 {
            bail!("timeout_secs and connect_timeout_secs must be at least 1");
        }

        Ok(Self {
            base_url: normalize_base_url(chosen)?,
            timeout: Duration::from_secs(file.timeout_secs),
            connect_timeout: Duration::from_secs(file.connect_timeout_secs),
            ..Self::default()
        })
    }

    /// Creates a default config file at `path`; fails if one exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                tmp_path.display(),
                path.display()
            )
        })
    }
}

fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed =
        url::Url::parse(trimmed).with_context(|| format!("Invalid Mock-Mate API URL: {raw}"))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        bail!("Mock-Mate API URL must be http or https: {raw}");
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let file = FileConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        let config = ClientConfig::from_sources(&file, None).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_partial_file_merges_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_url = \"https://mm.example.com/api/\"\n").unwrap();

        let file = FileConfig::load_from(&path).unwrap();
        let config = ClientConfig::from_sources(&file, None).unwrap();
        assert_eq!(config.base_url, "https://mm.example.com/api");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_url_wins_over_file() {
        let file = FileConfig {
            api_url: Some("https://file.example.com/api".to_string()),
            ..FileConfig::default()
        };
        let config =
            ClientConfig::from_sources(&file, Some("http://127.0.0.1:9000/api")).unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9000/api");
    }

    #[test]
    fn test_blank_env_url_is_ignored() {
        let file = FileConfig {
            api_url: Some("https://file.example.com/api".to_string()),
            ..FileConfig::default()
        };
        let config = ClientConfig::from_sources(&file, Some("   ")).unwrap();
        assert_eq!(config.base_url, "https://file.example.com/api");
    }

    #[test]
    fn test_zero_timeouts_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timeout_secs = 0\n").unwrap();
        let file = FileConfig::load_from(&path).unwrap();
        let err = ClientConfig::from_sources(&file, None).unwrap_err();
        assert!(err.to_string().contains("at least 1"));

        let file = FileConfig {
            connect_timeout_secs: 0,
            ..FileConfig::default()
        };
        assert!(ClientConfig::from_sources(&file, None).is_err());
    }

    #[test]
    fn test_rejects_invalid_urls() {
        assert!(ClientConfig::new("not a url").is_err());
        assert!(ClientConfig::new("ftp://example.com").is_err());
    }

    #[test]
    fn test_init_writes_template_once() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        ClientConfig::init(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("# api_url ="));
        FileConfig::load_from(&path).unwrap();

        let err = ClientConfig::init(&path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
