//! Bearer credential storage.
//!
//! The gateway reads the token once per outgoing request and clears it on
//! logout or session expiry. Each read or write takes the store's lock, so a
//! request never observes a half-written token.
//!
//! [`FileTokenStore`] persists to `<home>/credentials.json` with restricted
//! permissions (0600). Tokens are never logged or displayed in full.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Persistent holder of the single bearer credential.
pub trait TokenStore: Send + Sync {
    /// Current token, if any.
    fn get(&self) -> Option<String>;

    /// Replaces the stored token.
    fn set(&self, token: &str) -> Result<()>;

    /// Removes the stored token. Returns whether one was present.
    ///
    /// Implementations must drop the in-memory token even when persisting the
    /// removal fails.
    fn clear(&self) -> Result<bool>;
}

/// In-process token store.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        Ok(self
            .token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some())
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CredentialsFile {
    token: String,
}

/// Token store backed by a JSON file, cached in memory.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cached: MemoryTokenStore,
}

impl FileTokenStore {
    /// Opens the store at `path`, loading any existing credential.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cached = match read_credentials(&path)? {
            Some(token) => MemoryTokenStore::with_token(token),
            None => MemoryTokenStore::new(),
        };
        Ok(Self { path, cached })
    }

    /// Opens the store at the default credentials path.
    pub fn open_default() -> Result<Self> {
        Self::open(crate::config::paths::credentials_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        self.cached.get()
    }

    /// Persists first; the cache only changes once the file is written.
    fn set(&self, token: &str) -> Result<()> {
        write_credentials(&self.path, token)?;
        self.cached.set(token)?;
        tracing::debug!(
            path = %self.path.display(),
            token = %mask_token(token),
            "stored credential"
        );
        Ok(())
    }

    fn clear(&self) -> Result<bool> {
        let had_token = self.cached.clear()?;
        if self.path.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("Failed to remove {}", self.path.display()))?;
        }
        tracing::debug!(path = %self.path.display(), had_token, "cleared credential");
        Ok(had_token)
    }
}

fn read_credentials(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read credentials from {}", path.display()))?;
    let parsed: CredentialsFile = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse credentials from {}", path.display()))?;
    let token = parsed.token.trim();
    Ok((!token.is_empty()).then(|| token.to_string()))
}

fn write_credentials(path: &Path, token: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(&CredentialsFile {
        token: token.to_string(),
    })
    .context("Failed to serialize credentials")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .mode(0o600)
            .open(path)
            .with_context(|| format!("Failed to open {} for writing", path.display()))?;
        file.write_all(contents.as_bytes())
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    #[cfg(not(unix))]
    {
        fs::write(path, contents)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    Ok(())
}

/// Shortens a credential for logs: tokens of 16 chars or fewer become
/// `***`, longer ones keep a 12-char prefix.
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= 16 {
        return "***".to_string();
    }
    let prefix: String = token.chars().take(12).collect();
    format!("{prefix}...")
}
