//! Auth token storage and retrieval.
//!
//! The token lives in a single named slot. The file-backed store keeps it in
//! `<base>/credentials.json` with restricted permissions (0600).
//! Tokens are never logged or displayed in full.

use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::paths;

/// Persistent slot holding the auth token.
///
/// No expiry logic: a token is trusted until the server rejects it.
pub trait CredentialStore: Send + Sync {
    /// Returns the current token, if any.
    fn get(&self) -> Result<Option<String>>;

    /// Persists `token`, replacing any previous value.
    fn set(&self, token: &str) -> Result<()>;

    /// Removes the token. Clearing an empty store succeeds.
    fn clear(&self) -> Result<()>;
}

/// On-disk layout of the credentials file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct CredentialsFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
}

/// File-backed credential store.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `${QUIRE_HOME}/credentials.json`.
    pub fn at_default_path() -> Self {
        Self::new(paths::credentials_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<CredentialsFile> {
        if !self.path.exists() {
            return Ok(CredentialsFile::default());
        }

        let contents = fs::read_to_string(&self.path).with_context(|| {
            format!("Failed to read credentials from {}", self.path.display())
        })?;

        serde_json::from_str(&contents).with_context(|| {
            format!("Failed to parse credentials from {}", self.path.display())
        })
    }

    fn save(&self, file: &CredentialsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let contents =
            serde_json::to_string_pretty(file).context("Failed to serialize credentials")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut handle = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            handle
                .write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            let mut handle = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            handle
                .write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self.load()?.token)
    }

    fn set(&self, token: &str) -> Result<()> {
        self.save(&CredentialsFile {
            token: Some(token.to_string()),
        })
    }

    fn clear(&self) -> Result<()> {
        if !self.path.exists() {
            return Ok(());
        }
        self.save(&CredentialsFile::default())
    }
}

/// In-process credential store.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Result<Option<String>> {
        Ok(self
            .token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// Session context shared by the request factory and the app runtime.
///
/// Cloning is cheap; every clone sees the same underlying store.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn CredentialStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self { store }
    }

    /// Session backed by an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryCredentialStore::default()))
    }

    /// Session backed by the credentials file under `QUIRE_HOME`.
    pub fn from_default_path() -> Self {
        Self::new(Arc::new(FileCredentialStore::at_default_path()))
    }

    pub fn token(&self) -> Result<Option<String>> {
        self.store.get()
    }

    pub fn has_token(&self) -> bool {
        matches!(self.store.get(), Ok(Some(_)))
    }

    pub fn store_token(&self, token: &str) -> Result<()> {
        self.store.set(token)
    }

    pub fn clear(&self) -> Result<()> {
        self.store.clear()
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("has_token", &self.has_token())
            .finish()
    }
}

/// Returns a masked version of a token for display (first 8 chars + ...).
pub fn mask_token(token: &str) -> String {
    if token.chars().count() <= 12 {
        return "***".to_string();
    }
    let head: String = token.chars().take(8).collect();
    format!("{head}...")
}
