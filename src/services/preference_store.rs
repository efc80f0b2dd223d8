use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::error::PreferenceError;

/// Key under which the last-used symbol name is stored.
pub const LAST_NAME_KEY: &str = "image_to_code.name";

/// Trait for small persisted string preferences
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    /// Read a value
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store or replace a value
    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// In-memory preferences, lost on exit
pub struct InMemoryPreferences {
    values: Arc<RwLock<BTreeMap<String, String>>>,
}

impl InMemoryPreferences {
    pub fn new() -> Self {
        Self {
            values: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }
}

impl Default for InMemoryPreferences {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PreferenceStore for InMemoryPreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.values.read().await;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.write().await;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences persisted as a flat YAML map.
///
/// A missing file reads as empty. A file that fails to parse is logged and
/// treated as empty; the next `set` rewrites it.
pub struct FilePreferences {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferences {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        match serde_yaml::from_str(&content) {
            Ok(values) => Ok(values),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), %e, "Failed to parse preferences, ignoring");
                Ok(BTreeMap::new())
            }
        }
    }
}

#[async_trait]
impl PreferenceStore for FilePreferences {
    async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let _guard = self.write_lock.lock().await;

        let mut values = self.load().await?;
        values.insert(key.to_string(), value.to_string());

        let content =
            serde_yaml::to_string(&values).map_err(|e| PreferenceError::Serialize(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, content).await?;

        tracing::debug!(path = %self.path.display(), key, "Preference stored");
        Ok(())
    }
}

/// The last-used symbol name, if one was stored.
pub async fn last_used_name(
    store: &dyn PreferenceStore,
) -> Result<Option<String>, PreferenceError> {
    store.get(LAST_NAME_KEY).await
}

/// Pick the symbol name for an export.
///
/// An explicit name wins, then the stored name, then `fallback`, then the
/// empty string. Names are used verbatim.
pub async fn resolve_name(
    store: &dyn PreferenceStore,
    explicit: Option<String>,
    fallback: Option<String>,
) -> Result<String, PreferenceError> {
    if let Some(name) = explicit {
        return Ok(name);
    }
    if let Some(name) = last_used_name(store).await? {
        return Ok(name);
    }
    Ok(fallback.unwrap_or_default())
}
