//! Session storage - persisted tokens and table hint

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::SessionData;

/// Where session data survives restarts
pub trait SessionStorage: Send + Sync + std::fmt::Debug {
    fn load(&self) -> std::io::Result<Option<SessionData>>;
    fn save(&self, data: &SessionData) -> std::io::Result<()>;
    fn clear(&self) -> std::io::Result<()>;
}

/// JSON file storage
#[derive(Debug, Clone)]
pub struct FileSessionStorage {
    path: PathBuf,
}

impl FileSessionStorage {
    /// Store session data at `{base_path}/{filename}`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    fn ensure_dir(&self) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStorage for FileSessionStorage {
    fn load(&self) -> std::io::Result<Option<SessionData>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(&self.path)?;
        let data = serde_json::from_str(&json)?;
        Ok(Some(data))
    }

    fn save(&self, data: &SessionData) -> std::io::Result<()> {
        self.ensure_dir()?;
        let json = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, json)
    }

    fn clear(&self) -> std::io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// In-memory storage (tests, short-lived tools)
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    data: Mutex<Option<SessionData>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn load(&self) -> std::io::Result<Option<SessionData>> {
        Ok(self.data.lock().clone())
    }

    fn save(&self, data: &SessionData) -> std::io::Result<()> {
        *self.data.lock() = Some(data.clone());
        Ok(())
    }

    fn clear(&self) -> std::io::Result<()> {
        *self.data.lock() = None;
        Ok(())
    }
}
