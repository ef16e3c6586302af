use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::StoreError;

use super::StateStore;

/// On-disk state store: one JSON document per namespaced key, written to
/// `<data dir>/<key>.json`. The data directory defaults to the platform
/// location resolved by `directories` and can be overridden per invocation.
#[derive(Debug, Clone)]
pub struct DiskStore {
    dir: PathBuf,
}

impl DiskStore {
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

        Ok(Self { dir })
    }

    /// Open the store at the platform data directory.
    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("dev", "sessionhop", "sessionhop")
            .ok_or(StoreError::NoDataDir)?;
        Self::new(dirs.data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StateStore for DiskStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        let raw = fs::read_to_string(&path).map_err(|e| StoreError::AccessError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Some(raw))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).map_err(|e| StoreError::AccessError {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(())
    }
}
