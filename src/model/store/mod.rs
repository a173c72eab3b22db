
mod error;

pub use self::error::{Error, Result};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Whole-file record store. Every `load` reads and parses the complete file,
/// every `save` rewrites it. The file is the only state between requests;
/// nothing is cached in memory and nothing guards two racing save calls
/// (last writer wins over the whole file).
#[derive(Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the full record collection. A missing, unreadable or corrupt
    /// file yields an empty collection so that a not-yet-created data file
    /// reads as "no records yet".
    pub async fn load<T: DeserializeOwned>(&self) -> Vec<T> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("{:<12} - read {:?} failed, loading empty - {e}", "STORE", self.path);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("{:<12} - parse {:?} failed, loading empty - {e}", "STORE", self.path);
                Vec::new()
            }
        }
    }

    /// Serializes the full collection pretty-printed and overwrites the file.
    /// Write failures propagate; the previous content may or may not survive.
    pub async fn save<T: Serialize>(&self, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string_pretty(records).map_err(Error::RecordSerialize)?;

        tokio::fs::write(&self.path, raw)
            .await
            .map_err(|e| Error::FileWrite {
                path: self.path.display().to_string(),
                cause: e,
            })?;

        Ok(())
    }
}
