
mod error;
pub mod message;
pub mod store;

use std::path::PathBuf;

use store::FileStore;

use crate::config;

pub use self::error::{Error, Result};

#[derive(Clone)]
pub struct ModelManager {
    store: FileStore,
}

impl ModelManager {
    pub async fn new() -> Result<Self> {
        let store = FileStore::new(&config().DATA_FILE);
        Ok(ModelManager { store })
    }

    /// Manager over an explicit data file, bypassing config. Test use.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        ModelManager {
            store: FileStore::new(path),
        }
    }

    pub(in crate::model) fn store(&self) -> &FileStore {
        &self.store
    }
}
