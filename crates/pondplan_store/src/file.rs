//! JSON-file pond store.

use crate::error::{StoreError, StoreResult};
use crate::saved::{PondSummary, SavedPond};
use crate::store::{sanitize_name, PondStore};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A pond store keeping one pretty-printed JSON file per configuration.
///
/// Files live directly under the storage directory, named
/// `<sanitized-name>.json`. The directory is created on construction.
#[derive(Debug)]
pub struct JsonFileStore {
    directory: PathBuf,
}

impl JsonFileStore {
    /// Opens a store rooted at `directory`, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(directory: impl Into<PathBuf>) -> StoreResult<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory })
    }

    /// The directory configurations are stored under.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{}.json", sanitize_name(name)))
    }
}

impl PondStore for JsonFileStore {
    fn save(&self, pond: &SavedPond) -> StoreResult<String> {
        let path = self.path_for(&pond.name);
        let contents = serde_json::to_string_pretty(pond)?;
        fs::write(&path, contents)?;
        debug!(path = %path.display(), "pond configuration saved");

        let filename = path
            .file_name()
            .map(|f| f.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(filename)
    }

    fn load(&self, name: &str) -> StoreResult<SavedPond> {
        let path = self.path_for(name);
        if !path.exists() {
            return Err(StoreError::not_found(name));
        }
        let contents = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn list(&self) -> StoreResult<Vec<PondSummary>> {
        let mut summaries = Vec::new();

        for entry in fs::read_dir(&self.directory)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }

            // Skip files that cannot be read or decoded.
            let Ok(contents) = fs::read_to_string(&path) else {
                continue;
            };
            let Ok(pond) = serde_json::from_str::<SavedPond>(&contents) else {
                continue;
            };

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            summaries.push(PondSummary::from_saved(stem, &pond));
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn delete(&self, name: &str) -> StoreResult<bool> {
        let path = self.path_for(name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        debug!(path = %path.display(), "pond configuration deleted");
        Ok(true)
    }

    fn exists(&self, name: &str) -> bool {
        self.path_for(name).exists()
    }
}
