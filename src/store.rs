use crate::error::StoreError;
use crate::task::Task;
use serde_json::Value;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Persistence boundary for the task collection.
///
/// Neither method fails outward: `load` degrades to an empty collection and
/// `save` reports failure through its return value.
pub trait TaskStore {
    fn load(&self) -> Vec<Task>;

    /// Rewrites the whole collection. Returns `false` if nothing was persisted.
    fn save(&self, tasks: &[Task]) -> bool;
}

/// Stores the collection as a pretty-printed JSON array in a single file.
///
/// Writes are not atomic; the file is truncated and rewritten in place.
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn try_load(&self) -> Result<Vec<Task>, StoreError> {
        let data = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(self.path.clone()),
            _ => StoreError::Read(err),
        })?;

        let document: Value = serde_json::from_str(&data).map_err(StoreError::Parse)?;
        if !document.is_array() {
            return Err(StoreError::NotASequence(self.path.clone()));
        }
        serde_json::from_value(document).map_err(StoreError::Parse)
    }

    pub fn try_save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let mut json = serde_json::to_string_pretty(tasks).map_err(StoreError::Serialize)?;
        json.push('\n');
        fs::write(&self.path, json).map_err(StoreError::Write)
    }
}

impl TaskStore for JsonStore {
    fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                tracing::debug!(path = %self.path.display(), count = tasks.len(), "Loaded tasks");
                tasks
            }
            Err(StoreError::NotFound(path)) => {
                tracing::info!("{} not found. Starting with empty task list.", path.display());
                Vec::new()
            }
            Err(err @ (StoreError::Parse(_) | StoreError::NotASequence(_))) => {
                tracing::warn!("{err}. Starting fresh.");
                Vec::new()
            }
            Err(err) => {
                tracing::warn!("Error loading tasks: {err}");
                Vec::new()
            }
        }
    }

    fn save(&self, tasks: &[Task]) -> bool {
        match self.try_save(tasks) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = tasks.len(), "Saved tasks");
                true
            }
            Err(err) => {
                tracing::error!("Error saving tasks: {err}");
                false
            }
        }
    }
}
