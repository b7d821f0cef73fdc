//! Error kinds produced by the task store.
//!
//! Load-time storage problems (`StorageMissing`, `StorageCorrupt`) are
//! recoverable: the store falls back to an empty collection. Everything
//! else is returned to the caller.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("task file {0} not found")]
    StorageMissing(PathBuf),

    #[error("task file {path} is damaged or contains invalid data: {reason}")]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("failed to read task file {path}: {source}")]
    StorageRead { path: PathBuf, source: io::Error },

    #[error("failed to write task file {path}: {source}")]
    StorageWrite { path: PathBuf, source: io::Error },

    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("task with id {0} not found")]
    NotFound(u32),
}

impl StoreError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        StoreError::Validation { field, reason: reason.into() }
    }

    /// Whether the store may continue with an empty collection after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, StoreError::StorageMissing(_) | StoreError::StorageCorrupt { .. })
    }
}
