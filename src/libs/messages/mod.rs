pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;

use super::error::StoreError;

impl From<&StoreError> for Message {
    fn from(error: &StoreError) -> Self {
        match error {
            StoreError::StorageMissing(path) => Message::StorageMissing(path.display().to_string()),
            StoreError::StorageCorrupt { path, .. } => Message::StorageCorrupt(path.display().to_string()),
            StoreError::NotFound(id) => Message::TaskNotFound(*id),
            StoreError::Validation { .. } => Message::ValidationFailed(error.to_string()),
            StoreError::StorageRead { .. } | StoreError::StorageWrite { .. } => Message::StorageFailed(error.to_string()),
        }
    }
}
