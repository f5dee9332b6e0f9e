use crate::directory::Directory;
use crate::error::StorageResult;
use async_trait::async_trait;

/// Repository for persisting the whole directory.
///
/// Provides abstraction over where the records live between runs,
/// enabling different implementations (JSON file, in-memory mock).
/// Both calls are all-or-nothing from the caller's point of view.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Load the saved directory, or an empty one when nothing was saved yet.
    async fn load(&self) -> StorageResult<Directory>;

    /// Replace the saved state with `directory`.
    async fn save(&self, directory: &Directory) -> StorageResult<()>;
}
