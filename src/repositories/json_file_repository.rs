use crate::directory::Directory;
use crate::error::{StorageError, StorageResult};
use crate::models::Record;
use crate::repositories::traits::RecordRepository;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Version written into every data file.
pub const DATA_FILE_VERSION: u32 = 1;

/// On-disk layout: records in directory order.
#[derive(Debug, Serialize, Deserialize)]
struct DataFile {
    version: u32,

    #[serde(default)]
    records: Vec<Record>,
}

/// Record repository backed by a single JSON file.
///
/// Saving writes a sibling `.tmp` file first and renames it over the
/// target, so a crash mid-save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Create a new JsonFileRepository for the given data file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(path: &Path, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

#[async_trait]
impl RecordRepository for JsonFileRepository {
    async fn load(&self) -> StorageResult<Directory> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "No saved contact book, starting empty");
                return Ok(Directory::new());
            }
            Err(e) => return Err(Self::io_error(&self.path, e)),
        };

        if contents.trim().is_empty() {
            info!(path = %self.path.display(), "Saved contact book is empty");
            return Ok(Directory::new());
        }

        let data: DataFile = serde_json::from_str(&contents)?;
        if data.version != DATA_FILE_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: data.version,
                expected: DATA_FILE_VERSION,
            });
        }

        let directory = Directory::from_records(data.records);
        info!(
            path = %self.path.display(),
            records = directory.len(),
            "Contact book loaded"
        );
        Ok(directory)
    }

    async fn save(&self, directory: &Directory) -> StorageResult<()> {
        let data = DataFile {
            version: DATA_FILE_VERSION,
            records: directory.records().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&data)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Self::io_error(parent, e))?;
        }

        let temp_path = self.temp_path();
        debug!(path = %temp_path.display(), "Writing contact book to temp file");
        tokio::fs::write(&temp_path, json)
            .await
            .map_err(|e| Self::io_error(&temp_path, e))?;

        tokio::fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| Self::io_error(&self.path, e))?;

        info!(
            path = %self.path.display(),
            records = directory.len(),
            "Contact book saved"
        );
        Ok(())
    }
}
