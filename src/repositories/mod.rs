mod json_file_repository;
mod traits;

pub use json_file_repository::{JsonFileRepository, DATA_FILE_VERSION};
pub use traits::RecordRepository;
