use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GyftError {
    #[error("Could not create directory {path:?}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not create file {path:?}")]
    CreateFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("File {0:?} already exists. Use '--force' to overwrite it")]
    FileExists(PathBuf),
}
