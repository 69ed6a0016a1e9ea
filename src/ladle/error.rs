use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LadleError {
    #[error("Invalid recipe: {0}")]
    Validation(String),

    #[error("A recipe titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("Catalog file {path} is not valid recipe data: {source}")]
    CorruptData {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Catalog contains invalid records: {0}")]
    InvalidData(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LadleError>;
