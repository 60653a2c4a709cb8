use std::path::PathBuf;
use thiserror::Error;

use crate::domain::GroupId;

#[derive(Error, Debug)]
pub enum StaticStoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to access {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed JSON in {}: {source}", path.display())]
    JsonFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read {source_name} at line {line}: {source}")]
    LineRead {
        source_name: String,
        line: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed JSON in {source_name} at line {line}: {source}")]
    MalformedLine {
        source_name: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Missing required field '{field}' in {source_name} at line {line}")]
    MissingField {
        field: &'static str,
        source_name: String,
        line: usize,
    },

    #[error("Unknown market group {id} referenced by {referenced_by}")]
    DanglingReference { id: GroupId, referenced_by: String },

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StaticStoreError {
    pub fn file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StaticStoreError::File {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StaticStoreError>;
