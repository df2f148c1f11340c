//! Error types for macime

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IME not found: '{0}'")]
    NotFound(String),

    #[error("IME switch failed: '{0}' ({1})")]
    SelectFailed(String, i32),

    #[error("Cannot get current IME")]
    NoCurrentSource,

    #[error("Cannot create temp directory: '{}'", path.display())]
    CreateTempDirFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot save IME to '{}'", path.display())]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot load IME from '{}': {reason}", path.display())]
    LoadFailed { path: PathBuf, reason: String },

    #[error("Serializing JSON failed: {0}")]
    JsonSerializationFailed(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    #[error("Cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::JsonSerializationFailed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
