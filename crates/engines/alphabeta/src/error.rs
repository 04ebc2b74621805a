use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or parse an [`EngineSettings`](crate::EngineSettings) file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read settings file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("transposition table capacity must be positive")]
    ZeroCapacity,
}

/// Failure to load an [`OpeningBook`](crate::OpeningBook).
#[derive(Debug, Error)]
pub enum BookError {
    #[error("could not read opening book {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid opening book: {0}")]
    Json(#[from] serde_json::Error),
    #[error("book entry {history:?} lists malformed move {mv:?}")]
    MalformedMove { history: String, mv: String },
}
