use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelfplayError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid match config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("invalid results file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown variant '{0}' (expected makruk or ouk)")]
    UnknownVariant(String),
}
