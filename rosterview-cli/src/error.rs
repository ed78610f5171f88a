use std::path::PathBuf;

use rosterview_lib::error::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("records in {path} are not a JSON array of objects: {source}")]
    Records {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid view config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid filter '{0}', expected key=value")]
    BadFilter(String),

    #[error("invalid sort '{0}', expected key, key:asc or key:desc")]
    BadSort(String),

    #[error("column '{0}' is not sortable")]
    NotSortable(String),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn records(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Records {
            path: path.into(),
            source,
        }
    }
}
