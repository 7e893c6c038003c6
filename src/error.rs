use std::path::PathBuf;

use thiserror::Error;

use crate::models::Part;

pub type Result<T> = std::result::Result<T, AdventError>;

#[derive(Error, Debug)]
pub enum AdventError {
    /// Bad or missing command-line argument. The message is shown verbatim.
    #[error("{0}")]
    Validation(String),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is not a directory")]
    NotADirectory(PathBuf),

    /// A template file already exists in the day directory.
    #[error("{0} already exists")]
    Conflict(PathBuf),

    #[error("Part {part} function is not defined in {path}")]
    Contract { part: Part, path: PathBuf },

    #[error("solution for part {part} failed: {source:#}")]
    Solution {
        part: Part,
        #[source]
        source: anyhow::Error,
    },

    #[error("{0}")]
    Remote(String),

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl AdventError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AdventError::Io {
            path: path.into(),
            source,
        }
    }
}
