use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid repair pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("result is not valid JSON at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("{0}")]
    Usage(String),
}

impl FixError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FixError::Read {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        FixError::Write {
            path: path.into(),
            source,
        }
    }

    #[cfg(feature = "serde")]
    pub fn from_serde(err: serde_json::Error) -> Self {
        FixError::Parse {
            line: err.line(),
            column: err.column(),
            message: err.to_string(),
        }
    }

    /// Process exit status for this error: 2 for usage mistakes, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            FixError::Usage(_) => 2,
            _ => 1,
        }
    }
}
