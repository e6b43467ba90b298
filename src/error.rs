use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// FilterError – everything that can abort a run
// ---------------------------------------------------------------------------

/// Failure of one pipeline stage.  None of these are recovered; `main` prints
/// the chain and exits non-zero.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The input or output file could not be read / written.
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input bytes are not valid UTF-16.
    #[error("input is not valid UTF-16: {0}")]
    Decode(String),

    /// The decoded text is not valid JSON.
    #[error("input is not valid JSON")]
    Parse(#[source] serde_json::Error),

    /// The JSON is well formed but does not have the catalog shape.
    #[error("entry {id:?}: {reason}")]
    Schema { id: String, reason: String },

    /// Serializing the filtered catalog failed.
    #[error("could not encode output JSON")]
    Encode(#[source] serde_json::Error),
}

impl FilterError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FilterError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn schema(id: impl Into<String>, reason: impl Into<String>) -> Self {
        FilterError::Schema {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T, E = FilterError> = std::result::Result<T, E>;
