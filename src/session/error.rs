use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when persisting session state.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Failed to access session file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse session file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize session: {0}")]
    Serialize(#[from] toml::ser::Error),
}
