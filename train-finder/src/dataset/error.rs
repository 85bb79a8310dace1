//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the trip dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The dataset could not be read at all
    #[error("dataset {} is unavailable: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The dataset is not a JSON array of objects
    #[error("dataset could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
