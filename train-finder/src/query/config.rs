//! Configuration for trip queries.

use std::path::PathBuf;

/// Hard cap on the number of trips a query returns.
pub const MAX_RESULTS: usize = 3;

/// Default dataset location, relative to the working directory.
pub const DEFAULT_DATASET_PATH: &str = "data.json";

/// Configuration parameters for the trip finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderConfig {
    /// Path to the JSON dataset.
    pub dataset_path: PathBuf,

    /// Maximum number of trips to return.
    /// Never more than [`MAX_RESULTS`].
    pub max_results: usize,
}

impl FinderConfig {
    /// Create a new configuration with the given parameters.
    ///
    /// `max_results` is clamped to [`MAX_RESULTS`].
    pub fn new(dataset_path: impl Into<PathBuf>, max_results: usize) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            max_results: max_results.min(MAX_RESULTS),
        }
    }

    /// Set the dataset path.
    pub fn with_dataset_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset_path = path.into();
        self
    }

    /// Set the result limit, clamped to [`MAX_RESULTS`].
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results.min(MAX_RESULTS);
        self
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from(DEFAULT_DATASET_PATH),
            max_results: MAX_RESULTS,
        }
    }
}
