//! File-backed trip source.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::Trip;

use super::convert::decode_trips;
use super::error::LoadError;

/// Trait for providing the trip dataset.
///
/// This abstraction allows the finder to be tested with in-memory data.
pub trait TripSource {
    /// Load every trip in dataset order.
    ///
    /// Called once per query; implementations must not cache between calls.
    fn load(&self) -> Result<Vec<Trip>, LoadError>;
}

/// Reads the dataset from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct FileTripSource {
    path: PathBuf,
}

impl FileTripSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the dataset file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TripSource for FileTripSource {
    fn load(&self) -> Result<Vec<Trip>, LoadError> {
        let bytes = std::fs::read(&self.path).map_err(|source| LoadError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;

        let decoded = decode_trips(&bytes)?;

        if decoded.defaulted_fields > 0 {
            warn!(
                path = %self.path.display(),
                defaulted_fields = decoded.defaulted_fields,
                "dataset entries had missing or unreadable fields; zero values used"
            );
        }
        if decoded.clamped_fields > 0 {
            warn!(
                path = %self.path.display(),
                clamped_fields = decoded.clamped_fields,
                "dataset entries had negative prices; clamped to zero"
            );
        }
        debug!(
            path = %self.path.display(),
            trips = decoded.trips.len(),
            "loaded dataset"
        );

        Ok(decoded.trips)
    }
}
