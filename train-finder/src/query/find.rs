//! The trip query pipeline.
//!
//! validate → load → filter by station pair → sort by criterion → limit

use tracing::{debug, info};

use crate::dataset::{FileTripSource, LoadError, TripSource};
use crate::domain::Trip;

use super::config::FinderConfig;
use super::filter::filter_by_stations;
use super::limit::limit;
use super::sort::sort_by_criterion;
use super::validate::{ValidationError, validate};

/// Error from a trip query.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// The user's input was rejected; nothing was loaded
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The dataset could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Answers trip queries against a [`TripSource`].
#[derive(Debug)]
pub struct TripFinder<S> {
    source: S,
    config: FinderConfig,
}

impl TripFinder<FileTripSource> {
    /// Create a finder reading the dataset file named in `config`.
    pub fn from_config(config: FinderConfig) -> Self {
        let source = FileTripSource::new(&config.dataset_path);
        Self { source, config }
    }
}

impl<S: TripSource> TripFinder<S> {
    /// Create a finder over an arbitrary source.
    pub fn new(source: S, config: FinderConfig) -> Self {
        Self { source, config }
    }

    /// Get the underlying source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Get the configuration.
    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    /// Find up to `max_results` trips from `departure_station` to
    /// `arrival_station`, ordered by `criterion`.
    ///
    /// Input is validated before the dataset is touched. No matching trips is
    /// not an error: the result is simply empty.
    pub fn find_trains(
        &self,
        departure_station: &str,
        arrival_station: &str,
        criterion: &str,
    ) -> Result<Vec<Trip>, QueryError> {
        let query = validate(departure_station, arrival_station, criterion)?;
        debug!(
            departure = %query.departure,
            arrival = %query.arrival,
            criterion = %query.criterion,
            "validated query"
        );

        let trips = self.source.load()?;
        let matching = filter_by_stations(&trips, query.departure, query.arrival);
        let sorted = sort_by_criterion(&matching, query.criterion);
        let result = limit(&sorted, self.config.max_results);

        info!(
            loaded = trips.len(),
            matched = matching.len(),
            returned = result.len(),
            "trip query finished"
        );

        Ok(result)
    }
}

/// Run a query against the default dataset file.
pub fn find_trains(
    departure_station: &str,
    arrival_station: &str,
    criterion: &str,
) -> Result<Vec<Trip>, QueryError> {
    TripFinder::from_config(FinderConfig::default()).find_trains(
        departure_station,
        arrival_station,
        criterion,
    )
}
