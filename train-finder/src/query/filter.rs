//! Station-pair filtering.

use crate::domain::{StationId, Trip};

/// Select trips that run from `departure` to `arrival`.
///
/// Returns a new vector in the same relative order as `trips`.
pub fn filter_by_stations(trips: &[Trip], departure: StationId, arrival: StationId) -> Vec<Trip> {
    trips
        .iter()
        .filter(|trip| trip.connects(departure, arrival))
        .cloned()
        .collect()
}
