//! Scheduled trip records.

use super::{StationId, TimeOfDay};

/// Opaque trip identifier, as found in the dataset's `trainId` field.
pub type TripId = i64;

/// A single scheduled train trip between two stations.
///
/// Trips are built once by the dataset loader and never modified afterwards.
/// Fields a dataset entry left out hold their zero value.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    /// Dataset identifier of the train.
    pub id: TripId,

    /// Station the train departs from.
    pub departure_station: StationId,

    /// Station the train arrives at.
    pub arrival_station: StationId,

    /// Ticket price. Never negative.
    pub price: f64,

    /// Time of day the train arrives.
    pub arrival_time: TimeOfDay,

    /// Time of day the train departs.
    pub departure_time: TimeOfDay,
}

impl Trip {
    /// Returns true if this trip runs from `departure` to `arrival`.
    pub fn connects(&self, departure: StationId, arrival: StationId) -> bool {
        self.departure_station == departure && self.arrival_station == arrival
    }
}
