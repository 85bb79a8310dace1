//! Text rendering of query results.

use crate::domain::Trip;
use crate::query::QueryError;

/// Printed when a valid query matched no trips.
pub const NO_TRAINS_MESSAGE: &str = "no trains were found according to the specified data";

/// Render one trip as a single output line (without trailing newline).
///
/// # Examples
///
/// ```
/// use train_finder::display::format_trip;
/// use train_finder::domain::{StationId, TimeOfDay, Trip};
///
/// let trip = Trip {
///     id: 1177,
///     departure_station: StationId::new(1902),
///     arrival_station: StationId::new(1929),
///     price: 164.65,
///     arrival_time: TimeOfDay::parse_hhmmss("10:25:00").unwrap(),
///     departure_time: TimeOfDay::parse_hhmmss("15:15:00").unwrap(),
/// };
/// assert_eq!(
///     format_trip(&trip),
///     "TrainID: 1177, DepartureStationID: 1902, ArrivalStationID: 1929, \
///      Price: 164.65, ArrivalTime: 10:25:00, DepartureTime: 15:15:00"
/// );
/// ```
pub fn format_trip(trip: &Trip) -> String {
    format!(
        "TrainID: {}, DepartureStationID: {}, ArrivalStationID: {}, \
         Price: {}, ArrivalTime: {}, DepartureTime: {}",
        trip.id,
        trip.departure_station,
        trip.arrival_station,
        trip.price,
        trip.arrival_time,
        trip.departure_time
    )
}

/// Render a failed query for the user.
pub fn format_error(err: &QueryError) -> String {
    format!("invalid data entered - {err}")
}
