//! In-memory trip source for testing without a dataset file.

use std::cell::Cell;

use crate::domain::Trip;

use super::convert::decode_trips;
use super::error::LoadError;
use super::source::TripSource;

#[derive(Debug, Clone)]
enum StaticData {
    Trips(Vec<Trip>),
    Json(String),
}

/// Trip source that serves fixed data and counts how often it was loaded.
#[derive(Debug)]
pub struct StaticTripSource {
    data: StaticData,
    loads: Cell<usize>,
}

impl StaticTripSource {
    /// Serve already-built trips.
    pub fn from_trips(trips: Vec<Trip>) -> Self {
        Self {
            data: StaticData::Trips(trips),
            loads: Cell::new(0),
        }
    }

    /// Serve trips decoded from JSON text on every load, exactly as a file
    /// with that content would be.
    pub fn from_json(json: impl Into<String>) -> Self {
        Self {
            data: StaticData::Json(json.into()),
            loads: Cell::new(0),
        }
    }

    /// Number of times `load` has been called.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }
}

impl TripSource for StaticTripSource {
    fn load(&self) -> Result<Vec<Trip>, LoadError> {
        self.loads.set(self.loads.get() + 1);
        match &self.data {
            StaticData::Trips(trips) => Ok(trips.clone()),
            StaticData::Json(json) => Ok(decode_trips(json.as_bytes())?.trips),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StationId, TimeOfDay};

    #[test]
    fn serves_trips_and_counts_loads() {
        let trip = Trip {
            id: 7,
            departure_station: StationId::new(1),
            arrival_station: StationId::new(2),
            price: 3.5,
            arrival_time: TimeOfDay::MIDNIGHT,
            departure_time: TimeOfDay::MIDNIGHT,
        };
        let source = StaticTripSource::from_trips(vec![trip.clone()]);
        assert_eq!(source.load_count(), 0);

        assert_eq!(source.load().unwrap(), vec![trip.clone()]);
        assert_eq!(source.load().unwrap(), vec![trip]);
        assert_eq!(source.load_count(), 2);
    }

    #[test]
    fn json_is_decoded_on_load() {
        let source = StaticTripSource::from_json(r#"[{"trainId": 4, "price": 8}]"#);
        let trips = source.load().unwrap();
        assert_eq!(trips[0].id, 4);
        assert_eq!(trips[0].price, 8.0);
    }

    #[test]
    fn malformed_json_fails_each_load() {
        let source = StaticTripSource::from_json("{");
        assert!(matches!(source.load(), Err(LoadError::Decode(_))));
        assert_eq!(source.load_count(), 1);
    }
}
