//! Conversion from raw dataset records to domain types.
//!
//! Decoding is lenient at the field level: a field that is missing or has the
//! wrong type becomes its zero value instead of rejecting the record. Every
//! such substitution is reported so callers can log it.

use serde_json::{Map, Value};
use tracing::trace;

use crate::domain::{StationId, TimeOfDay, Trip, TripId};

use super::error::LoadError;
use super::types::RawTrip;

/// A converted trip plus the fields that did not carry a usable value.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertedTrip {
    pub trip: Trip,

    /// Fields that were missing or unreadable and fell back to zero.
    pub defaulted: Vec<&'static str>,

    /// Fields that were readable but out of range and were clamped to zero.
    pub clamped: Vec<&'static str>,
}

/// Result of decoding a whole dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodedTrips {
    /// Trips in dataset order.
    pub trips: Vec<Trip>,

    /// Total number of fields that were missing or unreadable.
    pub defaulted_fields: usize,

    /// Total number of fields clamped into range (negative prices).
    pub clamped_fields: usize,
}

/// Decode raw dataset bytes into trips.
///
/// The content must be a JSON array whose elements are objects or `null`.
/// A `null` element becomes an all-zero trip; a repeated key keeps its last
/// value. Any other element fails the whole load with [`LoadError::Decode`].
pub fn decode_trips(bytes: &[u8]) -> Result<DecodedTrips, LoadError> {
    let entries: Vec<Option<Map<String, Value>>> = serde_json::from_slice(bytes)?;

    let mut decoded = DecodedTrips {
        trips: Vec::with_capacity(entries.len()),
        ..DecodedTrips::default()
    };

    for (index, entry) in entries.into_iter().enumerate() {
        let raw = match entry {
            Some(map) => serde_json::from_value(Value::Object(map))?,
            None => RawTrip::default(),
        };

        let converted = convert_raw_trip(&raw);
        if !converted.defaulted.is_empty() {
            trace!(
                index,
                fields = ?converted.defaulted,
                "missing or unreadable fields in dataset entry; zero values used"
            );
        }
        if !converted.clamped.is_empty() {
            trace!(
                index,
                fields = ?converted.clamped,
                "negative values in dataset entry clamped to zero"
            );
        }
        decoded.defaulted_fields += converted.defaulted.len();
        decoded.clamped_fields += converted.clamped.len();
        decoded.trips.push(converted.trip);
    }

    Ok(decoded)
}

/// Convert a single raw record, substituting zero values where needed.
pub fn convert_raw_trip(raw: &RawTrip) -> ConvertedTrip {
    let mut defaulted = Vec::new();
    let mut check = |name: &'static str, present: bool| {
        if !present {
            defaulted.push(name);
        }
    };

    let id = raw.train_id.as_ref().and_then(read_trip_id);
    check("trainId", id.is_some());

    let departure_station = raw.departure_station_id.as_ref().and_then(read_station_id);
    check("departureStationId", departure_station.is_some());

    let arrival_station = raw.arrival_station_id.as_ref().and_then(read_station_id);
    check("arrivalStationId", arrival_station.is_some());

    let price = raw.price.as_ref().and_then(read_price);
    check("price", price.is_some());

    let arrival_time = raw.arrival_time.as_ref().and_then(read_time_of_day);
    check("arrivalTime", arrival_time.is_some());

    let departure_time = raw.departure_time.as_ref().and_then(read_time_of_day);
    check("departureTime", departure_time.is_some());

    let mut clamped = Vec::new();
    let price = match price {
        Some(p) if p < 0.0 => {
            clamped.push("price");
            0.0
        }
        other => other.unwrap_or_default(),
    };

    ConvertedTrip {
        trip: Trip {
            id: id.unwrap_or_default(),
            departure_station: departure_station.unwrap_or_default(),
            arrival_station: arrival_station.unwrap_or_default(),
            price,
            arrival_time: arrival_time.unwrap_or_default(),
            departure_time: departure_time.unwrap_or_default(),
        },
        defaulted,
        clamped,
    }
}

/// Read a JSON number and truncate it toward zero.
fn read_trip_id(value: &Value) -> Option<TripId> {
    let n = value.as_f64().filter(|n| n.is_finite())?;
    Some(n.trunc() as TripId)
}

/// Read a non-negative JSON number as a station id, truncating fractions.
fn read_station_id(value: &Value) -> Option<StationId> {
    let n = value.as_f64().filter(|n| n.is_finite() && *n >= 0.0)?;
    Some(StationId::new(n.trunc() as u64))
}

/// Read any finite JSON number; range is checked by the caller.
fn read_price(value: &Value) -> Option<f64> {
    value.as_f64().filter(|n| n.is_finite())
}

fn read_time_of_day(value: &Value) -> Option<TimeOfDay> {
    TimeOfDay::parse_hhmmss(value.as_str()?).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: Value) -> RawTrip {
        serde_json::from_value(value).unwrap()
    }

    fn hms(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn convert_complete_record() {
        let converted = convert_raw_trip(&raw(json!({
            "trainId": 1177,
            "departureStationId": 1902,
            "arrivalStationId": 1929,
            "price": 164.65,
            "arrivalTime": "10:25:00",
            "departureTime": "15:15:00"
        })));

        assert!(converted.defaulted.is_empty());
        assert_eq!(
            converted.trip,
            Trip {
                id: 1177,
                departure_station: StationId::new(1902),
                arrival_station: StationId::new(1929),
                price: 164.65,
                arrival_time: hms(10, 25, 0),
                departure_time: hms(15, 15, 0),
            }
        );
    }

    #[test]
    fn missing_fields_default_to_zero() {
        let converted = convert_raw_trip(&raw(json!({ "trainId": 5 })));

        assert_eq!(converted.trip.id, 5);
        assert_eq!(converted.trip.departure_station, StationId::new(0));
        assert_eq!(converted.trip.arrival_station, StationId::new(0));
        assert_eq!(converted.trip.price, 0.0);
        assert_eq!(converted.trip.arrival_time, TimeOfDay::MIDNIGHT);
        assert_eq!(converted.trip.departure_time, TimeOfDay::MIDNIGHT);
        assert_eq!(
            converted.defaulted,
            vec![
                "departureStationId",
                "arrivalStationId",
                "price",
                "arrivalTime",
                "departureTime"
            ]
        );
    }

    #[test]
    fn mistyped_fields_default_to_zero() {
        let converted = convert_raw_trip(&raw(json!({
            "trainId": "1177",
            "departureStationId": -4,
            "arrivalStationId": true,
            "price": -10,
            "arrivalTime": 1025,
            "departureTime": "3pm"
        })));

        assert_eq!(
            converted.defaulted,
            vec![
                "trainId",
                "departureStationId",
                "arrivalStationId",
                "arrivalTime",
                "departureTime"
            ]
        );
        assert_eq!(converted.trip.id, 0);
        assert_eq!(converted.trip.departure_station, StationId::new(0));
        assert_eq!(converted.trip.price, 0.0);
        assert_eq!(converted.trip.departure_time, TimeOfDay::MIDNIGHT);
    }

    #[test]
    fn negative_price_is_clamped_not_defaulted() {
        let converted = convert_raw_trip(&raw(json!({ "price": -10 })));

        assert_eq!(converted.trip.price, 0.0);
        assert_eq!(converted.clamped, vec!["price"]);
        assert!(!converted.defaulted.contains(&"price"));
    }

    #[test]
    fn non_numeric_price_is_defaulted_not_clamped() {
        let converted = convert_raw_trip(&raw(json!({ "price": "cheap" })));

        assert_eq!(converted.trip.price, 0.0);
        assert!(converted.clamped.is_empty());
        assert!(converted.defaulted.contains(&"price"));
    }

    #[test]
    fn null_counts_as_missing() {
        let converted = convert_raw_trip(&raw(json!({ "price": null })));
        assert!(converted.defaulted.contains(&"price"));
    }

    #[test]
    fn fractional_ids_are_truncated() {
        let converted = convert_raw_trip(&raw(json!({
            "trainId": 12.9,
            "departureStationId": 1.7,
            "arrivalStationId": 2.0
        })));

        assert_eq!(converted.trip.id, 12);
        assert_eq!(converted.trip.departure_station, StationId::new(1));
        assert_eq!(converted.trip.arrival_station, StationId::new(2));
    }

    #[test]
    fn decode_array_in_order() {
        let decoded = decode_trips(
            br#"[
                {"trainId": 1, "departureStationId": 1, "arrivalStationId": 2, "price": 10,
                 "arrivalTime": "10:00:00", "departureTime": "09:00:00"},
                {"trainId": 2, "departureStationId": 2, "arrivalStationId": 1, "price": 20,
                 "arrivalTime": "12:00:00", "departureTime": "11:00:00"}
            ]"#,
        )
        .unwrap();

        assert_eq!(decoded.defaulted_fields, 0);
        let ids: Vec<_> = decoded.trips.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn decode_counts_defaulted_fields() {
        let decoded = decode_trips(br#"[{"trainId": 1}, {}]"#).unwrap();
        assert_eq!(decoded.trips.len(), 2);
        assert_eq!(decoded.defaulted_fields, 5 + 6);
    }

    #[test]
    fn decode_empty_array() {
        let decoded = decode_trips(b"[]").unwrap();
        assert!(decoded.trips.is_empty());
        assert_eq!(decoded.defaulted_fields, 0);
    }

    #[test]
    fn decode_rejects_malformed_content() {
        assert!(matches!(decode_trips(b""), Err(LoadError::Decode(_))));
        assert!(matches!(decode_trips(b"{\"trainId\": 1}"), Err(LoadError::Decode(_))));
        assert!(matches!(decode_trips(b"[1, 2]"), Err(LoadError::Decode(_))));
        assert!(matches!(decode_trips(b"[{\"trainId\": 1}"), Err(LoadError::Decode(_))));
        assert!(matches!(decode_trips(b"[\"trip\"]"), Err(LoadError::Decode(_))));
    }

    #[test]
    fn decode_rejects_array_shaped_entries() {
        let result = decode_trips(br#"[[1, 1, 2, 5, "a", "b"]]"#);
        assert!(matches!(result, Err(LoadError::Decode(_))));

        let result = decode_trips(br#"[[7, 1, 2, 5, "10:00:00", "09:00:00"]]"#);
        assert!(matches!(result, Err(LoadError::Decode(_))));
    }

    #[test]
    fn decode_null_entry_as_zero_trip() {
        let decoded = decode_trips(
            br#"[
                null,
                {"trainId": 2, "departureStationId": 1, "arrivalStationId": 2, "price": 20,
                 "arrivalTime": "12:00:00", "departureTime": "11:00:00"}
            ]"#,
        )
        .unwrap();

        assert_eq!(decoded.trips.len(), 2);
        assert_eq!(
            decoded.trips[0],
            Trip {
                id: 0,
                departure_station: StationId::new(0),
                arrival_station: StationId::new(0),
                price: 0.0,
                arrival_time: TimeOfDay::MIDNIGHT,
                departure_time: TimeOfDay::MIDNIGHT,
            }
        );
        assert_eq!(decoded.trips[1].id, 2);
        assert_eq!(decoded.defaulted_fields, 6);
    }

    #[test]
    fn decode_duplicate_key_keeps_last_value() {
        let decoded = decode_trips(br#"[{"trainId": 1, "price": 5, "price": 6}]"#).unwrap();

        assert_eq!(decoded.trips.len(), 1);
        assert_eq!(decoded.trips[0].id, 1);
        assert_eq!(decoded.trips[0].price, 6.0);
    }

    #[test]
    fn decode_counts_clamped_fields() {
        let decoded = decode_trips(br#"[{"price": -1}, {"price": -2.5}, {"price": 3}]"#).unwrap();
        assert_eq!(decoded.clamped_fields, 2);
        let prices: Vec<_> = decoded.trips.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![0.0, 0.0, 3.0]);
    }
}
