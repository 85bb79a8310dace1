//! Raw dataset records.
//!
//! These types map directly onto the JSON dataset. Every field is an
//! untyped, optional `serde_json::Value` because dataset entries may omit
//! fields or carry the wrong JSON type; `convert` decides what each field
//! becomes. `convert` only ever builds a `RawTrip` from a JSON object.

use serde::Deserialize;
use serde_json::Value;

/// One entry of the dataset array, before any field is interpreted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTrip {
    /// Train identifier (number).
    pub train_id: Option<Value>,

    /// Departure station id (number).
    pub departure_station_id: Option<Value>,

    /// Arrival station id (number).
    pub arrival_station_id: Option<Value>,

    /// Ticket price (number).
    pub price: Option<Value>,

    /// Arrival time of day (string, "HH:MM:SS").
    pub arrival_time: Option<Value>,

    /// Departure time of day (string, "HH:MM:SS").
    pub departure_time: Option<Value>,
}
