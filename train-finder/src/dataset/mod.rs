//! Trip dataset loading.
//!
//! The dataset is a JSON array of trip objects. It is re-read on every
//! query; nothing is cached or written back.
//!
//! Key characteristics of the dataset:
//! - Station ids and train ids are JSON numbers
//! - Times are "HH:MM:SS" strings with no date
//! - Entries may omit fields or carry the wrong type; such fields become
//!   zero values and are counted rather than rejected

mod convert;
mod error;
mod mock;
mod source;
mod types;

pub use convert::{ConvertedTrip, DecodedTrips, convert_raw_trip, decode_trips};
pub use error::LoadError;
pub use mock::StaticTripSource;
pub use source::{FileTripSource, TripSource};
pub use types::RawTrip;
