//! Domain types for the train finder.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod criterion;
mod station;
mod time;
mod trip;

pub use criterion::{SortCriterion, UnknownCriterion};
pub use station::{InvalidStationId, StationId};
pub use time::{TimeError, TimeOfDay};
pub use trip::{Trip, TripId};
