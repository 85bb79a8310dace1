//! Trip queries.
//!
//! A query takes a departure station, an arrival station and a sort
//! criterion as raw user strings and returns at most three trips:
//!
//! 1. validate the input (first failing check wins, nothing is loaded)
//! 2. load the dataset afresh
//! 3. keep trips for the exact station pair, in dataset order
//! 4. stable-sort by the criterion
//! 5. keep the first three

mod config;
mod filter;
mod find;
mod limit;
mod sort;
mod validate;

pub use config::{DEFAULT_DATASET_PATH, FinderConfig, MAX_RESULTS};
pub use filter::filter_by_stations;
pub use find::{QueryError, TripFinder, find_trains};
pub use limit::limit;
pub use sort::sort_by_criterion;
pub use validate::{ValidatedQuery, ValidationError, validate};
