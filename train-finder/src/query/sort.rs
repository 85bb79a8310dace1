//! Ordering of query results.
//!
//! All orderings are ascending and stable: trips with equal keys keep the
//! order they had in the dataset, which keeps truncation deterministic.

use crate::domain::{SortCriterion, Trip};

/// Sort trips by the given criterion.
///
/// - `Price`: cheapest first
/// - `ArrivalTime`: earliest arrival first
/// - `DepartureTime`: earliest departure first
///
/// Returns a sorted copy; `trips` is left as is.
pub fn sort_by_criterion(trips: &[Trip], criterion: SortCriterion) -> Vec<Trip> {
    let mut sorted = trips.to_vec();

    // `sort_by` is stable
    match criterion {
        SortCriterion::Price => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortCriterion::ArrivalTime => sorted.sort_by(|a, b| a.arrival_time.cmp(&b.arrival_time)),
        SortCriterion::DepartureTime => {
            sorted.sort_by(|a, b| a.departure_time.cmp(&b.departure_time))
        }
    }

    sorted
}
