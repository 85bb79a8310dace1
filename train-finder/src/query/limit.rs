//! Result truncation.

use crate::domain::Trip;

/// Keep at most the first `max` trips.
pub fn limit(trips: &[Trip], max: usize) -> Vec<Trip> {
    trips.iter().take(max).cloned().collect()
}
