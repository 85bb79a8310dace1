//! Validation of user-supplied query input.
//!
//! Checks run in a fixed order and stop at the first failure, so the error
//! a user sees is always the earliest problem in their input.

use crate::domain::{SortCriterion, StationId};

/// User input problems, reported before any data is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("empty departure station")]
    EmptyDepartureStation,

    #[error("empty arrival station")]
    EmptyArrivalStation,

    #[error("bad departure station input")]
    BadDepartureStationInput,

    #[error("bad arrival station input")]
    BadArrivalStationInput,

    #[error("unsupported criteria")]
    UnsupportedCriteria,
}

/// A query whose input has passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub departure: StationId,
    pub arrival: StationId,
    pub criterion: SortCriterion,
}

/// Validate raw query input.
///
/// Order of checks:
/// 1. departure station is non-empty
/// 2. arrival station is non-empty
/// 3. departure station is an integer ≥ 1
/// 4. arrival station is an integer ≥ 1
/// 5. criterion is `price`, `arrival-time` or `departure-time`, any case
pub fn validate(
    departure_station: &str,
    arrival_station: &str,
    criterion: &str,
) -> Result<ValidatedQuery, ValidationError> {
    if departure_station.is_empty() {
        return Err(ValidationError::EmptyDepartureStation);
    }
    if arrival_station.is_empty() {
        return Err(ValidationError::EmptyArrivalStation);
    }

    let departure = StationId::parse(departure_station)
        .map_err(|_| ValidationError::BadDepartureStationInput)?;
    let arrival =
        StationId::parse(arrival_station).map_err(|_| ValidationError::BadArrivalStationInput)?;

    let criterion =
        SortCriterion::parse(criterion).map_err(|_| ValidationError::UnsupportedCriteria)?;

    Ok(ValidatedQuery {
        departure,
        arrival,
        criterion,
    })
}
