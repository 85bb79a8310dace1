//! Sort criteria for trip queries.

use std::fmt;

/// Error returned when a criterion name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort criterion: {0:?}")]
pub struct UnknownCriterion(pub String);

/// The key a query result is ordered by. All orderings are ascending.
///
/// # Examples
///
/// ```
/// use train_finder::domain::SortCriterion;
///
/// assert_eq!(SortCriterion::parse("price").unwrap(), SortCriterion::Price);
///
/// // Matching ignores ASCII case
/// assert_eq!(
///     SortCriterion::parse("Arrival-Time").unwrap(),
///     SortCriterion::ArrivalTime
/// );
///
/// assert!(SortCriterion::parse("fastest").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortCriterion {
    /// Cheapest first.
    Price,
    /// Earliest arrival first.
    ArrivalTime,
    /// Earliest departure first.
    DepartureTime,
}

impl SortCriterion {
    /// Every supported criterion, in the order they are offered to users.
    pub const ALL: [SortCriterion; 3] = [
        SortCriterion::Price,
        SortCriterion::ArrivalTime,
        SortCriterion::DepartureTime,
    ];

    /// Parse a criterion name, ignoring ASCII case.
    pub fn parse(s: &str) -> Result<Self, UnknownCriterion> {
        let lowered = s.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == lowered)
            .ok_or_else(|| UnknownCriterion(s.to_string()))
    }

    /// The canonical lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            SortCriterion::Price => "price",
            SortCriterion::ArrivalTime => "arrival-time",
            SortCriterion::DepartureTime => "departure-time",
        }
    }
}

impl fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
