//! Station identifier types.

use std::fmt;

/// Error returned when parsing an invalid station identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station id: {reason}")]
pub struct InvalidStationId {
    reason: &'static str,
}

/// A numeric station identifier.
///
/// Stations are not checked against any registry. User input must be a
/// positive integer; dataset values may be `0` when the field was missing.
///
/// # Examples
///
/// ```
/// use train_finder::domain::StationId;
///
/// let id = StationId::parse("1902").unwrap();
/// assert_eq!(id.get(), 1902);
///
/// // Zero and negative ids are rejected
/// assert!(StationId::parse("0").is_err());
/// assert!(StationId::parse("-3").is_err());
///
/// // So is anything that is not an integer
/// assert!(StationId::parse("kyiv").is_err());
/// assert!(StationId::parse("").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StationId(u64);

impl StationId {
    /// Wrap a raw dataset value. Any value, including zero, is accepted.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Parse a user-supplied station id.
    ///
    /// The input must be a decimal integer (an optional sign is allowed) with
    /// a value of at least 1.
    pub fn parse(s: &str) -> Result<Self, InvalidStationId> {
        let value: i64 = s.parse().map_err(|_| InvalidStationId {
            reason: "must be an integer",
        })?;

        if value < 1 {
            return Err(InvalidStationId {
                reason: "must be at least 1",
            });
        }

        Ok(Self(value as u64))
    }

    /// Returns the raw numeric value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
