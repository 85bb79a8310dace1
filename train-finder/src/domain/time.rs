//! Time-of-day handling for timetable data.
//!
//! The dataset provides times as fixed-width "HH:MM:SS" strings with no date
//! component. This module wraps them in an ordered type so trips can be
//! sorted by departure or arrival.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day, with second precision.
///
/// There is no date, so `23:59:59` always sorts after `00:00:00`.
///
/// # Examples
///
/// ```
/// use train_finder::domain::TimeOfDay;
///
/// let time = TimeOfDay::parse_hhmmss("14:30:05").unwrap();
/// assert_eq!(time.to_string(), "14:30:05");
/// assert!(TimeOfDay::MIDNIGHT < time);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// The zero time of day, used when a dataset time cannot be parsed.
    pub const MIDNIGHT: Self = Self(NaiveTime::MIN);

    /// Create a time of day from its components.
    ///
    /// Returns `None` if any component is out of range.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    /// Parse a time from "HH:MM:SS" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_finder::domain::TimeOfDay;
    ///
    /// // Valid times
    /// assert!(TimeOfDay::parse_hhmmss("00:00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmmss("23:59:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(TimeOfDay::parse_hhmmss("14:30").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("4:30:00").is_err());
    /// assert!(TimeOfDay::parse_hhmmss("24:00:00").is_err());
    /// ```
    pub fn parse_hhmmss(s: &str) -> Result<Self, TimeError> {
        if s.len() != 8 {
            return Err(TimeError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeError::new("expected colons at positions 2 and 5"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Self::from_hms(hour, minute, second).ok_or_else(|| TimeError::new("invalid time"))
    }

    /// Parse a time, falling back to [`TimeOfDay::MIDNIGHT`] on any error.
    pub fn parse_or_midnight(s: &str) -> Self {
        Self::parse_hhmmss(s).unwrap_or(Self::MIDNIGHT)
    }

    /// Returns the underlying chrono time.
    pub fn time(&self) -> NaiveTime {
        self.0
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }
}

impl Default for TimeOfDay {
    fn default() -> Self {
        Self::MIDNIGHT
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({self})")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
