//! Time-of-day handling for timetables.
//!
//! Timetables and queries give times as "HH:MM" strings with no date
//! attached. Comparisons are done in minutes since midnight.

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
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

/// A time of day with minute precision.
///
/// Ordering follows minutes since midnight, so `23:59` is the latest
/// representable time.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::ClockTime;
///
/// let time = ClockTime::parse_hhmm("08:15").unwrap();
/// assert_eq!(time.minutes_since_midnight(), 495);
/// assert_eq!(time.to_string(), "08:15");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u16,
}

impl ClockTime {
    /// Create a time from hour and minute components.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::domain::ClockTime;
    ///
    /// assert!(ClockTime::parse_hhmm("00:00").is_ok());
    /// assert!(ClockTime::parse_hhmm("23:59").is_ok());
    ///
    /// assert!(ClockTime::parse_hhmm("0815").is_err());
    /// assert!(ClockTime::parse_hhmm("8:15").is_err());
    /// assert!(ClockTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();
        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::new(hour, minute)
    }

    /// Convert from a chrono time, dropping seconds.
    pub fn from_naive_time(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }

    /// The current local wall-clock time.
    pub fn now_local() -> Self {
        Self::from_naive_time(Local::now().time())
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        u32::from(self.minutes / 60)
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        u32::from(self.minutes % 60)
    }

    /// Minutes elapsed since midnight (0-1439).
    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.minutes)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = TimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_hhmm(&value)
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl fmt::Debug for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClockTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = ClockTime::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);
        assert_eq!(t.minutes_since_midnight(), 0);

        let t = ClockTime::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
        assert_eq!(t.minutes_since_midnight(), 1439);

        let t = ClockTime::parse_hhmm("08:10").unwrap();
        assert_eq!(t.minutes_since_midnight(), 490);
    }

    #[test]
    fn reject_invalid_format() {
        assert!(ClockTime::parse_hhmm("").is_err());
        assert!(ClockTime::parse_hhmm("8:00").is_err());
        assert!(ClockTime::parse_hhmm("08-00").is_err());
        assert!(ClockTime::parse_hhmm("08:0a").is_err());
        assert!(ClockTime::parse_hhmm("08:000").is_err());
    }

    #[test]
    fn reject_out_of_range() {
        assert_eq!(
            ClockTime::parse_hhmm("24:00").unwrap_err().to_string(),
            "invalid time: hour must be 0-23"
        );
        assert_eq!(
            ClockTime::parse_hhmm("12:60").unwrap_err().to_string(),
            "invalid time: minute must be 0-59"
        );
    }

    #[test]
    fn ordering_follows_minutes() {
        let early = ClockTime::parse_hhmm("08:00").unwrap();
        let late = ClockTime::parse_hhmm("08:15").unwrap();
        assert!(early < late);
    }

    #[test]
    fn from_naive_time_drops_seconds() {
        let naive = NaiveTime::from_hms_opt(17, 42, 59).unwrap();
        let t = ClockTime::from_naive_time(naive);
        assert_eq!(t.to_string(), "17:42");
    }

    #[test]
    fn serde_uses_hhmm_string() {
        let t: ClockTime = serde_json::from_str("\"09:05\"").unwrap();
        assert_eq!(t, ClockTime::new(9, 5).unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"09:05\"");
        assert!(serde_json::from_str::<ClockTime>("\"9:05\"").is_err());
    }

    #[test]
    fn debug() {
        let t = ClockTime::new(7, 3).unwrap();
        assert_eq!(format!("{:?}", t), "ClockTime(07:03)");
    }
}
