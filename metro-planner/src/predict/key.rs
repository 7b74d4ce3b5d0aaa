//! Structured lookup key for the delay table.

use std::fmt;

use crate::domain::{Condition, LineName};

/// Separator used by the on-disk delay table keys.
const KEY_SEPARATOR: char = '_';

/// Error returned when a delay table key cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid delay key {key:?}: {reason}")]
pub struct InvalidDelayKey {
    key: String,
    reason: &'static str,
}

/// Composite key identifying one delay table entry.
///
/// Equality is by value over all five fields, so two keys built from the
/// same tuple always match regardless of what characters the labels hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DelayKey {
    pub line: LineName,
    pub hour: u32,
    pub weather: String,
    pub holiday: String,
    pub event: String,
}

impl DelayKey {
    pub fn new(line: LineName, hour: u32, condition: &Condition) -> Self {
        Self {
            line,
            hour,
            weather: condition.weather.clone(),
            holiday: condition.holiday.clone(),
            event: condition.event.clone(),
        }
    }

    /// Parse the `line_hour_weather_holiday_event` form used by table files.
    ///
    /// Fields are taken from the right, so a line name may itself contain
    /// `_`; the weather, holiday and event labels may not. The hour must be
    /// written without padding or sign, exactly as `8` or `18`.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::predict::DelayKey;
    ///
    /// let key = DelayKey::parse("Green_18_Clear_Festival_Stadium Match").unwrap();
    /// assert_eq!(key.line.as_str(), "Green");
    /// assert_eq!(key.hour, 18);
    /// assert_eq!(key.event, "Stadium Match");
    ///
    /// let key = DelayKey::parse("Blue_Line_8_Rain_No_None").unwrap();
    /// assert_eq!(key.line.as_str(), "Blue_Line");
    ///
    /// assert!(DelayKey::parse("Green_18_Clear").is_err());
    /// assert!(DelayKey::parse("Green_08_Clear_No_None").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, InvalidDelayKey> {
        let invalid = |reason| InvalidDelayKey {
            key: s.to_string(),
            reason,
        };

        let parts: Vec<&str> = s.rsplitn(5, KEY_SEPARATOR).collect();
        let [event, holiday, weather, hour_field, line] = parts.as_slice() else {
            return Err(invalid("expected 5 fields separated by '_'"));
        };

        if line.is_empty() {
            return Err(invalid("empty line name"));
        }
        let hour: u32 = hour_field
            .parse()
            .map_err(|_| invalid("hour is not a number"))?;
        // "08" and "+8" would otherwise collide with "8"
        if hour.to_string() != *hour_field {
            return Err(invalid("hour must be written without padding or sign"));
        }
        if hour > 23 {
            return Err(invalid("hour must be 0-23"));
        }

        Ok(Self {
            line: LineName::new(*line),
            hour,
            weather: (*weather).to_string(),
            holiday: (*holiday).to_string(),
            event: (*event).to_string(),
        })
    }
}

impl fmt::Display for DelayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.line,
            self.hour,
            self.weather,
            self.holiday,
            self.event,
            sep = KEY_SEPARATOR
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_key() {
        let key = DelayKey::parse("Purple_8_Rain_No_None").unwrap();
        assert_eq!(
            key,
            DelayKey::new(
                LineName::new("Purple"),
                8,
                &Condition::new("Rain", "No", "None")
            )
        );
    }

    #[test]
    fn reject_wrong_field_count() {
        assert!(DelayKey::parse("").is_err());
        assert!(DelayKey::parse("Purple_8_Rain_No").is_err());
        assert!(DelayKey::parse("Purple_8_Rain_No_None_Extra").is_err());
    }

    #[test]
    fn reject_bad_hour() {
        assert!(DelayKey::parse("Purple_eight_Rain_No_None").is_err());
        assert!(DelayKey::parse("Purple_24_Rain_No_None").is_err());
        assert!(DelayKey::parse("Purple_-1_Rain_No_None").is_err());
    }

    #[test]
    fn reject_non_canonical_hour() {
        assert!(DelayKey::parse("Purple_08_Rain_No_None").is_err());
        assert!(DelayKey::parse("Purple_+8_Rain_No_None").is_err());
        assert!(DelayKey::parse("Purple_00_Rain_No_None").is_err());
        assert_eq!(DelayKey::parse("Purple_0_Rain_No_None").unwrap().hour, 0);
    }

    #[test]
    fn line_name_may_contain_separator() {
        let key = DelayKey::parse("Blue_Line_8_Clear_No_None").unwrap();
        assert_eq!(key.line.as_str(), "Blue_Line");
        assert_eq!(key.hour, 8);
        assert_eq!(key.weather, "Clear");
        assert_eq!(key.event, "None");
        assert_eq!(key.to_string(), "Blue_Line_8_Clear_No_None");
    }

    #[test]
    fn reject_empty_line() {
        let err = DelayKey::parse("_8_Rain_No_None").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid delay key \"_8_Rain_No_None\": empty line name"
        );
    }

    #[test]
    fn display_matches_file_form() {
        let key = DelayKey::parse("Green_18_Clear_Festival_Stadium Match").unwrap();
        assert_eq!(key.to_string(), "Green_18_Clear_Festival_Stadium Match");
    }

    #[test]
    fn labels_that_would_collide_as_strings_stay_distinct() {
        let a = DelayKey::new(
            LineName::new("Purple"),
            1,
            &Condition::new("Clear", "No", "None"),
        );
        let b = DelayKey::new(
            LineName::new("Purple_1"),
            0,
            &Condition::new("Clear", "No", "None"),
        );
        assert_ne!(a, b);
    }
}
