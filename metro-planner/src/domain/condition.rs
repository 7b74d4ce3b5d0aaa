//! Situational conditions that influence predicted delay.

use serde::{Deserialize, Serialize};

/// Holiday label meaning "not a holiday".
pub const NO_HOLIDAY: &str = "No";

/// Event label meaning "no special event".
pub const NO_EVENT: &str = "None";

/// Weather label for a clear day.
pub const CLEAR_WEATHER: &str = "Clear";

/// A snapshot of weather, holiday and event at a departure.
///
/// The labels are free-form; `"No"` and `"None"` are the sentinels for
/// "no holiday" and "no event".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub weather: String,
    pub holiday: String,
    pub event: String,
}

impl Condition {
    pub fn new(
        weather: impl Into<String>,
        holiday: impl Into<String>,
        event: impl Into<String>,
    ) -> Self {
        Self {
            weather: weather.into(),
            holiday: holiday.into(),
            event: event.into(),
        }
    }

    /// A clear regular day with nothing going on.
    pub fn clear() -> Self {
        Self::new(CLEAR_WEATHER, NO_HOLIDAY, NO_EVENT)
    }

    pub fn is_holiday(&self) -> bool {
        self.holiday != NO_HOLIDAY
    }

    pub fn has_event(&self) -> bool {
        self.event != NO_EVENT
    }

    /// Human-readable summary, e.g. "Rain weather, Regular day, No events".
    pub fn describe(&self) -> String {
        let day = if self.is_holiday() {
            self.holiday.as_str()
        } else {
            "Regular day"
        };
        let event = if self.has_event() {
            self.event.as_str()
        } else {
            "No events"
        };
        format!("{} weather, {}, {}", self.weather, day, event)
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::clear()
    }
}
