//! Delay resolution: table lookup with a rule-based fallback.

use crate::domain::{Condition, LineName};

use super::key::DelayKey;
use super::table::DelayTable;

/// Extra minutes when it is raining.
const RAIN_MINS: i32 = 5;
/// Extra minutes during a storm.
const STORM_MINS: i32 = 12;
/// Extra minutes when an event is on.
const EVENT_MINS: i32 = 8;
/// Extra minutes on a holiday.
const HOLIDAY_MINS: i32 = 3;

/// Resolves predicted delay for a departure.
///
/// Holds an optional [`DelayTable`]. Lookups hit the table first; when the
/// table is absent or has no entry for the key, [`fallback_delay`] is used.
/// Resolution never fails and has no side effects.
#[derive(Debug, Clone, Default)]
pub struct DelayPredictor {
    table: Option<DelayTable>,
}

impl DelayPredictor {
    pub fn new(table: Option<DelayTable>) -> Self {
        Self { table }
    }

    /// A predictor that only applies the fallback rules.
    pub fn without_table() -> Self {
        Self { table: None }
    }

    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    /// Number of table entries (0 when no table is loaded).
    pub fn table_len(&self) -> usize {
        self.table.as_ref().map_or(0, DelayTable::len)
    }

    /// Predicted delay in minutes for a line at an hour under a condition.
    ///
    /// Table values are returned unmodified, so the result may be fractional
    /// or negative. Fallback results are whole and never negative.
    pub fn resolve(&self, line: &LineName, hour: u32, condition: &Condition) -> f64 {
        let key = DelayKey::new(line.clone(), hour, condition);
        self.lookup(&key)
            .unwrap_or_else(|| f64::from(fallback_delay(condition)))
    }

    /// [`resolve`](Self::resolve) with the condition given as separate labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::predict::DelayPredictor;
    ///
    /// let predictor = DelayPredictor::without_table();
    /// let delay = predictor.resolve_parts("Purple", 12, "Storm", "No", "Stadium Match");
    /// assert_eq!(delay, 20.0);
    /// ```
    pub fn resolve_parts(
        &self,
        line: &str,
        hour: u32,
        weather: &str,
        holiday: &str,
        event: &str,
    ) -> f64 {
        self.resolve(
            &LineName::new(line),
            hour,
            &Condition::new(weather, holiday, event),
        )
    }

    fn lookup(&self, key: &DelayKey) -> Option<f64> {
        self.table.as_ref()?.get(key)
    }
}

/// Additive rule-based delay for when the table has no answer.
///
/// Each matching rule adds its minutes; the total is floored at zero.
pub fn fallback_delay(condition: &Condition) -> i32 {
    let mut delay = 0;
    match condition.weather.as_str() {
        "Rain" => delay += RAIN_MINS,
        "Storm" => delay += STORM_MINS,
        _ => {}
    }
    if condition.has_event() {
        delay += EVENT_MINS;
    }
    if condition.is_holiday() {
        delay += HOLIDAY_MINS;
    }
    delay.max(0)
}
