//! Scheduled and enriched train departures.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ClockTime, Condition};

/// A departure as it appears in the timetable, before any prediction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScheduledTrain {
    pub time: ClockTime,
    pub destination: String,
    /// Crowd level label from the timetable (e.g. "Low", "High").
    pub crowd: String,
}

/// Punctuality category derived from predicted delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrainStatus {
    /// Predicted to arrive ahead of schedule.
    #[serde(rename = "Early")]
    Early,
    #[serde(rename = "On Time")]
    OnTime,
    #[serde(rename = "Minor Delay")]
    MinorDelay,
    #[serde(rename = "Delayed")]
    Delayed,
    #[serde(rename = "Major Delay")]
    MajorDelay,
}

impl TrainStatus {
    /// Classify a delay in whole minutes.
    ///
    /// # Examples
    ///
    /// ```
    /// use metro_planner::domain::TrainStatus;
    ///
    /// assert_eq!(TrainStatus::from_delay(0), TrainStatus::OnTime);
    /// assert_eq!(TrainStatus::from_delay(5), TrainStatus::MinorDelay);
    /// assert_eq!(TrainStatus::from_delay(6), TrainStatus::Delayed);
    /// assert_eq!(TrainStatus::from_delay(16), TrainStatus::MajorDelay);
    /// assert_eq!(TrainStatus::from_delay(-2), TrainStatus::Early);
    /// ```
    pub fn from_delay(delay_mins: i32) -> Self {
        match delay_mins {
            d if d < 0 => TrainStatus::Early,
            0 => TrainStatus::OnTime,
            1..=5 => TrainStatus::MinorDelay,
            6..=15 => TrainStatus::Delayed,
            _ => TrainStatus::MajorDelay,
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            TrainStatus::Early => "Early",
            TrainStatus::OnTime => "On Time",
            TrainStatus::MinorDelay => "Minor Delay",
            TrainStatus::Delayed => "Delayed",
            TrainStatus::MajorDelay => "Major Delay",
        }
    }
}

impl fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Predicted delay and the conditions it was computed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Prediction {
    /// Whole minutes; negative means early.
    pub delay_mins: i32,
    pub status: TrainStatus,
    pub condition: Condition,
}

impl Prediction {
    pub fn new(delay_mins: i32, condition: Condition) -> Self {
        Self {
            delay_mins,
            status: TrainStatus::from_delay(delay_mins),
            condition,
        }
    }

    /// User-facing timing text for the delay.
    pub fn describe_delay(&self) -> String {
        describe_delay(self.delay_mins)
    }
}

/// Format a delay in minutes as timing text.
///
/// # Examples
///
/// ```
/// use metro_planner::domain::describe_delay;
///
/// assert_eq!(describe_delay(0), "On schedule");
/// assert_eq!(describe_delay(8), "Expected delay ~8 minutes");
/// assert_eq!(describe_delay(-3), "Expected ~3 minutes early");
/// ```
pub fn describe_delay(delay_mins: i32) -> String {
    match delay_mins {
        0 => "On schedule".to_string(),
        d if d > 0 => format!("Expected delay ~{d} minutes"),
        d => format!("Expected ~{} minutes early", d.unsigned_abs()),
    }
}

/// A timetabled departure with its prediction attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Train {
    #[serde(flatten)]
    pub scheduled: ScheduledTrain,
    #[serde(flatten)]
    pub prediction: Prediction,
}

impl Train {
    pub fn new(scheduled: ScheduledTrain, prediction: Prediction) -> Self {
        Self {
            scheduled,
            prediction,
        }
    }

    pub fn time(&self) -> ClockTime {
        self.scheduled.time
    }

    pub fn delay_mins(&self) -> i32 {
        self.prediction.delay_mins
    }

    pub fn status(&self) -> TrainStatus {
        self.prediction.status
    }
}
