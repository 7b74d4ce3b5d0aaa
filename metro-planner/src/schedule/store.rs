//! Static line topology and per-line timetables.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::{Line, LineName, ScheduledTrain};

/// Line entry in the timetable document.
#[derive(Debug, Deserialize)]
struct LineDto {
    stations: Vec<String>,
}

/// Top-level timetable document.
///
/// Kept as JSON maps so that line order follows the document.
#[derive(Debug, Deserialize)]
struct TimetableDocument {
    lines: Map<String, Value>,
    #[serde(default)]
    trains: Map<String, Value>,
}

/// Lines and their scheduled departures, as loaded.
///
/// Lines keep document order; station lookups that match several lines
/// pick the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule {
    lines: Vec<Line>,
    timetables: Vec<(LineName, Vec<ScheduledTrain>)>,
}

impl Schedule {
    pub fn new(lines: Vec<Line>, timetables: Vec<(LineName, Vec<ScheduledTrain>)>) -> Self {
        Self { lines, timetables }
    }

    /// Parse a timetable document.
    ///
    /// ```
    /// use metro_planner::schedule::Schedule;
    ///
    /// let json = r#"{
    ///     "lines": {"Purple": {"stations": ["Whitefield", "Majestic"]}},
    ///     "trains": {"Purple": [{"time": "08:00", "destination": "Majestic", "crowd": "Low"}]}
    /// }"#;
    /// let schedule = Schedule::from_json_str(json).unwrap();
    /// assert_eq!(schedule.lines().len(), 1);
    /// assert_eq!(schedule.train_count(), 1);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let doc: TimetableDocument = serde_json::from_str(json)?;

        let lines = doc
            .lines
            .into_iter()
            .map(|(name, value)| {
                let dto: LineDto = serde_json::from_value(value)?;
                Ok(Line::new(LineName::new(name), dto.stations))
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        let timetables = doc
            .trains
            .into_iter()
            .map(|(name, value)| {
                let trains: Vec<ScheduledTrain> = serde_json::from_value(value)?;
                Ok((LineName::new(name), trains))
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        Ok(Self { lines, timetables })
    }

    /// All lines in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Per-line timetables in document order.
    pub fn timetables(&self) -> &[(LineName, Vec<ScheduledTrain>)] {
        &self.timetables
    }

    pub fn into_parts(self) -> (Vec<Line>, Vec<(LineName, Vec<ScheduledTrain>)>) {
        (self.lines, self.timetables)
    }

    /// Total number of scheduled departures across all lines.
    pub fn train_count(&self) -> usize {
        self.timetables.iter().map(|(_, trains)| trains.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ClockTime;

    const DOC: &str = r#"{
        "lines": {
            "Purple": {"stations": ["Whitefield", "Majestic", "Challaghatta"]},
            "Green": {"stations": ["Nagasandra", "Majestic", "Silk Institute"]}
        },
        "trains": {
            "Purple": [
                {"time": "08:00", "destination": "Challaghatta", "crowd": "High"},
                {"time": "08:15", "destination": "Whitefield", "crowd": "Medium"}
            ],
            "Green": [
                {"time": "09:00", "destination": "Silk Institute", "crowd": "Low", "platform": 2}
            ]
        }
    }"#;

    #[test]
    fn parse_preserves_line_order() {
        let schedule = Schedule::from_json_str(DOC).unwrap();
        let names: Vec<&str> = schedule.lines().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Purple", "Green"]);
        assert_eq!(schedule.lines()[1].stations[1], "Majestic");
    }

    #[test]
    fn parse_trains() {
        let schedule = Schedule::from_json_str(DOC).unwrap();
        assert_eq!(schedule.train_count(), 3);

        let (line, trains) = &schedule.timetables()[0];
        assert_eq!(line.as_str(), "Purple");
        assert_eq!(trains[1].time, ClockTime::new(8, 15).unwrap());
        assert_eq!(trains[1].crowd, "Medium");
    }

    #[test]
    fn missing_trains_section_is_empty() {
        let schedule =
            Schedule::from_json_str(r#"{"lines": {"Purple": {"stations": ["A", "B"]}}}"#).unwrap();
        assert_eq!(schedule.train_count(), 0);
    }

    #[test]
    fn reject_bad_documents() {
        assert!(Schedule::from_json_str("{}").is_err());
        assert!(Schedule::from_json_str(r#"{"lines": {"Purple": {}}}"#).is_err());
        let bad_time = r#"{
            "lines": {"Purple": {"stations": ["A"]}},
            "trains": {"Purple": [{"time": "8am", "destination": "A", "crowd": "Low"}]}
        }"#;
        assert!(Schedule::from_json_str(bad_time).is_err());
    }
}
