//! Next-train search between two stations.
//!
//! Each station is resolved to the first line that serves it. The search
//! then scans the source line's departures in timetable order for the first
//! train at or after the reference time. A line change is detected and its
//! interchange named, but no multi-leg route is computed.

use std::fmt;

use tracing::debug;

use crate::domain::{ClockTime, Line, LineName, Train};
use crate::enrich::EnrichedSchedule;

/// Message shown when the two stations are missing or identical.
pub const INVALID_SELECTION_MESSAGE: &str = "Please select two different stations.";

/// Message shown when no departure is left after the reference time.
pub const NO_TRAINS_MESSAGE: &str = "No trains after this time.";

/// Trait for providing lines and enriched departures.
///
/// This abstraction allows the route finder to be tested with mock data.
pub trait Timetable {
    /// All lines, in the order station lookups should try them.
    fn lines(&self) -> &[Line];

    /// Departures on `line`, assumed ascending by scheduled time.
    fn departures(&self, line: &LineName) -> &[Train];

    /// First line serving `station`.
    ///
    /// A station on several lines resolves to whichever comes first.
    fn line_of(&self, station: &str) -> Option<&Line> {
        self.lines().iter().find(|line| line.serves(station))
    }
}

impl Timetable for EnrichedSchedule {
    fn lines(&self) -> &[Line] {
        EnrichedSchedule::lines(self)
    }

    fn departures(&self, line: &LineName) -> &[Train] {
        EnrichedSchedule::departures(self, line)
    }
}

/// A request for the next train between two stations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub source: String,
    pub destination: String,
    /// Departures before this time are skipped; defaults to now.
    pub reference_time: Option<ClockTime>,
}

impl RouteQuery {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            reference_time: None,
        }
    }

    pub fn at(mut self, time: ClockTime) -> Self {
        self.reference_time = Some(time);
        self
    }

    /// Both stations are set and differ.
    fn is_valid_selection(&self) -> bool {
        let source = self.source.trim();
        let destination = self.destination.trim();
        !source.is_empty() && !destination.is_empty() && source != destination
    }
}

/// A matched next train with its route context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub source: String,
    pub destination: String,
    /// Line the train departs on.
    pub line: LineName,
    /// Line serving the destination, if any line does.
    pub destination_line: Option<LineName>,
    /// The destination is on a different line than the source.
    pub transfer: bool,
    /// Where to change lines when `transfer` is set.
    pub interchange: Option<String>,
    pub reference_time: ClockTime,
    pub train: Train,
}

impl RouteMatch {
    /// Timing text for the train's predicted delay.
    pub fn delay_description(&self) -> String {
        self.train.prediction.describe_delay()
    }

    /// Conditions the prediction was made under.
    pub fn condition_description(&self) -> String {
        self.train.prediction.condition.describe()
    }
}

impl fmt::Display for RouteMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Route: {} -> {}", self.source, self.destination)?;
        write!(f, "Line: {} Line", self.line)?;
        if self.transfer {
            match (&self.interchange, &self.destination_line) {
                // Already standing at the interchange
                (Some(station), Some(to)) if *station == self.source => {
                    write!(f, " (board the {to} Line here)")?
                }
                (Some(station), _) => write!(f, " (change at {station})")?,
                (None, _) => write!(f, " (change lines)")?,
            }
        }
        writeln!(f)?;
        writeln!(f, "Next train: {}", self.train.time())?;
        writeln!(f, "Status: {}", self.train.status())?;
        writeln!(f, "Timing: {}", self.delay_description())?;
        writeln!(f, "Crowd level: {}", self.train.scheduled.crowd)?;
        writeln!(f, "Towards: {}", self.train.scheduled.destination)?;
        write!(f, "Conditions: {}", self.condition_description())
    }
}

/// Result of a route search.
///
/// Every variant other than `Found` carries a user-facing message; none of
/// them are errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Found(Box<RouteMatch>),
    /// Stations missing or identical.
    InvalidSelection,
    /// The source station is not on any line.
    UnknownStation { station: String },
    /// Nothing departs the source line at or after the reference time.
    NoTrainsAfter {
        line: LineName,
        reference_time: ClockTime,
    },
}

impl RouteOutcome {
    /// User-facing text for outcomes without a match.
    pub fn message(&self) -> Option<String> {
        match self {
            RouteOutcome::Found(_) => None,
            RouteOutcome::InvalidSelection => Some(INVALID_SELECTION_MESSAGE.to_string()),
            RouteOutcome::UnknownStation { station } => {
                Some(format!("Station {station} is not on any line."))
            }
            RouteOutcome::NoTrainsAfter { .. } => Some(NO_TRAINS_MESSAGE.to_string()),
        }
    }

    pub fn as_match(&self) -> Option<&RouteMatch> {
        match self {
            RouteOutcome::Found(m) => Some(&**m),
            _ => None,
        }
    }
}

/// Finds the next train between two stations.
pub struct RouteFinder<'a, T: Timetable> {
    timetable: &'a T,
}

impl<'a, T: Timetable> RouteFinder<'a, T> {
    pub fn new(timetable: &'a T) -> Self {
        Self { timetable }
    }

    /// Search using the query time, or `now` when the query has none.
    pub fn find_route(&self, query: &RouteQuery, now: ClockTime) -> RouteOutcome {
        if !query.is_valid_selection() {
            return RouteOutcome::InvalidSelection;
        }
        let source = query.source.trim();
        let destination = query.destination.trim();

        let Some(source_line) = self.timetable.line_of(source) else {
            return RouteOutcome::UnknownStation {
                station: source.to_string(),
            };
        };
        let destination_line = self.timetable.line_of(destination);

        let transfer = destination_line.is_some_and(|d| d.name != source_line.name);
        let interchange = destination_line
            .filter(|_| transfer)
            .and_then(|d| source_line.interchange_with(d))
            .map(str::to_string);

        let reference_time = query.reference_time.unwrap_or(now);
        let reference = reference_time.minutes_since_midnight();

        let departures = self.timetable.departures(&source_line.name);
        let Some(train) = departures
            .iter()
            .find(|t| t.time().minutes_since_midnight() >= reference)
        else {
            debug!(line = %source_line.name, %reference_time, "no trains after reference time");
            return RouteOutcome::NoTrainsAfter {
                line: source_line.name.clone(),
                reference_time,
            };
        };

        debug!(
            line = %source_line.name,
            time = %train.time(),
            transfer,
            "found next train"
        );

        RouteOutcome::Found(Box::new(RouteMatch {
            source: source.to_string(),
            destination: destination.to_string(),
            line: source_line.name.clone(),
            destination_line: destination_line.map(|d| d.name.clone()),
            transfer,
            interchange,
            reference_time,
            train: train.clone(),
        }))
    }
}
