//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Condition, Line, TrainStatus};
use crate::planner::{RouteMatch, RouteOutcome};
use crate::predict::DiagnosticResult;

/// Query parameters for a route lookup.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Source station name
    #[serde(default)]
    pub source: String,

    /// Destination station name
    #[serde(default)]
    pub destination: String,

    /// Time in HH:MM format (defaults to now); empty means unset
    pub time: Option<String>,
}

/// Response for a route lookup.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Whether a train was found
    pub found: bool,

    /// User-facing message when no train was found
    pub message: Option<String>,

    /// The matched route
    pub route: Option<RouteResult>,
}

impl From<&RouteOutcome> for RouteResponse {
    fn from(outcome: &RouteOutcome) -> Self {
        Self {
            found: outcome.as_match().is_some(),
            message: outcome.message(),
            route: outcome.as_match().map(RouteResult::from_match),
        }
    }
}

/// A matched route.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub source: String,
    pub destination: String,

    /// Line the train departs on
    pub line: String,

    /// Line serving the destination
    pub destination_line: Option<String>,

    /// Whether a change of line is needed
    pub transfer: bool,

    /// Station to change at
    pub interchange: Option<String>,

    /// Time the search started from
    pub reference_time: String,

    pub train: TrainResult,

    /// Plain-text itinerary
    pub summary: String,
}

impl RouteResult {
    pub fn from_match(m: &RouteMatch) -> Self {
        let prediction = &m.train.prediction;
        Self {
            source: m.source.clone(),
            destination: m.destination.clone(),
            line: m.line.to_string(),
            destination_line: m.destination_line.as_ref().map(ToString::to_string),
            transfer: m.transfer,
            interchange: m.interchange.clone(),
            reference_time: m.reference_time.to_string(),
            train: TrainResult {
                time: m.train.time().to_string(),
                towards: m.train.scheduled.destination.clone(),
                crowd: m.train.scheduled.crowd.clone(),
                delay_mins: prediction.delay_mins,
                status: prediction.status,
                delay_description: m.delay_description(),
                conditions: prediction.condition.clone(),
                condition_description: m.condition_description(),
            },
            summary: m.to_string(),
        }
    }
}

/// The matched train.
#[derive(Debug, Serialize)]
pub struct TrainResult {
    /// Scheduled departure time
    pub time: String,

    /// Terminus the train is heading to
    pub towards: String,

    /// Crowd level label
    pub crowd: String,

    /// Predicted delay; negative means early
    pub delay_mins: i32,

    pub status: TrainStatus,

    /// Timing text, e.g. "Expected delay ~5 minutes"
    pub delay_description: String,

    pub conditions: Condition,

    pub condition_description: String,
}

/// Lines for populating station pickers.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<Line>,
}

/// Readiness report.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    /// One of "uninitialized", "loading", "ready", "unavailable"
    pub state: &'static str,

    /// Why the timetable is unavailable
    pub reason: Option<String>,

    pub lines: usize,
    pub trains: usize,

    /// Entries in the delay table (0 when running on fallback rules)
    pub delay_table_entries: usize,
}

/// Diagnostic predictions.
#[derive(Debug, Serialize)]
pub struct DiagnosticsResponse {
    /// The fixed test battery
    pub battery: Vec<DiagnosticResult>,

    /// Clear-day prediction for every line at the current hour
    pub current: Vec<DiagnosticResult>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
