//! Smoke-test battery for the delay predictor.

use serde::Serialize;
use tracing::info;

use crate::domain::{Condition, LineName};

use super::engine::DelayPredictor;

/// Tuples run by [`run_diagnostics`]: (line, hour, weather, holiday, event).
pub const DIAGNOSTIC_CASES: [(&str, u32, &str, &str, &str); 3] = [
    ("Purple", 8, "Rain", "No", "None"),
    ("Green", 18, "Clear", "Festival", "Stadium Match"),
    ("Purple", 12, "Storm", "No", "Maintenance"),
];

/// One resolved diagnostic case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticResult {
    pub line: LineName,
    pub hour: u32,
    pub condition: Condition,
    pub delay_mins: f64,
}

/// Run the fixed battery through the predictor and log each result.
pub fn run_diagnostics(predictor: &DelayPredictor) -> Vec<DiagnosticResult> {
    DIAGNOSTIC_CASES
        .iter()
        .map(|&(line, hour, weather, holiday, event)| {
            let line = LineName::new(line);
            let condition = Condition::new(weather, holiday, event);
            let delay_mins = predictor.resolve(&line, hour, &condition);
            info!(%line, hour, weather, delay_mins, "diagnostic prediction");
            DiagnosticResult {
                line,
                hour,
                condition,
                delay_mins,
            }
        })
        .collect()
}

/// Prediction for a line at an hour on a clear regular day.
pub fn predict_now(predictor: &DelayPredictor, line: &LineName, hour: u32) -> DiagnosticResult {
    let condition = Condition::clear();
    let delay_mins = predictor.resolve(line, hour, &condition);
    DiagnosticResult {
        line: line.clone(),
        hour,
        condition,
        delay_mins,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predict::{DelayKey, DelayTable};

    #[test]
    fn battery_without_table() {
        let results = run_diagnostics(&DelayPredictor::without_table());
        let delays: Vec<f64> = results.iter().map(|r| r.delay_mins).collect();
        // Rain; holiday + event; storm + event
        assert_eq!(delays, vec![5.0, 11.0, 20.0]);
        assert_eq!(results[1].line.as_str(), "Green");
        assert_eq!(results[1].hour, 18);
    }

    #[test]
    fn battery_with_table_hit() {
        let table: DelayTable = [(DelayKey::parse("Purple_8_Rain_No_None").unwrap(), 9.5)]
            .into_iter()
            .collect();
        let results = run_diagnostics(&DelayPredictor::new(Some(table)));
        assert_eq!(results[0].delay_mins, 9.5);
        assert_eq!(results[2].delay_mins, 20.0);
    }

    #[test]
    fn predict_now_uses_clear_day() {
        let result = predict_now(&DelayPredictor::without_table(), &LineName::new("Green"), 9);
        assert_eq!(result.condition, Condition::clear());
        assert_eq!(result.delay_mins, 0.0);
    }
}
