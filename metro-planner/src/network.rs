//! The immutable, query-ready view of the metro.

use crate::domain::{ClockTime, Line};
use crate::enrich::{EnrichedSchedule, enrich};
use crate::planner::{RouteFinder, RouteOutcome, RouteQuery};
use crate::predict::{ConditionSampler, DelayPredictor, DiagnosticResult, run_diagnostics};
use crate::schedule::Schedule;

/// An enriched schedule together with the predictor that enriched it.
///
/// Built once per load and shared read-only between queries.
#[derive(Debug, Clone)]
pub struct Network {
    schedule: EnrichedSchedule,
    predictor: DelayPredictor,
}

impl Network {
    /// Enrich `schedule` and wrap the result for querying.
    pub fn build(
        schedule: Schedule,
        predictor: DelayPredictor,
        sampler: &mut dyn ConditionSampler,
    ) -> Self {
        let schedule = enrich(schedule, &predictor, sampler);
        Self {
            schedule,
            predictor,
        }
    }

    /// Next train between two stations; `now` is used when the query has no time.
    pub fn find_route(&self, query: &RouteQuery, now: ClockTime) -> RouteOutcome {
        RouteFinder::new(&self.schedule).find_route(query, now)
    }

    pub fn lines(&self) -> &[Line] {
        self.schedule.lines()
    }

    pub fn schedule(&self) -> &EnrichedSchedule {
        &self.schedule
    }

    pub fn predictor(&self) -> &DelayPredictor {
        &self.predictor
    }

    /// Run the fixed diagnostic battery through this network's predictor.
    pub fn diagnostics(&self) -> Vec<DiagnosticResult> {
        run_diagnostics(&self.predictor)
    }
}
