//! Attach predicted delays to every scheduled departure.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::domain::{Line, LineName, Prediction, Train, TrainStatus};
use crate::predict::{ConditionSampler, DelayPredictor};
use crate::schedule::Schedule;

/// A schedule whose every train carries a [`Prediction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedSchedule {
    lines: Vec<Line>,
    timetables: Vec<(LineName, Vec<Train>)>,
}

impl EnrichedSchedule {
    /// All lines in document order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Departures on `line` in timetable order; empty if the line has none.
    pub fn departures(&self, line: &LineName) -> &[Train] {
        self.timetables
            .iter()
            .find(|(name, _)| name == line)
            .map(|(_, trains)| trains.as_slice())
            .unwrap_or(&[])
    }

    /// Per-line timetables in document order.
    pub fn timetables(&self) -> &[(LineName, Vec<Train>)] {
        &self.timetables
    }

    pub fn train_count(&self) -> usize {
        self.timetables.iter().map(|(_, trains)| trains.len()).sum()
    }
}

/// Round to the nearest whole minute, halves toward positive infinity.
fn round_minutes(minutes: f64) -> i32 {
    (minutes + 0.5).floor() as i32
}

/// Predict delay, status and conditions for every train in `schedule`.
///
/// Each train gets its own condition from `sampler`. With a deterministic
/// sampler the result depends only on the schedule and the predictor.
pub fn enrich(
    schedule: Schedule,
    predictor: &DelayPredictor,
    sampler: &mut dyn ConditionSampler,
) -> EnrichedSchedule {
    let (lines, timetables) = schedule.into_parts();

    let timetables: Vec<(LineName, Vec<Train>)> = timetables
        .into_iter()
        .map(|(line, trains)| {
            let enriched = trains
                .into_iter()
                .map(|scheduled| {
                    let condition = sampler.sample();
                    let raw = predictor.resolve(&line, scheduled.time.hour(), &condition);
                    let prediction = Prediction::new(round_minutes(raw), condition);
                    debug!(
                        %line,
                        time = %scheduled.time,
                        delay = prediction.delay_mins,
                        status = %prediction.status,
                        "enriched train"
                    );
                    Train::new(scheduled, prediction)
                })
                .collect();
            (line, enriched)
        })
        .collect();

    let enriched = EnrichedSchedule { lines, timetables };

    let mut by_status: HashMap<TrainStatus, usize> = HashMap::new();
    for (_, trains) in enriched.timetables() {
        for train in trains {
            *by_status.entry(train.status()).or_default() += 1;
        }
    }
    info!(
        trains = enriched.train_count(),
        table = predictor.has_table(),
        ?by_status,
        "schedule enriched with delay predictions"
    );

    enriched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ClockTime, Condition, ScheduledTrain};
    use crate::predict::{CyclingSampler, DelayKey, DelayTable, FixedSampler, RandomSampler};

    fn train(time: &str) -> ScheduledTrain {
        ScheduledTrain {
            time: ClockTime::parse_hhmm(time).unwrap(),
            destination: "Challaghatta".to_string(),
            crowd: "Medium".to_string(),
        }
    }

    fn schedule() -> Schedule {
        let purple = LineName::new("Purple");
        let green = LineName::new("Green");
        Schedule::new(
            vec![
                Line::new(purple.clone(), vec!["Whitefield".into(), "Majestic".into()]),
                Line::new(green.clone(), vec!["Nagasandra".into(), "Majestic".into()]),
            ],
            vec![
                (purple, vec![train("08:00"), train("08:15"), train("12:30")]),
                (green, vec![train("18:05")]),
            ],
        )
    }

    fn table(entries: &[(&str, f64)]) -> DelayTable {
        entries
            .iter()
            .map(|(k, v)| (DelayKey::parse(k).unwrap(), *v))
            .collect()
    }

    #[test]
    fn rounding_half_up() {
        assert_eq!(round_minutes(2.4), 2);
        assert_eq!(round_minutes(2.5), 3);
        assert_eq!(round_minutes(-2.5), -2);
        assert_eq!(round_minutes(-2.6), -3);
        assert_eq!(round_minutes(0.0), 0);
    }

    #[test]
    fn every_train_is_enriched() {
        let mut sampler = FixedSampler(Condition::new("Rain", "No", "None"));
        let enriched = enrich(schedule(), &DelayPredictor::without_table(), &mut sampler);

        assert_eq!(enriched.train_count(), 4);
        for (_, trains) in enriched.timetables() {
            for t in trains {
                assert_eq!(t.delay_mins(), 5);
                assert_eq!(t.status(), TrainStatus::MinorDelay);
                assert_eq!(t.prediction.condition.weather, "Rain");
            }
        }
    }

    #[test]
    fn uses_train_hour_for_lookup() {
        let predictor = DelayPredictor::new(Some(table(&[
            ("Purple_8_Clear_No_None", 17.0),
            ("Purple_12_Clear_No_None", 2.4),
        ])));
        let mut sampler = FixedSampler(Condition::clear());
        let enriched = enrich(schedule(), &predictor, &mut sampler);

        let purple = enriched.departures(&LineName::new("Purple"));
        assert_eq!(purple[0].delay_mins(), 17);
        assert_eq!(purple[0].status(), TrainStatus::MajorDelay);
        assert_eq!(purple[1].delay_mins(), 17);
        assert_eq!(purple[2].delay_mins(), 2);

        let green = enriched.departures(&LineName::new("Green"));
        assert_eq!(green[0].delay_mins(), 0);
        assert_eq!(green[0].status(), TrainStatus::OnTime);
    }

    #[test]
    fn negative_table_value_is_early() {
        let predictor = DelayPredictor::new(Some(table(&[("Green_18_Clear_No_None", -3.0)])));
        let mut sampler = FixedSampler(Condition::clear());
        let enriched = enrich(schedule(), &predictor, &mut sampler);

        let green = enriched.departures(&LineName::new("Green"));
        assert_eq!(green[0].delay_mins(), -3);
        assert_eq!(green[0].status(), TrainStatus::Early);
    }

    #[test]
    fn each_train_samples_its_own_condition() {
        let mut sampler = CyclingSampler::new(vec![
            Condition::new("Storm", "No", "None"),
            Condition::clear(),
        ]);
        let enriched = enrich(schedule(), &DelayPredictor::without_table(), &mut sampler);

        let delays: Vec<i32> = enriched
            .timetables()
            .iter()
            .flat_map(|(_, trains)| trains.iter().map(Train::delay_mins))
            .collect();
        assert_eq!(delays, vec![12, 0, 12, 0]);
    }

    #[test]
    fn deterministic_sampler_gives_identical_runs() {
        let predictor = DelayPredictor::new(Some(table(&[("Purple_8_Rain_No_None", 9.0)])));
        let conditions = vec![
            Condition::new("Rain", "No", "None"),
            Condition::new("Clear", "Festival", "None"),
            Condition::new("Clear", "No", "Stadium Match"),
        ];

        let first = enrich(
            schedule(),
            &predictor,
            &mut CyclingSampler::new(conditions.clone()),
        );
        let second = enrich(schedule(), &predictor, &mut CyclingSampler::new(conditions));
        assert_eq!(first, second);
    }

    #[test]
    fn seeded_random_runs_match() {
        let predictor = DelayPredictor::without_table();
        let first = enrich(schedule(), &predictor, &mut RandomSampler::with_seed(3));
        let second = enrich(schedule(), &predictor, &mut RandomSampler::with_seed(3));
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_line_has_no_departures() {
        let enriched = enrich(
            schedule(),
            &DelayPredictor::without_table(),
            &mut FixedSampler(Condition::clear()),
        );
        assert!(enriched.departures(&LineName::new("Yellow")).is_empty());
    }
}
