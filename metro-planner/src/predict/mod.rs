//! Delay prediction.
//!
//! A static [`DelayTable`] keyed by (line, hour, weather, holiday, event)
//! answers first; a small set of additive rules answers otherwise.
//! Conditions for each departure come from a [`ConditionSampler`].

mod diagnostics;
mod engine;
mod key;
mod sampler;
mod table;

pub use diagnostics::{DIAGNOSTIC_CASES, DiagnosticResult, predict_now, run_diagnostics};
pub use engine::{DelayPredictor, fallback_delay};
pub use key::{DelayKey, InvalidDelayKey};
pub use sampler::{CONDITION_POOL, ConditionSampler, CyclingSampler, FixedSampler, RandomSampler};
pub use table::DelayTable;
