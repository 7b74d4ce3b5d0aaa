//! Domain types for the metro planner.
//!
//! Timetable entries go through two stages: a [`ScheduledTrain`] read from
//! the timetable, and a [`Train`] carrying its [`Prediction`] once the
//! schedule has been enriched. Code that holds a `Train` never sees an
//! unpredicted delay.

mod condition;
mod line;
mod time;
mod train;

pub use condition::{CLEAR_WEATHER, Condition, NO_EVENT, NO_HOLIDAY};
pub use line::{Line, LineName};
pub use time::{ClockTime, TimeError};
pub use train::{Prediction, ScheduledTrain, Train, TrainStatus, describe_delay};
