//! Timetable loading.
//!
//! The timetable document lists lines with their ordered stations and the
//! scheduled departures on each line. Documents are read from a local
//! file or fetched over HTTP.

mod error;
mod source;
mod store;

pub use error::LoadError;
pub use source::DataSource;
pub use store::Schedule;
