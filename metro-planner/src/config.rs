//! Application configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::schedule::DataSource;

/// Default timetable location.
const DEFAULT_TIMETABLE: &str = "data/data.json";

/// Default delay table location.
const DEFAULT_PREDICTIONS: &str = "data/metro_predictions.json";

/// Default directory for front-end files.
const DEFAULT_STATIC_DIR: &str = "static";

/// Error returned when an environment value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a valid seed: {value}")]
    InvalidSeed { var: &'static str, value: String },
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where to load the timetable from.
    pub timetable: DataSource,

    /// Where to load the delay table from; `None` runs on fallback rules only.
    pub predictions: Option<DataSource>,

    /// Address to listen on.
    pub addr: SocketAddr,

    /// Directory served under `/static`.
    pub static_dir: PathBuf,

    /// Fixed seed for condition sampling. Random when unset.
    pub seed: Option<u64>,
}

impl AppConfig {
    /// Read configuration from `METRO_*` environment variables.
    ///
    /// | Variable            | Default                        |
    /// |---------------------|--------------------------------|
    /// | `METRO_TIMETABLE`   | `data/data.json`               |
    /// | `METRO_PREDICTIONS` | `data/metro_predictions.json`  |
    /// | `METRO_ADDR`        | `127.0.0.1:3000`               |
    /// | `METRO_STATIC_DIR`  | `static`                       |
    /// | `METRO_SEED`        | unset                          |
    ///
    /// Setting `METRO_PREDICTIONS` to an empty string disables the table.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(timetable) = lookup("METRO_TIMETABLE") {
            config.timetable = DataSource::parse(&timetable);
        }

        if let Some(predictions) = lookup("METRO_PREDICTIONS") {
            config.predictions = if predictions.trim().is_empty() {
                None
            } else {
                Some(DataSource::parse(&predictions))
            };
        }

        if let Some(addr) = lookup("METRO_ADDR") {
            config.addr = addr.parse().map_err(|_| ConfigError::InvalidAddr {
                var: "METRO_ADDR",
                value: addr.clone(),
            })?;
        }

        if let Some(dir) = lookup("METRO_STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        if let Some(seed) = lookup("METRO_SEED") {
            config.seed = Some(seed.parse().map_err(|_| ConfigError::InvalidSeed {
                var: "METRO_SEED",
                value: seed.clone(),
            })?);
        }

        Ok(config)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            timetable: DataSource::parse(DEFAULT_TIMETABLE),
            predictions: Some(DataSource::parse(DEFAULT_PREDICTIONS)),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed: None,
        }
    }
}
