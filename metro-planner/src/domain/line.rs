//! Line identifiers and station sequences.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name of a transit line (e.g. "Purple").
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineName(String);

impl LineName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineName({})", self.0)
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A named line with its stations in physical order.
///
/// Station names are unique within one line, but the same name may appear
/// on other lines where they interchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub name: LineName,
    pub stations: Vec<String>,
}

impl Line {
    pub fn new(name: LineName, stations: Vec<String>) -> Self {
        Self { name, stations }
    }

    /// Check whether this line calls at `station`.
    pub fn serves(&self, station: &str) -> bool {
        self.stations.iter().any(|s| s == station)
    }

    /// First station on this line that is also served by `other`.
    pub fn interchange_with(&self, other: &Line) -> Option<&str> {
        self.stations
            .iter()
            .find(|s| other.serves(s))
            .map(String::as_str)
    }
}
