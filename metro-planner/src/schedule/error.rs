//! Data loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading a timetable or delay table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Reading a local file failed
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("fetching {url} returned status {status}")]
    Status { url: String, status: u16 },

    /// Document is not valid JSON or has the wrong shape
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = LoadError::Status {
            url: "http://localhost/data.json".into(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "fetching http://localhost/data.json returned status 404"
        );

        let err = LoadError::Io {
            path: PathBuf::from("data.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read data.json: not found");
    }
}
