//! Where timetable and delay documents come from.

use std::fmt;
use std::path::PathBuf;

use tracing::debug;

use super::error::LoadError;
use super::store::Schedule;
use crate::predict::DelayTable;

/// A document location: a local file or an HTTP(S) URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Path(PathBuf),
    Url(String),
}

impl DataSource {
    /// Interpret a location string; `http://` and `https://` are URLs,
    /// anything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DataSource::Url(location.to_string())
        } else {
            DataSource::Path(PathBuf::from(location))
        }
    }

    /// Fetch the raw document text.
    pub async fn fetch_text(&self, client: &reqwest::Client) -> Result<String, LoadError> {
        debug!(source = %self, "fetching document");
        match self {
            DataSource::Path(path) => {
                tokio::fs::read_to_string(path)
                    .await
                    .map_err(|source| LoadError::Io {
                        path: path.clone(),
                        source,
                    })
            }
            DataSource::Url(url) => {
                let response = client.get(url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        url: url.clone(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.text().await?)
            }
        }
    }

    /// Fetch and parse a timetable document.
    pub async fn load_schedule(&self, client: &reqwest::Client) -> Result<Schedule, LoadError> {
        let text = self.fetch_text(client).await?;
        Ok(Schedule::from_json_str(&text)?)
    }

    /// Fetch and parse a delay table document.
    pub async fn load_delay_table(
        &self,
        client: &reqwest::Client,
    ) -> Result<DelayTable, LoadError> {
        let text = self.fetch_text(client).await?;
        Ok(DelayTable::from_json_str(&text)?)
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Path(path) => write!(f, "{}", path.display()),
            DataSource::Url(url) => f.write_str(url),
        }
    }
}
