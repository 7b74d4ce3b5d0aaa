//! Load pipeline and readiness tracking.
//!
//! The timetable and delay table are fetched concurrently, the schedule is
//! enriched, and only then is the resulting [`Network`] published. Queries
//! made before that point get [`ServiceError::NotReady`].

use std::sync::Arc;

use futures::future;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::domain::{ClockTime, Line};
use crate::network::Network;
use crate::planner::{RouteOutcome, RouteQuery};
use crate::predict::{ConditionSampler, DelayPredictor};
use crate::schedule::{DataSource, LoadError};

/// Errors from querying or loading the service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Loading has not finished yet
    #[error("timetable is not loaded yet")]
    NotReady,

    /// The timetable failed to load and no queries can be answered
    #[error("timetable unavailable: {0}")]
    Unavailable(String),

    /// A load was already started on this service
    #[error("loading has already started")]
    AlreadyStarted,

    /// The timetable document could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Lifecycle of the shared network.
#[derive(Debug, Clone, Default)]
pub enum Readiness {
    #[default]
    Uninitialized,
    Loading,
    Ready(Arc<Network>),
    /// Timetable load failed; carries the reason.
    Unavailable(String),
}

impl Readiness {
    /// Short state name for status reporting.
    pub fn label(&self) -> &'static str {
        match self {
            Readiness::Uninitialized => "uninitialized",
            Readiness::Loading => "loading",
            Readiness::Ready(_) => "ready",
            Readiness::Unavailable(_) => "unavailable",
        }
    }
}

/// Thread-safe handle to the metro network.
///
/// Clones share the same state.
#[derive(Clone, Default)]
pub struct MetroService {
    state: Arc<RwLock<Readiness>>,
}

impl MetroService {
    /// A service with nothing loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// A service that is already ready with `network`.
    pub fn ready(network: Network) -> Self {
        Self {
            state: Arc::new(RwLock::new(Readiness::Ready(Arc::new(network)))),
        }
    }

    /// Current lifecycle state.
    pub async fn readiness(&self) -> Readiness {
        self.state.read().await.clone()
    }

    /// Load both documents, enrich, and publish the network.
    ///
    /// A delay table that fails to load is logged and skipped; enrichment
    /// then relies on the fallback rules. A timetable that fails to load
    /// leaves the service `Unavailable`.
    pub async fn load<S>(
        &self,
        timetable: &DataSource,
        predictions: Option<&DataSource>,
        mut sampler: S,
    ) -> Result<(), ServiceError>
    where
        S: ConditionSampler,
    {
        {
            let mut guard = self.state.write().await;
            if !matches!(*guard, Readiness::Uninitialized) {
                return Err(ServiceError::AlreadyStarted);
            }
            *guard = Readiness::Loading;
        }
        info!(%timetable, predictions = ?predictions.map(ToString::to_string), "loading metro data");

        let client = reqwest::Client::new();
        let table_load = async {
            match predictions {
                Some(source) => Some(source.load_delay_table(&client).await),
                None => None,
            }
        };
        let (schedule, table) = future::join(timetable.load_schedule(&client), table_load).await;

        let table = match table {
            Some(Ok(table)) => {
                info!(entries = table.len(), "delay table loaded");
                Some(table)
            }
            Some(Err(e)) => {
                warn!(error = %e, "delay table unavailable, using fallback rules");
                None
            }
            None => {
                info!("no delay table configured, using fallback rules");
                None
            }
        };

        let schedule = match schedule {
            Ok(schedule) => schedule,
            Err(e) => {
                error!(error = %e, "failed to load timetable");
                *self.state.write().await = Readiness::Unavailable(e.to_string());
                return Err(e.into());
            }
        };
        info!(
            lines = schedule.lines().len(),
            trains = schedule.train_count(),
            "timetable loaded"
        );

        let network = Network::build(schedule, DelayPredictor::new(table), &mut sampler);
        self.publish(network).await;
        Ok(())
    }

    /// Make `network` the one answering queries.
    pub async fn publish(&self, network: Network) {
        *self.state.write().await = Readiness::Ready(Arc::new(network));
        info!("metro network ready");
    }

    /// The published network, or why there is none.
    pub async fn network(&self) -> Result<Arc<Network>, ServiceError> {
        match &*self.state.read().await {
            Readiness::Ready(network) => Ok(Arc::clone(network)),
            Readiness::Uninitialized | Readiness::Loading => Err(ServiceError::NotReady),
            Readiness::Unavailable(reason) => Err(ServiceError::Unavailable(reason.clone())),
        }
    }

    /// Next train between two stations.
    pub async fn find_route(
        &self,
        query: &RouteQuery,
        now: ClockTime,
    ) -> Result<RouteOutcome, ServiceError> {
        Ok(self.network().await?.find_route(query, now))
    }

    /// Lines with their stations, for populating selection lists.
    pub async fn lines(&self) -> Result<Vec<Line>, ServiceError> {
        Ok(self.network().await?.lines().to_vec())
    }
}
