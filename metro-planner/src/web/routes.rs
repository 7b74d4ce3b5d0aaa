//! HTTP route handlers.

use std::path::Path;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::services::ServeDir;
use tracing::warn;

use crate::domain::ClockTime;
use crate::planner::RouteQuery;
use crate::predict::predict_now;
use crate::service::{Readiness, ServiceError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
///
/// `static_dir` is served under `/static` for the front end.
pub fn create_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/status", get(status))
        .route("/api/lines", get(lines))
        .route("/api/route", get(find_route))
        .route("/api/diagnostics", get(diagnostics))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Report readiness and what was loaded.
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    let readiness = state.service.readiness().await;
    let mut response = StatusResponse {
        state: readiness.label(),
        reason: None,
        lines: 0,
        trains: 0,
        delay_table_entries: 0,
    };

    match &readiness {
        Readiness::Ready(network) => {
            response.lines = network.lines().len();
            response.trains = network.schedule().train_count();
            response.delay_table_entries = network.predictor().table_len();
        }
        Readiness::Unavailable(reason) => response.reason = Some(reason.clone()),
        Readiness::Uninitialized | Readiness::Loading => {}
    }

    Json(response)
}

/// Lines and stations for the station pickers.
async fn lines(State(state): State<AppState>) -> Result<Json<LinesResponse>, AppError> {
    let lines = state.service.lines().await?;
    Ok(Json(LinesResponse { lines }))
}

/// Find the next train between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let reference_time = req
        .time
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(ClockTime::parse_hhmm)
        .transpose()
        .map_err(|e| AppError::BadRequest {
            message: format!("Invalid time: {e}"),
        })?;

    let query = RouteQuery {
        source: req.source,
        destination: req.destination,
        reference_time,
    };

    let outcome = state
        .service
        .find_route(&query, ClockTime::now_local())
        .await?;
    Ok(Json(RouteResponse::from(&outcome)))
}

/// Run the diagnostic battery.
async fn diagnostics(
    State(state): State<AppState>,
) -> Result<Json<DiagnosticsResponse>, AppError> {
    let network = state.service.network().await?;
    let hour = ClockTime::now_local().hour();

    let current = network
        .lines()
        .iter()
        .map(|line| predict_now(network.predictor(), &line.name, hour))
        .collect();

    Ok(Json(DiagnosticsResponse {
        battery: network.diagnostics(),
        current,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Unavailable { message: String },
    Internal { message: String },
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotReady | ServiceError::Unavailable(_) => AppError::Unavailable {
                message: e.to_string(),
            },
            ServiceError::AlreadyStarted | ServiceError::Load(_) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Unavailable { message } => (StatusCode::SERVICE_UNAVAILABLE, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
