//! Web layer for the metro planner.
//!
//! Provides JSON endpoints for route lookup, line listing, readiness and
//! diagnostics, and serves the front end's static files.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
