//! Axum HTTP API server.
//!
//! Exposes the analysis pipeline (URL -> video ID -> comments -> sentiment)
//! as a JSON API. The browser frontend is an external collaborator that
//! renders the returned counts as a pie chart and the rows as a table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
