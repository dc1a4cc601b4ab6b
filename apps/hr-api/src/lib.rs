#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod error;
pub mod gateway;
pub mod health;
pub mod infra;
pub mod middleware;
pub mod queries;
pub mod routes;
pub mod state;

// Re-exports for public API
pub use config::db::{db_url, sanitize_db_url};
pub use config::env::AppEnv;
pub use error::AppError;
pub use infra::db::connect_db;
pub use infra::state::{build_state, StateBuilder};
pub use middleware::cors::cors_middleware;
pub use middleware::request_trace::RequestTrace;
pub use middleware::structured_logger::StructuredLogger;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::test_logging::init();
}
