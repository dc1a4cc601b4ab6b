use actix_web::{web, HttpResponse};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::AppError;

#[derive(Serialize)]
struct HealthPayload {
    message: &'static str,
    status: &'static str,
    timestamp: String,
}

/// Liveness probe. Answers without touching the store, so it stays 200
/// even when the database is down.
async fn health() -> Result<HttpResponse, AppError> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|e| AppError::internal(format!("timestamp formatting failed: {e}")))?;

    Ok(HttpResponse::Ok().json(HealthPayload {
        message: "Welcome to HR API",
        status: "ok",
        timestamp,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health));
}
