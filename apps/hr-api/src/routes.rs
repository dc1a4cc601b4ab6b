use actix_web::{web, HttpResponse};

use crate::error::ErrorEnvelope;

pub mod hr;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(crate::health::configure_routes)
        .configure(hr::configure_routes);
}

/// Default service for unmatched paths: the same envelope shape as every
/// other error, with a 404 status.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorEnvelope {
        success: false,
        error: "Not found".to_string(),
        message: None,
    })
}
