// apps/hr-api/src/middleware/cors.rs
use actix_cors::Cors;

/// Build CORS middleware. The API is a public read-only surface:
/// - any origin may call it
/// - only GET is exposed
pub fn cors_middleware() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .expose_headers(vec!["x-request-id"])
        .max_age(3600)
}
