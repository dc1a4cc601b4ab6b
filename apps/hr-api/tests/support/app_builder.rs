use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use hr_api::middleware::request_trace::RequestTrace;
use hr_api::middleware::structured_logger::StructuredLogger;
use hr_api::routes;
use hr_api::state::app_state::AppState;

/// Build a test service with the production route set and middleware.
///
/// `main.rs` additionally wraps CORS; tests exercise the routes directly
/// without it so assertions stay about endpoint behavior.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    let data = web::Data::new(state);

    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data)
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found)),
    )
    .await
}
