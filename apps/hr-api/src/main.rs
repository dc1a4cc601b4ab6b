use actix_web::{web, App, HttpServer};
use hr_api::config::db::{db_url, sanitize_db_url};
use hr_api::infra::state::build_state;
use hr_api::middleware::cors::cors_middleware;
use hr_api::middleware::request_trace::RequestTrace;
use hr_api::middleware::structured_logger::StructuredLogger;
use hr_api::routes;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: Set via docker-compose env_file or docker run --env-file
    // - Local dev: Source env files manually (e.g. set -a; . ./.env; set +a)
    let host = std::env::var("HR_API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("HR_API_PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .unwrap_or_else(|_| {
            eprintln!("❌ HR_API_PORT must be a valid port number");
            std::process::exit(1);
        });

    let url = match db_url() {
        Ok(url) => url,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("using database {}", sanitize_db_url(&url));

    println!("🚀 Starting HR API on http://{}:{}", host, port);

    let app_state = match build_state().with_db_url(url).build().await {
        Ok(state) => state,
        Err(e) => {
            eprintln!("❌ Failed to build application state: {e}");
            std::process::exit(1);
        }
    };

    println!("✅ Database connected");

    // Wrap AppState with web::Data before passing to HttpServer
    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
            .default_service(web::route().to(routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
