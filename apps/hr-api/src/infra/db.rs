use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::error::AppError;

/// Establish the connection pool and verify the store is reachable.
///
/// Called once at process start; the pool lives until teardown. A failed
/// connection or ping surfaces immediately so startup can abort.
pub async fn connect_db(url: &str) -> Result<DatabaseConnection, AppError> {
    let mut opts = ConnectOptions::new(url.to_string());
    opts.max_connections(10)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .sqlx_logging(false);

    let conn = Database::connect(opts)
        .await
        .map_err(|e| AppError::db(format!("failed to connect to database: {e}")))?;

    conn.ping()
        .await
        .map_err(|e| AppError::db(format!("database ping failed: {e}")))?;

    info!("database connection established");
    Ok(conn)
}
