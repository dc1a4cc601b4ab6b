use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Application state containing shared resources.
///
/// The connection pool is established once at startup and injected into
/// every handler through `web::Data<AppState>`; handlers never open their
/// own connections.
#[derive(Debug, Clone)]
pub struct AppState {
    db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Create a new AppState owning the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Recover the connection, e.g. to inspect a mock transaction log.
    pub fn into_db(self) -> DatabaseConnection {
        Arc::try_unwrap(self.db).expect("into_db: connection still referenced")
    }
}
