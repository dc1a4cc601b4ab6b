use sea_orm::DatabaseConnection;

use crate::error::AppError;
use crate::infra::db::connect_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    db_url: Option<String>,
    existing_db: Option<DatabaseConnection>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            db_url: None,
            existing_db: None,
        }
    }

    pub fn with_db_url(mut self, url: impl Into<String>) -> Self {
        self.db_url = Some(url.into());
        self
    }

    /// Use an already-established connection (mock connections in tests).
    pub fn with_existing_db(mut self, conn: DatabaseConnection) -> Self {
        self.existing_db = Some(conn);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let conn = match (self.existing_db, self.db_url) {
            (Some(conn), _) => conn,
            (None, Some(url)) => connect_db(&url).await?,
            (None, None) => {
                return Err(AppError::config(
                    "StateBuilder requires a database url or an existing connection".to_string(),
                ))
            }
        };
        Ok(AppState::new(conn))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
