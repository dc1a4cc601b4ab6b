//! Test-only extension trait for StateBuilder
//!
//! Lets tests hand the builder a SeaORM mock connection without polluting
//! production code.

use hr_api::infra::state::StateBuilder;
use sea_orm::{DatabaseBackend, MockDatabase};

pub trait StateBuilderTestExt {
    /// Use a pre-configured mock as the store.
    fn with_mock_db(self, mock: MockDatabase) -> Self;

    /// Use a mock with no results queued: any statement issued against it
    /// fails, which makes it double as an always-failing store.
    fn with_empty_mock_db(self) -> Self;
}

impl StateBuilderTestExt for StateBuilder {
    fn with_mock_db(self, mock: MockDatabase) -> Self {
        self.with_existing_db(mock.into_connection())
    }

    fn with_empty_mock_db(self) -> Self {
        self.with_mock_db(MockDatabase::new(DatabaseBackend::Postgres))
    }
}
