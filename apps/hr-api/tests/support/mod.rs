#![allow(dead_code)]

// tests/support/mod.rs
use std::collections::BTreeMap;

use sea_orm::Value;

pub mod app_builder;
pub mod state_builder_ext;

pub use app_builder::create_test_app;

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}

/// One mock result row, keyed by column name.
pub type MockRow = BTreeMap<&'static str, Value>;

/// Row shape produced by the `COUNT(*) AS count` statements.
pub fn count_row(count: i64) -> MockRow {
    BTreeMap::from([("count", Value::from(count))])
}

/// A minimal regions row matching the HR schema.
pub fn region_row(id: i64, name: &str) -> MockRow {
    BTreeMap::from([
        ("region_id", Value::from(id)),
        ("region_name", Value::from(name.to_string())),
    ])
}

/// An empty result set, typed for `MockDatabase::append_query_results`.
pub fn no_rows() -> Vec<MockRow> {
    Vec::new()
}
