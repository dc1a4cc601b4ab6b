//! Data access gateway: the only module that issues statements against the
//! relational store.
//!
//! Functions are generic over `ConnectionTrait` so handlers run against the
//! live pool and tests against a mock connection. Each call is one round
//! trip; failures surface immediately as `AppError::Db` with no retry.

use sea_orm::{ConnectionTrait, DatabaseBackend, FromQueryResult, JsonValue, Statement};

use crate::error::AppError;

/// Execute a statement and return every row as a JSON object.
///
/// The API is a schemaless passthrough, so rows are materialized as
/// `JsonValue` maps keyed by column name rather than typed entities.
pub async fn fetch_rows<C>(conn: &C, sql: &str) -> Result<Vec<JsonValue>, AppError>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_string(DatabaseBackend::Postgres, sql);
    let rows = JsonValue::find_by_statement(stmt).all(conn).await?;
    Ok(rows)
}

/// Execute a statement expected to yield a single row with a `count`
/// column and return the scalar.
pub async fn fetch_count<C>(conn: &C, sql: &str) -> Result<i64, AppError>
where
    C: ConnectionTrait,
{
    let stmt = Statement::from_string(DatabaseBackend::Postgres, sql);
    let row = conn
        .query_one(stmt)
        .await?
        .ok_or_else(|| AppError::db("count query returned no rows".to_string()))?;
    let count: i64 = row.try_get("", "count")?;
    Ok(count)
}
