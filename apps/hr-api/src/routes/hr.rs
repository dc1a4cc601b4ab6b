//! The HR route set: table passthroughs, the two count routes, and the
//! assignment dispatcher. Every handler is a short linear sequence —
//! validate, call the gateway, shape the envelope.

use actix_web::{web, HttpResponse};
use sea_orm::JsonValue;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::AppError;
use crate::gateway;
use crate::queries;
use crate::state::app_state::AppState;

#[derive(Serialize)]
struct RowsEnvelope {
    success: bool,
    data: Vec<JsonValue>,
    count: usize,
}

#[derive(Serialize)]
struct CountEnvelope {
    success: bool,
    count: i64,
}

#[derive(Serialize)]
struct TableCountsEnvelope {
    success: bool,
    data: Value,
}

#[derive(Serialize)]
struct AssignmentEnvelope {
    success: bool,
    assignment: String,
    data: Vec<JsonValue>,
    count: usize,
}

/// Shared shape for every table-passthrough route.
async fn list_table(state: &AppState, sql: &str) -> Result<HttpResponse, AppError> {
    let data = gateway::fetch_rows(state.db(), sql).await?;
    let count = data.len();
    Ok(HttpResponse::Ok().json(RowsEnvelope {
        success: true,
        data,
        count,
    }))
}

async fn regions(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_table(&state, queries::SELECT_REGIONS).await
}

async fn countries(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_table(&state, queries::SELECT_COUNTRIES).await
}

async fn locations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_table(&state, queries::SELECT_LOCATIONS).await
}

async fn departments(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_table(&state, queries::SELECT_DEPARTMENTS).await
}

async fn jobs(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_table(&state, queries::SELECT_JOBS).await
}

async fn employees(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_table(&state, queries::SELECT_EMPLOYEES).await
}

async fn job_history(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    list_table(&state, queries::SELECT_JOB_HISTORY).await
}

/// Scalar employee count. The path is a historical artifact of the
/// original service and is kept as-is.
async fn employee_count(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let count = gateway::fetch_count(state.db(), queries::EMPLOYEE_COUNT).await?;
    Ok(HttpResponse::Ok().json(CountEnvelope {
        success: true,
        count,
    }))
}

/// One COUNT(*) per HR table, issued sequentially. A failure on any table
/// aborts the whole request; no partial map is returned.
async fn table_counts(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let mut counts = Map::new();
    for table in queries::HR_TABLES {
        let count = gateway::fetch_count(state.db(), &queries::count_query(table)).await?;
        counts.insert(table.to_string(), Value::from(count));
    }
    Ok(HttpResponse::Ok().json(TableCountsEnvelope {
        success: true,
        data: Value::Object(counts),
    }))
}

/// Whitelist-check the assignment number, then run its fixed join query.
/// A miss rejects before any store access.
async fn assignment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let number = path.into_inner();
    let Some(sql) = queries::assignment_query(&number) else {
        return Err(AppError::invalid_assignment(&number));
    };

    let data = gateway::fetch_rows(state.db(), sql).await?;
    let count = data.len();
    Ok(HttpResponse::Ok().json(AssignmentEnvelope {
        success: true,
        assignment: number,
        data,
        count,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/regions", web::get().to(regions))
        .route("/countries", web::get().to(countries))
        // Legacy alias from an earlier revision of the service.
        .route("/country", web::get().to(countries))
        .route("/locations", web::get().to(locations))
        .route("/departments", web::get().to(departments))
        .route("/jobs", web::get().to(jobs))
        .route("/employees", web::get().to(employees))
        // Typo alias kept for callers of the original route.
        .route("/employeess", web::get().to(employees))
        .route("/job-history", web::get().to(job_history))
        .route("/abc", web::get().to(employee_count))
        .route("/table-counts", web::get().to(table_counts))
        .route("/assignment/{number}", web::get().to(assignment));
}
