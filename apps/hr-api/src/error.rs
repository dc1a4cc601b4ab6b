use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::config::env::AppEnv;

/// Uniform error envelope returned by every failing route.
///
/// `message` carries the underlying detail and is omitted outside
/// development mode.
#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Db { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// The client-facing `error` field. Validation failures surface their
    /// structured message; everything else collapses to a generic string.
    fn client_error(&self) -> String {
        match self {
            AppError::Validation { detail } => detail.clone(),
            AppError::Db { .. } | AppError::Config { .. } | AppError::Internal { .. } => {
                "Internal server error".to_string()
            }
        }
    }

    /// Detail echoed under `message`, only in development mode and only
    /// for server-side failures.
    fn client_message(&self) -> Option<String> {
        match self {
            AppError::Validation { .. } => None,
            AppError::Db { detail }
            | AppError::Config { detail }
            | AppError::Internal { detail } => {
                if AppEnv::from_env().is_development() {
                    Some(detail.clone())
                } else {
                    None
                }
            }
        }
    }

    pub fn validation(detail: String) -> Self {
        Self::Validation { detail }
    }

    pub fn db(detail: String) -> Self {
        Self::Db { detail }
    }

    pub fn config(detail: String) -> Self {
        Self::Config { detail }
    }

    pub fn internal(detail: String) -> Self {
        Self::Internal { detail }
    }

    /// Rejection for an assignment number outside the closed 40..49 set.
    pub fn invalid_assignment(number: &str) -> Self {
        Self::validation(format!(
            "Invalid assignment number '{number}'. Valid assignment numbers are 40 through 49."
        ))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::db(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error=%self, "request failed");
        }

        HttpResponse::build(status).json(ErrorEnvelope {
            success: false,
            error: self.client_error(),
            message: self.client_message(),
        })
    }
}
