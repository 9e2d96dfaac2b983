use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i32, available: i32 },

    #[error("Database error")]
    Db(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Map constraint violations raised by the store to client errors.
    /// Unique violations become conflicts, check and foreign key
    /// violations become validation errors, anything else stays a 500.
    pub fn from_db(err: sqlx::Error, constraint_msg: &str) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(constraint_msg.to_string())
            }
            sqlx::Error::Database(ref db)
                if db.is_check_violation() || db.is_foreign_key_violation() =>
            {
                AppError::Validation(constraint_msg.to_string())
            }
            other => AppError::Db(other),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            AppError::Conflict(_) => (StatusCode::CONFLICT, self.to_string()),
            AppError::ProductNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::InsufficientStock { .. } => (StatusCode::CONFLICT, self.to_string()),
            AppError::Db(err) => {
                tracing::error!(error = %err, "database error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        let body = ErrorResponse::new(message);
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
