//! Server-specific error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use top10_seeder::store::StoreError;
use top10_seeder::SeedError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A refresh run failed; the previous table is still being served
    #[error("Refresh failed: {0}")]
    Refresh(#[from] SeedError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Store(ref e) => {
                tracing::error!("Store error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "A database error occurred".to_string())
            },
            AppError::Refresh(ref e) => {
                tracing::error!(error = %e, "Refresh failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            },
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
