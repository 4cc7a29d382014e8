//! Route handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use top10_seeder::store;

use crate::error::AppResult;
use crate::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to USA Top 10 Vacation Destinations API!";

pub async fn root() -> impl IntoResponse {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

/// Every destination, ordered by id
pub async fn list_destinations(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let destinations = store::list_destinations(&state.db).await?;
    Ok(Json(json!({ "destinations": destinations })))
}

/// Re-run the seeding pipeline against the served store
pub async fn refresh(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    state.refresh().await?;
    Ok(Json(json!({ "message": "Data refreshed successfully." })))
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match store::health_check(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "healthy", "database": "connected" })),
        ),
        Err(e) => {
            tracing::error!("Database health check failed: {:?}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unhealthy", "database": "disconnected" })),
            )
        },
    }
}
