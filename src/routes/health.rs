use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

#[derive(Serialize, ToSchema)]
pub struct HealthData {
    pub status: String,
    pub database: String,
    pub uptime: f64,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service and store are up", body = HealthData),
        (status = 503, description = "Store unreachable", body = HealthData),
    ),
    tag = "Health"
)]
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthData>) {
    let uptime = state.started_at.elapsed().as_secs_f64();
    match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthData {
                status: "ok".to_string(),
                database: "connected".to_string(),
                uptime,
                timestamp: Utc::now(),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthData {
                    status: "error".to_string(),
                    database: "disconnected".to_string(),
                    uptime,
                    timestamp: Utc::now(),
                }),
            )
        }
    }
}
