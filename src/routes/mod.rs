use axum::{
    Json, Router,
    http::{StatusCode, Uri},
};

use crate::response::ErrorResponse;
use crate::state::AppState;

pub mod couriers;
pub mod deliveries;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod users;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/users", users::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
        .nest("/deliveries", deliveries::router())
        .nest("/couriers", couriers::router())
}

/// Fallback for unmatched paths, keeping 404s in the error envelope.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<ErrorResponse>) {
    let body = ErrorResponse::new(format!("No route for {}", uri.path()));
    (StatusCode::NOT_FOUND, Json(body))
}
