use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::deliveries::{CreateDeliveryRequest, UpdateDeliveryRequest},
    error::{AppError, AppResult},
    models::Delivery,
    response::{ApiResponse, MessageResponse},
    routes::params::Pagination,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_delivery))
        .route("/", get(list_deliveries))
        .route("/{id}", get(get_delivery))
        .route("/{id}", put(update_delivery))
        .route("/{id}", delete(delete_delivery))
}

#[utoipa::path(
    post,
    path = "/api/deliveries",
    request_body = CreateDeliveryRequest,
    responses(
        (status = 201, description = "Delivery created", body = ApiResponse<Delivery>),
        (status = 400, description = "Invalid input"),
    ),
    tag = "deliveries"
)]
pub async fn create_delivery(
    State(state): State<AppState>,
    Json(payload): Json<CreateDeliveryRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Delivery>>)> {
    let delivery = state.deliveries.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(delivery))))
}

#[utoipa::path(
    get,
    path = "/api/deliveries",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 10"),
    ),
    responses(
        (status = 200, description = "List deliveries", body = ApiResponse<Vec<Delivery>>)
    ),
    tag = "deliveries"
)]
pub async fn list_deliveries(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Delivery>>>> {
    let (offset, limit) = query.normalize();
    let deliveries = state.deliveries.list(offset, limit).await?;
    Ok(Json(ApiResponse::success(deliveries)))
}

#[utoipa::path(
    get,
    path = "/api/deliveries/{id}",
    params(
        ("id" = Uuid, Path, description = "Delivery ID")
    ),
    responses(
        (status = 200, description = "Get delivery", body = ApiResponse<Delivery>),
        (status = 404, description = "Delivery not found"),
    ),
    tag = "deliveries"
)]
pub async fn get_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Delivery>>> {
    let delivery = state
        .deliveries
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Delivery"))?;
    Ok(Json(ApiResponse::success(delivery)))
}

#[utoipa::path(
    put,
    path = "/api/deliveries/{id}",
    params(
        ("id" = Uuid, Path, description = "Delivery ID")
    ),
    request_body = UpdateDeliveryRequest,
    responses(
        (status = 200, description = "Updated delivery", body = ApiResponse<Delivery>),
        (status = 404, description = "Delivery not found"),
    ),
    tag = "deliveries"
)]
pub async fn update_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDeliveryRequest>,
) -> AppResult<Json<ApiResponse<Delivery>>> {
    let delivery = state.deliveries.update(id, payload).await?;
    Ok(Json(ApiResponse::success(delivery)))
}

#[utoipa::path(
    delete,
    path = "/api/deliveries/{id}",
    params(
        ("id" = Uuid, Path, description = "Delivery ID")
    ),
    responses(
        (status = 200, description = "Deleted delivery", body = MessageResponse),
        (status = 404, description = "Delivery not found"),
    ),
    tag = "deliveries"
)]
pub async fn delete_delivery(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.deliveries.delete(id).await?;
    Ok(Json(MessageResponse::new("Delivery deleted successfully")))
}
