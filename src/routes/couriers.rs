use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::couriers::{CreateCourierRequest, UpdateCourierRequest},
    error::{AppError, AppResult},
    models::Courier,
    response::{ApiResponse, MessageResponse},
    routes::params::Pagination,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_courier))
        .route("/", get(list_couriers))
        .route("/{id}", get(get_courier))
        .route("/{id}", put(update_courier))
        .route("/{id}", delete(delete_courier))
}

#[utoipa::path(
    post,
    path = "/api/couriers",
    request_body = CreateCourierRequest,
    responses(
        (status = 201, description = "Courier created", body = ApiResponse<Courier>),
        (status = 400, description = "Invalid input"),
    ),
    tag = "couriers"
)]
pub async fn create_courier(
    State(state): State<AppState>,
    Json(payload): Json<CreateCourierRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Courier>>)> {
    payload.validate()?;
    let courier = state.couriers.create(payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(courier))))
}

#[utoipa::path(
    get,
    path = "/api/couriers",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("limit" = Option<i64>, Query, description = "Items per page, default 10"),
    ),
    responses(
        (status = 200, description = "List couriers", body = ApiResponse<Vec<Courier>>)
    ),
    tag = "couriers"
)]
pub async fn list_couriers(
    State(state): State<AppState>,
    Query(query): Query<Pagination>,
) -> AppResult<Json<ApiResponse<Vec<Courier>>>> {
    let (offset, limit) = query.normalize();
    let couriers = state.couriers.list(offset, limit).await?;
    Ok(Json(ApiResponse::success(couriers)))
}

#[utoipa::path(
    get,
    path = "/api/couriers/{id}",
    params(
        ("id" = Uuid, Path, description = "Courier ID")
    ),
    responses(
        (status = 200, description = "Get courier", body = ApiResponse<Courier>),
        (status = 404, description = "Courier not found"),
    ),
    tag = "couriers"
)]
pub async fn get_courier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    let courier = state
        .couriers
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Courier"))?;
    Ok(Json(ApiResponse::success(courier)))
}

#[utoipa::path(
    put,
    path = "/api/couriers/{id}",
    params(
        ("id" = Uuid, Path, description = "Courier ID")
    ),
    request_body = UpdateCourierRequest,
    responses(
        (status = 200, description = "Updated courier", body = ApiResponse<Courier>),
        (status = 404, description = "Courier not found"),
    ),
    tag = "couriers"
)]
pub async fn update_courier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCourierRequest>,
) -> AppResult<Json<ApiResponse<Courier>>> {
    payload.validate()?;
    let courier = state.couriers.update(id, payload).await?;
    Ok(Json(ApiResponse::success(courier)))
}

#[utoipa::path(
    delete,
    path = "/api/couriers/{id}",
    params(
        ("id" = Uuid, Path, description = "Courier ID")
    ),
    responses(
        (status = 200, description = "Deleted courier", body = MessageResponse),
        (status = 404, description = "Courier not found"),
    ),
    tag = "couriers"
)]
pub async fn delete_courier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    state.couriers.delete(id).await?;
    Ok(Json(MessageResponse::new("Courier deleted successfully")))
}
