use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::user::{NewUser, User, UserPatch};
use service::services::user_service;
use tracing::info;

use crate::errors::{ApiError, ApiJson};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/users/{address}", tag = "users", params(("address" = String, Path, description = "Wallet address")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get_by_address(State(state): State<AppState>, Path(address): Path<String>) -> Result<Json<User>, ApiError> {
    Ok(Json(user_service::get_user_by_address(&state.store, &address).await?))
}

#[utoipa::path(post, path = "/api/users", tag = "users", request_body = crate::openapi::NewUserDoc, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request"), (status = 409, description = "Conflict")))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewUser>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = user_service::create_user(&state.store, input).await?;
    info!(id = %user.id, address = %user.address, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(put, path = "/api/users/{address}", tag = "users", params(("address" = String, Path, description = "Wallet address")), request_body = crate::openapi::UserPatchDoc, responses((status = 200, description = "OK"), (status = 404, description = "Not Found"), (status = 409, description = "Conflict")))]
pub async fn update(
    State(state): State<AppState>,
    Path(address): Path<String>,
    ApiJson(patch): ApiJson<UserPatch>,
) -> Result<Json<User>, ApiError> {
    Ok(Json(user_service::update_user(&state.store, &address, patch).await?))
}
