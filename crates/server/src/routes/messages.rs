use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::message::{Message, NewMessage};
use service::services::message_service;

use crate::errors::{ApiError, ApiJson};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/messages/{user_id}", tag = "messages", params(("user_id" = String, Path, description = "Recipient user id")), responses((status = 200, description = "Messages addressed to the user")))]
pub async fn list_for_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Json<Vec<Message>> {
    Json(message_service::list_for_recipient(&state.store, &user_id).await)
}

#[utoipa::path(post, path = "/api/messages", tag = "messages", request_body = crate::openapi::NewMessageDoc, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn send(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewMessage>,
) -> Result<(StatusCode, Json<Message>), ApiError> {
    let message = message_service::send_message(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(put, path = "/api/messages/{id}/read", tag = "messages", params(("id" = String, Path, description = "Message id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn mark_read(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Message>, ApiError> {
    Ok(Json(message_service::mark_read(&state.store, &id).await?))
}
