use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::application::{Application, NewApplication};
use service::services::application_service;

use crate::errors::{ApiError, ApiJson};
use crate::state::AppState;

#[utoipa::path(post, path = "/api/applications", tag = "applications", request_body = crate::openapi::NewApplicationDoc, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewApplication>,
) -> Result<(StatusCode, Json<Application>), ApiError> {
    let application = application_service::submit_application(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

#[utoipa::path(get, path = "/api/applications/{scholarship_id}", tag = "applications", params(("scholarship_id" = String, Path, description = "Scholarship id")), responses((status = 200, description = "Applications for the scholarship")))]
pub async fn list_for_scholarship(
    State(state): State<AppState>,
    Path(scholarship_id): Path<String>,
) -> Json<Vec<Application>> {
    Json(application_service::list_for_scholarship(&state.store, &scholarship_id).await)
}

#[utoipa::path(get, path = "/api/applications/user/{user_id}", tag = "applications", params(("user_id" = String, Path, description = "Applicant user id")), responses((status = 200, description = "Applications by the user")))]
pub async fn list_for_user(State(state): State<AppState>, Path(user_id): Path<String>) -> Json<Vec<Application>> {
    Json(application_service::list_for_applicant(&state.store, &user_id).await)
}
