use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::scholarship::{NewScholarship, Scholarship};
use service::services::scholarship_service;

use crate::errors::{ApiError, ApiJson};
use crate::state::AppState;

#[utoipa::path(get, path = "/api/scholarships", tag = "scholarships", responses((status = 200, description = "All scholarships in insertion order")))]
pub async fn list(State(state): State<AppState>) -> Json<Vec<Scholarship>> {
    Json(scholarship_service::list_scholarships(&state.store).await)
}

#[utoipa::path(get, path = "/api/scholarships/{id}", tag = "scholarships", params(("id" = String, Path, description = "Scholarship id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Scholarship>, ApiError> {
    Ok(Json(scholarship_service::get_scholarship(&state.store, &id).await?))
}

#[utoipa::path(post, path = "/api/scholarships", tag = "scholarships", request_body = crate::openapi::NewScholarshipDoc, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewScholarship>,
) -> Result<(StatusCode, Json<Scholarship>), ApiError> {
    let created = scholarship_service::create_scholarship(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
