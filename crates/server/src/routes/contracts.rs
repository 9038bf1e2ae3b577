use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use models::smart_contract::{NewSmartContract, SmartContract};
use serde::Deserialize;
use service::services::contract_service;

use crate::errors::{ApiError, ApiJson};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ContractFilter {
    pub sponsor: Option<String>,
}

#[utoipa::path(get, path = "/api/contracts", tag = "contracts", params(("sponsor" = Option<String>, Query, description = "Only contracts funded by this address")), responses((status = 200, description = "OK")))]
pub async fn list(State(state): State<AppState>, Query(filter): Query<ContractFilter>) -> Json<Vec<SmartContract>> {
    let contracts = match filter.sponsor.as_deref() {
        Some(sponsor) => contract_service::list_for_sponsor(&state.store, sponsor).await,
        None => contract_service::list_contracts(&state.store).await,
    };
    Json(contracts)
}

#[utoipa::path(get, path = "/api/contracts/{id}", tag = "contracts", params(("id" = String, Path, description = "Contract id")), responses((status = 200, description = "OK"), (status = 404, description = "Not Found")))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<SmartContract>, ApiError> {
    Ok(Json(contract_service::get_contract(&state.store, &id).await?))
}

#[utoipa::path(post, path = "/api/contracts", tag = "contracts", request_body = crate::openapi::NewSmartContractDoc, responses((status = 201, description = "Created"), (status = 400, description = "Bad Request")))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewSmartContract>,
) -> Result<(StatusCode, Json<SmartContract>), ApiError> {
    let created = contract_service::create_contract(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
