use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use models::transaction::{NewTransaction, Transaction};
use service::services::transaction_service;

use crate::errors::{ApiError, ApiJson};
use crate::state::AppState;

#[utoipa::path(post, path = "/api/transactions", tag = "transactions", request_body = crate::openapi::NewTransactionDoc, responses((status = 201, description = "Recorded and balances moved"), (status = 400, description = "Bad Request")))]
pub async fn record(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<NewTransaction>,
) -> Result<(StatusCode, Json<Transaction>), ApiError> {
    let tx = transaction_service::record_transaction(&state.store, input).await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

#[utoipa::path(get, path = "/api/transactions/{address}", tag = "transactions", params(("address" = String, Path, description = "Wallet address on either side")), responses((status = 200, description = "OK")))]
pub async fn list_for_address(State(state): State<AppState>, Path(address): Path<String>) -> Json<Vec<Transaction>> {
    Json(transaction_service::list_for_address(&state.store, &address).await)
}
