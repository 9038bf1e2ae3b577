use axum::{
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Banner, Health};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod applications;
pub mod contracts;
pub mod messages;
pub mod scholarships;
pub mod transactions;
pub mod users;
pub mod webhook;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn banner() -> Json<Banner> {
    Json(Banner::default())
}

async fn metrics() -> (StatusCode, String) {
    common::metrics::render()
}

/// Build the full application router: API, webhook, docs and ops endpoints.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let ops = Router::new()
        .route("/", get(banner))
        .route("/health", get(health))
        .route("/metrics", get(metrics));

    let api = Router::new()
        .route("/api/scholarships", get(scholarships::list).post(scholarships::create))
        .route("/api/scholarships/:id", get(scholarships::get))
        .route("/api/users", post(users::create))
        .route("/api/users/:address", get(users::get_by_address).put(users::update))
        .route("/api/messages", post(messages::send))
        .route("/api/messages/:user_id", get(messages::list_for_user))
        .route("/api/messages/:id/read", put(messages::mark_read))
        .route("/api/applications", post(applications::submit))
        .route("/api/applications/:scholarship_id", get(applications::list_for_scholarship))
        .route("/api/applications/user/:user_id", get(applications::list_for_user))
        .route("/api/transactions", post(transactions::record))
        .route("/api/transactions/:address", get(transactions::list_for_address))
        .route("/api/contracts", get(contracts::list).post(contracts::create))
        .route("/api/contracts/:id", get(contracts::get))
        .route("/webhook", post(webhook::inbound));

    ops.merge(api)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
