use super::types::HomeResponse;
use crate::{
    Error,
    service::{ExternalPost, IntentResult, NlpService, SummaryResult, TextRequest},
};
use axum::{extract::State, response::Json};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<NlpService>,
}

pub async fn home() -> Json<HomeResponse> {
    Json(HomeResponse::default())
}

pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<SummaryResult>, Error> {
    info!("Received summarize request ({} chars)", request.text.len());

    state
        .service
        .summarize(&request)
        .await
        .map(Json)
        .inspect_err(|e| log_failure("summarize", e))
}

pub async fn detect_intent(
    State(state): State<AppState>,
    Json(request): Json<TextRequest>,
) -> Result<Json<IntentResult>, Error> {
    info!("Received intent request ({} chars)", request.text.len());

    state
        .service
        .detect_intent(&request)
        .await
        .map(Json)
        .inspect_err(|e| log_failure("intent", e))
}

pub async fn fetch_data(State(state): State<AppState>) -> Result<Json<ExternalPost>, Error> {
    info!("Received fetch request");

    state
        .service
        .fetch_data()
        .await
        .map(Json)
        .inspect_err(|e| log_failure("fetch", e))
}

fn log_failure(route: &str, e: &Error) {
    match e {
        Error::Validation(msg) => warn!("Rejected {} request: {}", route, msg),
        _ => error!("Failed to process {} request: {}", route, e),
    }
}
