use crate::check::types::{CheckResult, CheckStatus, ProbeState};
use crate::check::run_check;
use crate::curl;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub id: String,
    /// Optional curl-style override command.
    #[serde(default)]
    pub command: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub id: String,
    pub status: ProbeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
}

impl CheckResponse {
    fn in_flight(id: String) -> Self {
        Self {
            id,
            status: ProbeState::Loading,
            message: None,
            duration_ms: None,
        }
    }

    fn settled(id: String, result: CheckResult) -> Self {
        Self {
            id,
            status: match result.status {
                CheckStatus::Success => ProbeState::Success,
                CheckStatus::Failure => ProbeState::Failure,
            },
            message: Some(result.message),
            duration_ms: Some(result.duration_ms),
        }
    }
}

/// Runs one on-demand check. Parse problems in the override command abort
/// before anything is dispatched; a check already in flight for the same
/// endpoint is reported as `loading` without dispatching a second request.
pub async fn check_endpoint(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<Json<CheckResponse>, AppError> {
    let endpoint = state
        .catalog
        .get(&request.id)
        .cloned()
        .ok_or_else(|| AppError::UnknownEndpoint(request.id.clone()))?;

    let override_payload = request
        .command
        .as_deref()
        .map(curl::parse)
        .transpose()?;

    if !state.board.begin(&endpoint.id).await {
        tracing::debug!(endpoint_id = %endpoint.id, "Check already in flight, skipping");
        return Ok(Json(CheckResponse::in_flight(endpoint.id)));
    }

    let result = run_check(state.transport.as_ref(), &endpoint, override_payload.as_ref()).await;
    state.board.finish(&endpoint.id, &result).await;

    Ok(Json(CheckResponse::settled(endpoint.id, result)))
}
