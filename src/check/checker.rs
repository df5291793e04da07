//! Endpoint check execution.
//!
//! Assembles the effective request from an endpoint descriptor and an
//! optional override, dispatches it through the transport, and classifies
//! the outcome into a `CheckResult`. Every failure mode is normalized into
//! the result message; this function never errors.

use super::transport::{EffectiveRequest, Transport, TransportError};
use super::types::{CheckResult, EndpointDescriptor, HttpMethod, OverridePayload};
use std::collections::HashMap;
use std::time::Instant;

/// Runs one check against `endpoint`, applying `override_payload` when given.
pub async fn run_check(
    transport: &dyn Transport,
    endpoint: &EndpointDescriptor,
    override_payload: Option<&OverridePayload>,
) -> CheckResult {
    let request = effective_request(endpoint, override_payload);
    let started = Instant::now();

    tracing::debug!(
        endpoint_id = %endpoint.id,
        method = %request.method,
        url = %request.url,
        "Dispatching check"
    );

    let outcome = transport.dispatch(request).await;
    let duration_ms = started.elapsed().as_millis() as u64;

    match outcome {
        Ok(response) => {
            if response.status == endpoint.expected_status {
                CheckResult::success(render_body(&response.body), duration_ms)
            } else {
                let mut message = format!("Error: Status {}", response.status);
                if !response.body.is_empty() {
                    message.push_str("\n\n");
                    message.push_str(&response.body);
                }
                CheckResult::failure(message, duration_ms)
            }
        }
        Err(e) => {
            tracing::warn!(endpoint_id = %endpoint.id, error = %e, "Check failed");
            CheckResult::failure(e.to_string(), duration_ms)
        }
    }
}

/// Computes the request to dispatch: endpoint defaults with override fields
/// taking precedence, merged onto a base `Content-Type: application/json`.
fn effective_request(
    endpoint: &EndpointDescriptor,
    override_payload: Option<&OverridePayload>,
) -> EffectiveRequest {
    let mut headers = HashMap::from([(
        "Content-Type".to_string(),
        "application/json".to_string(),
    )]);

    match override_payload {
        None => {
            headers.extend(endpoint.headers.clone());
            EffectiveRequest {
                method: endpoint.method,
                url: endpoint.url.clone(),
                headers,
                body: endpoint.body.clone(),
            }
        }
        Some(payload) => {
            headers.extend(
                payload
                    .headers
                    .clone()
                    .unwrap_or_else(|| endpoint.headers.clone()),
            );
            let url = match &payload.url {
                Some(override_url) => merge_target_url(&endpoint.url, override_url),
                None => endpoint.url.clone(),
            };
            EffectiveRequest {
                // An active override with no method means GET, not the
                // endpoint's configured method.
                method: payload.method.unwrap_or(HttpMethod::Get),
                url,
                headers,
                body: payload.body.clone().or_else(|| endpoint.body.clone()),
            }
        }
    }
}

/// Combines the endpoint's origin with the override URL's path, query and
/// fragment. The override picks what to request; the endpoint picks which
/// backend to request it from. Falls back to the endpoint URL when either
/// side is not a valid absolute URL.
pub fn merge_target_url(endpoint_url: &str, override_url: &str) -> String {
    let base = match url::Url::parse(endpoint_url) {
        Ok(u) => u,
        Err(_) => return endpoint_url.to_string(),
    };
    let overlay = match url::Url::parse(override_url) {
        Ok(u) => u,
        Err(_) => return endpoint_url.to_string(),
    };

    let mut merged = base;
    merged.set_path(overlay.path());
    merged.set_query(overlay.query());
    merged.set_fragment(overlay.fragment());
    merged.to_string()
}

/// Pretty-prints the body when it parses as JSON, otherwise returns it raw.
fn render_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}
