use crate::check::types::{EndpointDescriptor, EndpointState, OverridePayload};
use crate::curl::to_curl_string;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct EndpointListing {
    #[serde(flatten)]
    pub endpoint: EndpointDescriptor,
    /// The endpoint's default request rendered as a curl command, shown as
    /// the starting point for overrides.
    pub curl: String,
}

pub async fn list_endpoints(State(state): State<AppState>) -> Json<Vec<EndpointListing>> {
    let listings = state
        .catalog
        .iter()
        .map(|endpoint| EndpointListing {
            curl: curl_preview(endpoint),
            endpoint: endpoint.clone(),
        })
        .collect();

    Json(listings)
}

pub async fn status_snapshot(State(state): State<AppState>) -> Json<HashMap<String, EndpointState>> {
    Json(state.board.snapshot().await)
}

fn curl_preview(endpoint: &EndpointDescriptor) -> String {
    let payload = OverridePayload {
        method: Some(endpoint.method),
        headers: (!endpoint.headers.is_empty()).then(|| endpoint.headers.clone()),
        body: endpoint.body.clone(),
        url: None,
    };
    to_curl_string(&payload, &endpoint.url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::types::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_curl_preview() {
        let endpoint = EndpointDescriptor {
            id: "read-prod-east".to_string(),
            title: "Read Prod East".to_string(),
            url: "http://localhost:3000/api/price".to_string(),
            method: HttpMethod::Post,
            headers: Default::default(),
            body: Some(json!({"request": "price-check-east"})),
            expected_status: 200,
        };

        assert_eq!(
            curl_preview(&endpoint),
            r#"curl -X POST -d '{"request":"price-check-east"}' http://localhost:3000/api/price"#
        );
    }
}
