//! Local mock price API.
//!
//! The default catalog's regional endpoints all point here, so the
//! dashboard works out of the box without external backends.

use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct PriceRequest {
    #[serde(default)]
    pub request: Option<String>,
}

pub async fn mock_price(Json(request): Json<PriceRequest>) -> Json<Value> {
    Json(json!({
        "request": request.request.unwrap_or_default(),
        "price": 100.0,
        "currency": "USD",
    }))
}
