use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// HTTP methods an endpoint or override may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(()),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One monitored endpoint, loaded from configuration at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointDescriptor {
    pub id: String,
    pub title: String,
    pub url: String,
    pub method: HttpMethod,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    pub expected_status: u16,
}

/// User-supplied request override extracted from a curl-style command.
///
/// Every field is optional; absent fields fall back to the endpoint's own
/// configuration, except `method` which defaults to GET when an override is
/// active but names none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverridePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<HttpMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Outcome tag of a single check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Success,
    Failure,
}

/// Result of one request/response cycle against an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub status: CheckStatus,
    pub message: String,
    /// Elapsed wall time of the check in milliseconds.
    pub duration_ms: u64,
}

impl CheckResult {
    pub fn success(message: String, duration_ms: u64) -> Self {
        Self {
            status: CheckStatus::Success,
            message,
            duration_ms,
        }
    }

    pub fn failure(message: String, duration_ms: u64) -> Self {
        Self {
            status: CheckStatus::Failure,
            message,
            duration_ms,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == CheckStatus::Success
    }
}

/// Per-endpoint UI status, keyed by endpoint id in the status board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeState {
    Idle,
    Loading,
    Success,
    Failure,
}

/// Current state of one endpoint as shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointState {
    pub status: ProbeState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl EndpointState {
    pub fn idle() -> Self {
        Self {
            status: ProbeState::Idle,
            message: None,
        }
    }

    pub fn loading() -> Self {
        Self {
            status: ProbeState::Loading,
            message: None,
        }
    }
}

impl From<&CheckResult> for EndpointState {
    fn from(result: &CheckResult) -> Self {
        Self {
            status: match result.status {
                CheckStatus::Success => ProbeState::Success,
                CheckStatus::Failure => ProbeState::Failure,
            },
            message: Some(result.message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from_str() {
        assert_eq!("get".parse::<HttpMethod>(), Ok(HttpMethod::Get));
        assert_eq!("POST".parse::<HttpMethod>(), Ok(HttpMethod::Post));
        assert_eq!("Put".parse::<HttpMethod>(), Ok(HttpMethod::Put));
        assert_eq!("DELETE".parse::<HttpMethod>(), Ok(HttpMethod::Delete));
        assert!("PATCH".parse::<HttpMethod>().is_err());
        assert!("".parse::<HttpMethod>().is_err());
    }

    #[test]
    fn test_descriptor_deserializes_with_defaults() {
        let descriptor: EndpointDescriptor = serde_json::from_str(
            r#"{
                "id": "read-prod-east",
                "title": "Read Prod East",
                "url": "https://api.east.example.com/v1/price",
                "method": "POST",
                "expected_status": 200
            }"#,
        )
        .unwrap();

        assert_eq!(descriptor.id, "read-prod-east");
        assert_eq!(descriptor.method, HttpMethod::Post);
        assert!(descriptor.headers.is_empty());
        assert!(descriptor.body.is_none());
        assert_eq!(descriptor.expected_status, 200);
    }

    #[test]
    fn test_endpoint_state_from_result() {
        let ok = CheckResult::success("{}".to_string(), 12);
        let state = EndpointState::from(&ok);
        assert_eq!(state.status, ProbeState::Success);
        assert_eq!(state.message.as_deref(), Some("{}"));

        let bad = CheckResult::failure("Timeout".to_string(), 5000);
        let state = EndpointState::from(&bad);
        assert_eq!(state.status, ProbeState::Failure);
    }
}
