//! Rendering an override payload back into a curl-style command.
//!
//! Display-only: the dashboard shows each endpoint's default request as a
//! copy-pastable command the user can tweak and paste back.

use crate::check::types::{HttpMethod, OverridePayload};
use once_cell::sync::Lazy;
use regex::Regex;

static SPACE_RUNS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"  +").expect("valid regex"));

/// Renders `payload` as `curl -X {method} {-H 'k: v'}* {-d '{json}'}? {url}`,
/// using `fallback_url` when the payload carries no URL of its own.
pub fn to_curl_string(payload: &OverridePayload, fallback_url: &str) -> String {
    let method = payload.method.unwrap_or(HttpMethod::Get);

    // Sorted for stable output; header maps carry no order of their own
    let headers = payload
        .headers
        .as_ref()
        .map(|map| {
            let mut pairs: Vec<_> = map.iter().collect();
            pairs.sort_by_key(|(key, _)| key.as_str());
            pairs
                .into_iter()
                .map(|(key, value)| format!("-H '{}: {}'", key, value))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default();

    let body = payload
        .body
        .as_ref()
        .map(|value| format!("-d '{}'", value))
        .unwrap_or_default();

    let url = payload.url.as_deref().unwrap_or(fallback_url);

    let rendered = format!("curl -X {} {} {} {}", method, headers, body, url);
    SPACE_RUNS_RE.replace_all(rendered.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::parser::parse;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_minimal_payload_collapses_spaces() {
        let rendered = to_curl_string(&OverridePayload::default(), "https://h/p");
        assert_eq!(rendered, "curl -X GET https://h/p");
    }

    #[test]
    fn test_full_payload() {
        let payload = OverridePayload {
            method: Some(HttpMethod::Post),
            headers: Some(HashMap::from([
                ("B-Header".to_string(), "2".to_string()),
                ("A-Header".to_string(), "1".to_string()),
            ])),
            body: Some(json!({"a": 1})),
            url: Some("https://h/p".to_string()),
        };

        assert_eq!(
            to_curl_string(&payload, "https://fallback/"),
            r#"curl -X POST -H 'A-Header: 1' -H 'B-Header: 2' -d '{"a":1}' https://h/p"#
        );
    }

    #[test]
    fn test_fallback_url_used_when_absent() {
        let payload = OverridePayload {
            method: Some(HttpMethod::Delete),
            ..Default::default()
        };
        assert_eq!(
            to_curl_string(&payload, "https://fallback/x"),
            "curl -X DELETE https://fallback/x"
        );
    }

    #[test]
    fn test_round_trip_preserves_semantics() {
        let raw = r#"-X POST -H 'Authorization: Bearer t' -d '{"a":1}' https://h/p"#;
        let first = parse(raw).unwrap();
        let second = parse(&to_curl_string(&first, "https://fallback/")).unwrap();

        assert_eq!(first.method, second.method);
        assert_eq!(first.headers, second.headers);
        assert_eq!(first.body, second.body);
        assert_eq!(first.url, second.url);
    }
}
