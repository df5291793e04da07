//! Best-effort extraction of a request override from a curl-style command.
//!
//! This is not a shell interpreter. Each field is pulled out of the raw text
//! by its own pattern, and a missing field simply stays unset; the only way
//! a parse fails outright is a blank command or a `-d` value that is present
//! but not valid JSON.

use crate::check::types::{HttpMethod, OverridePayload};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CurlParseError {
    #[error("Command is empty")]
    Empty,

    #[error("Invalid JSON body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

static URL_FLAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"--url\s+(?:"([^"]*)"|'([^']*)'|(\S+))"#).expect("valid regex")
});

static BARE_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"https?://[^\s'"]+"#).expect("valid regex"));

static METHOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:-X|--request)\s+(\S+)").expect("valid regex"));

static HEADER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:-H|--header)\s+(?:'([^']*)'|"([^"]*)")"#).expect("valid regex")
});

static BODY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:--data-raw|--data|-d)\s+(?:'((?:\\.|[^'\\])*)'|"((?:\\.|[^"\\])*)")"#)
        .expect("valid regex")
});

/// Parses `raw` into an override payload.
pub fn parse(raw: &str) -> Result<OverridePayload, CurlParseError> {
    if raw.trim().is_empty() {
        return Err(CurlParseError::Empty);
    }

    // Line continuations are layout, not content
    let text = raw.replace("\\\r\n", " ").replace("\\\n", " ");

    let url = extract_url(&text);
    let (mut method, method_given) = extract_method(&text);
    let mut headers = extract_headers(&text);
    let body = extract_body(&text)?;

    // A body with no explicit method means POST; no body and no method is
    // left for the caller to default to GET.
    if body.is_some() && !method_given {
        method = Some(HttpMethod::Post);
    }

    if matches!(method, Some(HttpMethod::Post) | Some(HttpMethod::Put))
        && body.is_some()
        && !has_content_type(headers.as_ref())
    {
        headers
            .get_or_insert_with(HashMap::new)
            .insert("Content-Type".to_string(), "application/json".to_string());
    }

    Ok(OverridePayload {
        method,
        headers,
        body,
        url,
    })
}

fn extract_url(text: &str) -> Option<String> {
    if let Some(captures) = URL_FLAG_RE.captures(text) {
        let value = captures
            .get(1)
            .or_else(|| captures.get(2))
            .or_else(|| captures.get(3));
        if let Some(m) = value {
            return Some(m.as_str().to_string());
        }
    }

    BARE_URL_RE.find(text).map(|m| m.as_str().to_string())
}

/// Returns the accepted method (if any) and whether an explicit method token
/// was present at all. An unrecognized token counts as present but yields no
/// method.
fn extract_method(text: &str) -> (Option<HttpMethod>, bool) {
    match METHOD_RE.captures(text) {
        Some(captures) => {
            let method = captures[1].parse::<HttpMethod>().ok();
            if method.is_none() {
                tracing::debug!(token = &captures[1], "Ignoring unsupported method token");
            }
            (method, true)
        }
        None => (None, false),
    }
}

fn extract_headers(text: &str) -> Option<HashMap<String, String>> {
    let mut headers = HashMap::new();

    for captures in HEADER_RE.captures_iter(text) {
        let Some(line) = captures.get(1).or_else(|| captures.get(2)) else {
            continue;
        };
        if let Some((key, value)) = line.as_str().split_once(':') {
            headers.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    if headers.is_empty() {
        None
    } else {
        Some(headers)
    }
}

/// Extracts and JSON-parses a `-d`/`--data`/`--data-raw` value. A quoted
/// value that fails to parse as JSON aborts the whole parse.
fn extract_body(text: &str) -> Result<Option<serde_json::Value>, CurlParseError> {
    let Some(captures) = BODY_RE.captures(text) else {
        return Ok(None);
    };

    let (quoted, quote) = match (captures.get(1), captures.get(2)) {
        (Some(m), _) => (m.as_str(), '\''),
        (_, Some(m)) => (m.as_str(), '"'),
        _ => return Ok(None),
    };

    let unescaped = unescape_quotes(quoted, quote);
    match serde_json::from_str(&unescaped) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            tracing::debug!(error = %e, "Body is not valid JSON");
            Err(CurlParseError::InvalidBody(e))
        }
    }
}

fn unescape_quotes(value: &str, quote: char) -> String {
    let escaped = format!("\\{}", quote);
    value.replace(&escaped, &quote.to_string())
}

fn has_content_type(headers: Option<&HashMap<String, String>>) -> bool {
    headers
        .map(|h| h.keys().any(|k| k.eq_ignore_ascii_case("content-type")))
        .unwrap_or(false)
}
