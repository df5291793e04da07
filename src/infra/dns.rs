//! DNS resolution support for the check transport.
//!
//! Resolution failures get their own failure class on the dashboard, so the
//! transport pre-flights hostnames here before handing the request to the
//! HTTP client.

use hickory_resolver::{config::*, TokioAsyncResolver};
use std::net::IpAddr;
use std::sync::Arc;
use tokio::sync::OnceCell;

/// Process-wide resolver, shared across checks.
static DNS_RESOLVER: OnceCell<Arc<TokioAsyncResolver>> = OnceCell::const_new();

async fn get_resolver() -> Arc<TokioAsyncResolver> {
    DNS_RESOLVER
        .get_or_init(|| async {
            Arc::new(TokioAsyncResolver::tokio(
                ResolverConfig::default(),
                ResolverOpts::default(),
            ))
        })
        .await
        .clone()
}

/// Returns true when `host` is an IP literal or resolves to at least one
/// address.
pub async fn host_resolves(host: &str) -> bool {
    if host.parse::<IpAddr>().is_ok() {
        return true;
    }

    // Bracketed IPv6 literals as they appear in URLs
    if host.starts_with('[') && host.ends_with(']') {
        if host[1..host.len() - 1].parse::<IpAddr>().is_ok() {
            return true;
        }
    }

    let resolver = get_resolver().await;
    match resolver.lookup_ip(host).await {
        Ok(response) => response.iter().next().is_some(),
        Err(e) => {
            tracing::debug!(host = %host, error = %e, "DNS lookup failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ip_literal_resolves() {
        assert!(host_resolves("127.0.0.1").await);
        assert!(host_resolves("::1").await);
        assert!(host_resolves("[::1]").await);
    }

    #[tokio::test]
    async fn test_bogus_host_does_not_resolve() {
        assert!(!host_resolves("no-such-host.invalid").await);
    }
}
