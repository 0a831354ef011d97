//! Client identification
//!
//! Derives a stable identity for the calling browser from request
//! headers: an IP address for rate limiting and a User-Agent digest
//! for session binding.

use axum::http::{HeaderMap, header};
use std::net::IpAddr;

use crate::crypto::sha256;

/// What the server knows about the calling client
///
/// The hash goes into the session row so a stolen cookie presented by a
/// different browser can be rejected; the raw values are kept for audit
/// logging only.
#[derive(Debug, Clone)]
pub struct ClientFingerprint {
    /// SHA-256 digest of the User-Agent header
    pub hash: [u8; 32],
    /// Resolved client IP, if one could be determined
    pub ip: Option<IpAddr>,
    /// Raw User-Agent string
    pub user_agent: Option<String>,
}

impl ClientFingerprint {
    pub fn new(hash: [u8; 32], ip: Option<IpAddr>, user_agent: Option<String>) -> Self {
        Self { hash, ip, user_agent }
    }

    /// Digest as an owned buffer, in the shape the session store expects
    pub fn hash_vec(&self) -> Vec<u8> {
        self.hash.to_vec()
    }

    /// Textual IP for storage and logs
    pub fn ip_string(&self) -> Option<String> {
        self.ip.map(|ip| ip.to_string())
    }
}

/// Error when a fingerprint cannot be derived from the request
#[derive(Debug, Clone, thiserror::Error)]
pub enum FingerprintError {
    #[error("Missing required header: {0}")]
    MissingHeader(String),
}

/// Derive a [`ClientFingerprint`] from request headers.
///
/// A missing User-Agent is an error rather than an empty digest: a
/// client that sends no User-Agent would otherwise collide with every
/// other such client and weaken session binding to nothing.
pub fn extract_fingerprint(
    headers: &HeaderMap,
    client_ip: Option<IpAddr>,
) -> Result<ClientFingerprint, FingerprintError> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| FingerprintError::MissingHeader("User-Agent".to_string()))?;

    Ok(ClientFingerprint::new(
        sha256(user_agent.as_bytes()),
        client_ip,
        Some(user_agent.to_string()),
    ))
}

/// Resolve the client IP, honoring a reverse proxy.
///
/// The first entry of `X-Forwarded-For` wins when it parses; otherwise
/// the peer address of the connection is used as-is.
pub fn extract_client_ip(headers: &HeaderMap, direct_ip: Option<IpAddr>) -> Option<IpAddr> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|forwarded| forwarded.split(',').next())
        .and_then(|first| first.trim().parse::<IpAddr>().ok())
        .or(direct_ip)
}

/// Derive the identifier used to key per-client rate limiting
///
/// The textual IP address when one is known; clients with no derivable
/// address all share the `"unknown"` bucket rather than bypassing the
/// limiter entirely.
pub fn rate_limit_identifier(ip: Option<IpAddr>) -> String {
    match ip {
        Some(ip) => ip.to_string(),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_ua(ua: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::USER_AGENT, HeaderValue::from_static(ua));
        headers
    }

    #[test]
    fn test_fingerprint_hashes_user_agent() {
        let headers = headers_with_ua("Mozilla/5.0 Test Browser");

        let fp = extract_fingerprint(&headers, None).unwrap();
        assert_eq!(fp.hash, sha256(b"Mozilla/5.0 Test Browser"));
        assert_eq!(fp.user_agent.as_deref(), Some("Mozilla/5.0 Test Browser"));
        assert_eq!(fp.ip_string(), None);
    }

    #[test]
    fn test_fingerprint_requires_user_agent() {
        let result = extract_fingerprint(&HeaderMap::new(), None);
        assert!(matches!(result, Err(FingerprintError::MissingHeader(_))));
    }

    #[test]
    fn test_forwarded_for_takes_precedence() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("192.168.1.1, 10.0.0.1"),
        );

        let direct: IpAddr = "127.0.0.1".parse().unwrap();
        let ip = extract_client_ip(&headers, Some(direct));
        assert_eq!(ip, Some("192.168.1.1".parse().unwrap()));
    }

    #[test]
    fn test_unparseable_forwarded_for_falls_back() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static("not-an-ip"));

        let direct: IpAddr = "127.0.0.1".parse().unwrap();
        assert_eq!(extract_client_ip(&headers, Some(direct)), Some(direct));
        assert_eq!(extract_client_ip(&headers, None), None);
    }

    #[test]
    fn test_rate_limit_identifier() {
        let v4: IpAddr = "203.0.113.7".parse().unwrap();
        assert_eq!(rate_limit_identifier(Some(v4)), "203.0.113.7");

        let v6: IpAddr = "2001:db8::1".parse().unwrap();
        assert_eq!(rate_limit_identifier(Some(v6)), "2001:db8::1");

        assert_eq!(rate_limit_identifier(None), "unknown");
    }
}
