//! Client IP resolution
//!
//! Determines which address a `/ip` lookup should target: the leftmost
//! X-Forwarded-For entry when an intermediating proxy set one, the raw peer
//! address of the connection otherwise.

use actix_web::http::header::HeaderMap;
use actix_web::HttpRequest;

/// Extract the forwarded client IP from X-Forwarded-For.
///
/// Proxies append to the header, so the leftmost entry is the original
/// client. The entry is trimmed of surrounding whitespace; an empty header
/// counts as absent.
pub fn extract_forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.split(',').next())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolve the client address for a lookup.
///
/// No syntax validation happens here; a malformed value is passed through to
/// the upstream provider, which is the arbiter of validity.
pub fn resolve_client_ip(req: &HttpRequest) -> Option<String> {
    extract_forwarded_ip(req.headers())
        .or_else(|| req.connection_info().peer_addr().map(String::from))
}
