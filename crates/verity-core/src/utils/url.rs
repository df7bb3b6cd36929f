//! URL normalization and validation.
//!
//! Link destinations written in analysis text are normalized to absolute
//! http(s) URLs; source URLs are validated before they are linked.

use std::borrow::Cow;

use crate::config::{DEFAULT_LINK_SCHEME, HTTP_SCHEMES};
use crate::error::UrlValidationError;

/// Check whether a URL starts with an http(s) scheme (case-insensitive).
pub fn has_http_scheme(url: &str) -> bool {
    HTTP_SCHEMES.iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Normalize a markdown link destination.
///
/// Destinations without an http(s) scheme get `https://` prefixed, so
/// `example.com` becomes `https://example.com`.
pub fn normalize_link_url(url: &str) -> Cow<'_, str> {
    let url = url.trim();
    if has_http_scheme(url) {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{}{}", DEFAULT_LINK_SCHEME, url))
    }
}

/// Validate a source URL before it is rendered as a link.
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a non-empty host
pub fn validate_source_url(url: &str) -> Result<String, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if !has_http_scheme(url) {
        return Err(UrlValidationError::InvalidProtocol);
    }

    if extract_host(url).is_none() {
        return Err(UrlValidationError::NoHost);
    }

    Ok(url.to_string())
}

/// Extract the lowercased host from an http(s) URL.
pub fn extract_host(url: &str) -> Option<String> {
    let scheme_len = HTTP_SCHEMES.iter().find_map(|scheme| {
        url.get(..scheme.len())
            .filter(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .map(|_| scheme.len())
    })?;
    let without_protocol = &url[scheme_len..];

    // Host ends at the first path, query, or fragment delimiter
    let authority = without_protocol
        .split(['/', '?', '#'])
        .next()?;

    // Drop userinfo and port
    let host_port = authority.rsplit('@').next()?;
    let host = host_port.split(':').next()?;

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}
