//! Shared helpers for link handling.
//!
//! Provides:
//! - [`normalize_link_url`] - scheme prefixing for markdown link destinations
//! - [`validate_source_url`] - http(s) validation for source links

mod url;

pub use url::{extract_host, has_http_scheme, normalize_link_url, validate_source_url};
