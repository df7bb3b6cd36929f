//! Rendering engine for content-analysis results.
//!
//! This crate provides:
//! - [`format_content`] - analysis text to safe HTML, in [`Mode::Summary`] or [`Mode::Analysis`]
//! - [`AnalysisResponse`] - the upstream response model and its page rendering
//! - [`ContentType`] and [`extract_youtube_id`] - source URL classification
//! - [`validate_source_url`] and [`normalize_link_url`] - link safety helpers

pub mod config;
pub mod error;
pub mod format;
pub mod response;
pub mod source;
pub mod utils;

pub use error::{ParseModeError, ResponseError, UrlValidationError};
pub use format::{Mode, escape_html, format_content};
pub use response::{AnalysisResponse, Metadata, RenderedAnalysis, render_metadata};
pub use source::{ContentType, extract_youtube_id};
pub use utils::{normalize_link_url, validate_source_url};
