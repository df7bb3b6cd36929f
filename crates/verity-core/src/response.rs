//! Upstream analysis response model and page rendering.
//!
//! An [`AnalysisResponse`] is what the content-analysis service returns for a
//! submitted URL. Rendering checks it for reported failures first, then runs
//! the formatter once per text field.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::{TRANSCRIPT_ERROR_MARKER, UNKNOWN_FIELD};
use crate::error::ResponseError;
use crate::format::{Mode, escape_html, format_content};
use crate::source::ContentType;
use crate::utils::validate_source_url;

// =============================================================================
// Response Model
// =============================================================================

/// Descriptive fields about the analyzed source
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Video creator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Article publication name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_date: Option<String>,
}

/// Analysis document returned by the upstream service
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    #[serde(default)]
    pub content_type: ContentType,
    #[serde(default)]
    pub metadata: Metadata,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub critical_analysis: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Rendered HTML fragments for one response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderedAnalysis {
    pub metadata_html: String,
    pub summary_html: String,
    pub analysis_html: String,
    /// Validated http(s) source URL, if the response carried one
    pub source_url: Option<String>,
}

impl AnalysisResponse {
    /// Parse a response document.
    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Fail if the upstream service reported an error.
    ///
    /// Transcript failures are reported separately so callers can surface
    /// the upstream message unchanged.
    pub fn check(&self) -> Result<(), ResponseError> {
        let Some(error) = self.error.as_deref() else {
            return Ok(());
        };
        if error.contains(TRANSCRIPT_ERROR_MARKER) {
            debug!(%error, "transcript unavailable, skipping formatting");
            return Err(ResponseError::TranscriptUnavailable(error.to_string()));
        }
        Err(ResponseError::Upstream(error.to_string()))
    }

    /// Render metadata, summary and analysis.
    pub fn render(&self) -> Result<RenderedAnalysis, ResponseError> {
        self.check()?;

        let source_url = self.source_url.as_deref().and_then(|url| {
            validate_source_url(url)
                .inspect_err(|err| warn!(%url, %err, "dropping source link"))
                .ok()
        });

        Ok(RenderedAnalysis {
            metadata_html: render_metadata(self),
            summary_html: format_content(self.summary.as_deref(), Mode::Summary),
            analysis_html: format_content(self.critical_analysis.as_deref(), Mode::Analysis),
            source_url,
        })
    }
}

// =============================================================================
// Metadata Panel
// =============================================================================

/// Render the metadata rows for a response.
///
/// Values are escaped; absent or blank values show a placeholder.
pub fn render_metadata(response: &AnalysisResponse) -> String {
    let meta = &response.metadata;
    let content_type = response.content_type;

    let mut rows = vec![
        ("Content Type", Some(content_type.label())),
        ("Title", meta.title.as_deref()),
    ];
    match content_type {
        ContentType::Youtube => rows.push(("Creator", meta.author.as_deref())),
        ContentType::Article => {
            rows.push(("Source", meta.source.as_deref()));
            rows.push(("Published", meta.publication_date.as_deref()));
        }
    }

    rows.into_iter()
        .map(|(label, value)| {
            let value = value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(UNKNOWN_FIELD);
            format!(
                "<div class=\"metadata-item\"><span class=\"metadata-label\">{}:</span> {}</div>",
                label,
                escape_html(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl RenderedAnalysis {
    /// Compose the rendered fragments into one page section.
    pub fn to_html(&self) -> String {
        let mut html = format!(
            "<section id=\"metadata\">\n{}\n</section>\n\
             <section id=\"summary-text\">\n{}\n</section>\n\
             <section id=\"analysis-text\">\n{}\n</section>",
            self.metadata_html, self.summary_html, self.analysis_html
        );
        if let Some(url) = &self.source_url {
            html.push_str(&format!(
                "\n<a id=\"source-link\" href=\"{}\" target=\"_blank\" rel=\"noopener\">View original source</a>",
                escape_html(url)
            ));
        }
        html
    }
}

// =============================================================================
// Tests
// =============================================================================
