//! Rendering configuration.
//!
//! Centralizes the constants that shape the generated markup: anchor
//! attributes, fact-check vocabulary, and metadata placeholders.

// =============================================================================
// Links
// =============================================================================

/// `target` attribute applied to every generated anchor.
pub const LINK_TARGET: &str = "_blank";

/// `rel` attribute applied to every generated anchor.
pub const LINK_REL: &str = "noopener";

/// Scheme prefixed to markdown link destinations that carry none.
pub const DEFAULT_LINK_SCHEME: &str = "https://";

/// Schemes recognized as already-absolute link destinations.
pub const HTTP_SCHEMES: &[&str] = &["http://", "https://"];

// =============================================================================
// Fact-check Blocks
// =============================================================================

/// Marker labels opening a claim body.
pub const CLAIM_LABELS: &[&str] = &["claim"];

/// Marker labels opening a verdict body.
pub const VERDICT_LABELS: &[&str] = &["verdict", "rating"];

/// Keyword tables for verdict classification, checked in declaration order.
pub mod verdict_keywords {
    /// Keywords classifying a verdict as true.
    pub const TRUE: &[&str] = &["true", "accurate"];

    /// Keywords classifying a verdict as false.
    pub const FALSE: &[&str] = &["false", "inaccurate"];

    /// Keywords classifying a verdict as misleading.
    pub const MISLEADING: &[&str] = &["misleading", "partially"];
}

// =============================================================================
// Summary Rules
// =============================================================================

/// Standalone summary lines promoted to section headings (matched
/// case-insensitively, optional trailing colon).
pub const KEY_POINT_HEADINGS: &[&str] = &["Key Points", "Key Findings", "Key Takeaways"];

// =============================================================================
// Response Handling
// =============================================================================

/// Substring of an upstream error that signals a missing transcript.
pub const TRANSCRIPT_ERROR_MARKER: &str = "transcript";

/// Placeholder shown for absent metadata values.
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Hosts identifying video sources.
pub const VIDEO_HOSTS: &[&str] = &["youtube.com", "youtu.be"];
