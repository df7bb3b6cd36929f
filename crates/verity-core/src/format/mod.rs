//! Analysis text to HTML formatter.
//!
//! Supports a constrained markdown-like subset:
//! - Headings: `# ` renders `<h2>`, `## ` and `### ` both render `<h3>`
//! - Lists: `* `, `- ` and `N. ` lines merge into one `<ul>`
//! - Blockquotes: `> `
//! - Emphasis: `**strong**`, `*em*`
//! - Links: `[text](url)` and bare `http(s)://` URLs
//! - Fact-check blocks: `**Claim:**`, `**Verdict:**`, `**Rating:**`
//! - Summary mode only: "Key Points" headings and `[n]` citations
//!
//! Formatting runs in two phases. The [`Lexer`] splits the input into spanned
//! block tokens and the renderer groups them into nodes and writes each node
//! once, escaping every text leaf exactly once. Nothing is re-scanned after it
//! has been rendered.

mod escape;
mod inline;
mod lexer;
mod render;
mod verdict;

pub use escape::escape_html;
pub use inline::{Inline, InlineLexer, InlineRules};
pub use lexer::{Lexer, Spanned, Token};
pub use verdict::VerdictClass;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::ParseModeError;

// =============================================================================
// Mode
// =============================================================================

/// Which rule set the formatter applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Summary text: key-point headings and citation markers are recognized
    Summary,
    /// Critical analysis text
    #[default]
    Analysis,
}

impl Mode {
    fn inline_rules(self) -> InlineRules {
        InlineRules::new(self == Self::Summary)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Analysis => write!(f, "analysis"),
        }
    }
}

impl FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "summary" => Ok(Self::Summary),
            "analysis" => Ok(Self::Analysis),
            _ => Err(ParseModeError(s.to_string())),
        }
    }
}

// =============================================================================
// Formatter
// =============================================================================

/// Render analysis text as an HTML fragment.
///
/// Returns an empty string for absent or empty input. Never fails: syntax
/// that does not form a complete construct is kept as escaped literal text.
pub fn format_content(content: Option<&str>, mode: Mode) -> String {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return String::new();
    };

    let text = normalize_newlines(content);
    let blocks = render::assemble(Lexer::new(&text, mode));
    let html = render::render_blocks(&blocks, mode.inline_rules());

    trace!(
        %mode,
        input_len = content.len(),
        blocks = blocks.len(),
        output_len = html.len(),
        "formatted content"
    );
    html
}

fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn summary(input: &str) -> String {
        format_content(Some(input), Mode::Summary)
    }

    fn analysis(input: &str) -> String {
        format_content(Some(input), Mode::Analysis)
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_content(Some(""), Mode::Summary), "");
        assert_eq!(format_content(None, Mode::Analysis), "");
        assert_eq!(analysis("\n\n  \n"), "");
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("summary".parse::<Mode>(), Ok(Mode::Summary));
        assert_eq!(" Analysis ".parse::<Mode>(), Ok(Mode::Analysis));
        assert_eq!(
            "digest".parse::<Mode>(),
            Err(ParseModeError("digest".to_string()))
        );
        assert_eq!(Mode::Summary.to_string(), "summary");
    }

    #[test]
    fn test_plain_paragraphs() {
        assert_eq!(
            analysis("First line\nsecond line\n\n\nNext"),
            "<p>First line\nsecond line</p>\n<p>Next</p>"
        );
    }

    #[test]
    fn test_crlf_input() {
        assert_eq!(analysis("# T\r\n\r\nbody\r\n"), "<h2>T</h2>\n<p>body</p>");
    }

    #[test]
    fn test_headings_collapse_levels() {
        assert_eq!(
            analysis("# A\n## B\n### C"),
            "<h2>A</h2>\n<h3>B</h3>\n<h3>C</h3>"
        );
    }

    #[test]
    fn test_fact_check_pair() {
        assert_eq!(
            analysis("**Claim:** Sky is green.\n\n**Verdict:** This is false."),
            "<div class=\"fact-check\"><span class=\"claim\">Claim:</span> Sky is green.</div>\n\
             <div><span class=\"claim\">Verdict:</span> <span class=\"false\">This is false.</span></div>"
        );
    }

    #[test]
    fn test_emphasis_inside_fact_check() {
        assert_eq!(
            analysis("**Claim:** the *moon* is **cheese**"),
            "<div class=\"fact-check\"><span class=\"claim\">Claim:</span> the <em>moon</em> is <strong>cheese</strong></div>"
        );
    }

    #[test]
    fn test_summary_document() {
        let input = "Key Points:\n* Growth slowed [1]\n* Costs rose [2]\n\nSee the [report](example.com/r).";
        assert_eq!(
            summary(input),
            "<h3>Key Points:</h3>\n\
             <ul><li>Growth slowed <span class=\"citation\">[1]</span></li>\n\
             <li>Costs rose <span class=\"citation\">[2]</span></li></ul>\n\
             <p>See the <a href=\"https://example.com/r\" target=\"_blank\" rel=\"noopener\">report</a>.</p>"
        );
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            analysis("> quoted *words*"),
            "<blockquote>quoted <em>words</em></blockquote>"
        );
    }

    #[test]
    fn test_text_after_list_is_own_paragraph() {
        assert_eq!(
            analysis("* a\nafter"),
            "<ul><li>a</li></ul>\n<p>after</p>"
        );
    }
}
