use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use verity_core::{AnalysisResponse, Mode, ResponseError, escape_html, format_content};

fn is_special(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"' | '\'')
}

#[test]
fn test_script_tags_are_escaped() {
    let inputs = [
        "<script>alert(1)</script>",
        "https://evil.com/<script>alert(1)</script>",
        "[click](<script>)",
        "**<script>**",
        "# <script>x</script>",
        "* <script>",
        "**Claim:** <script>\n\n**Verdict:** <script>true</script>",
    ];
    for input in inputs {
        for mode in [Mode::Summary, Mode::Analysis] {
            let html = format_content(Some(input), mode);
            assert!(!html.contains("<script"), "{input:?} rendered {html:?}");
        }
    }
}

#[test]
fn test_empty_and_absent_input() {
    assert_eq!(format_content(Some(""), Mode::Summary), "");
    assert_eq!(format_content(None, Mode::Analysis), "");
}

#[test]
fn test_heading_levels() {
    for mode in [Mode::Summary, Mode::Analysis] {
        assert!(format_content(Some("# Title"), mode).contains("<h2>Title</h2>"));
        for input in ["## Title", "### Title"] {
            let html = format_content(Some(input), mode);
            assert!(html.contains("<h3>Title</h3>"));
            assert!(!html.contains("<h2>"));
        }
    }
}

#[test]
fn test_bullets_form_single_list() {
    let html = format_content(Some("* a\n* b"), Mode::Analysis);
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 2);
    assert_eq!(html, "<ul><li>a</li>\n<li>b</li></ul>");
}

#[test]
fn test_numbered_and_bulleted_items_share_a_list() {
    let html = format_content(Some("1. one\n2. two\n- three"), Mode::Summary);
    assert_eq!(html, "<ul><li>one</li>\n<li>two</li>\n<li>three</li></ul>");
    assert!(!html.contains("<ol>"));
}

#[test]
fn test_fact_check_verdict_class() {
    let html = format_content(
        Some("**Claim:** Sky is green.\n\n**Verdict:** This is false."),
        Mode::Analysis,
    );
    assert!(html.contains("<div class=\"fact-check\"><span class=\"claim\">Claim:</span> Sky is green.</div>"));
    assert!(html.contains("<span class=\"false\">This is false.</span>"));
}

#[test]
fn test_fact_check_series() {
    let input = "\
**Claim:** Vaccines contain microchips.
**Rating:** Inaccurate
**Claim:** Unemployment fell in March.
**Verdict:** Mostly accurate

**Claim:** The bridge cost $2B.
**Verdict:** Partially correct; final cost was $1.6B.

**Claim:** Aliens built it.
**Verdict:** No evidence either way.";

    let html = format_content(Some(input), Mode::Analysis);
    assert_eq!(html.matches("class=\"fact-check\"").count(), 4);
    assert_eq!(html.matches("<span class=\"true\">").count(), 2);
    assert!(html.contains("<span class=\"misleading\">Partially correct; final cost was $1.6B.</span>"));
    assert!(html.contains("<span class=\"uncertain\">No evidence either way.</span>"));
    assert!(html.contains("<span class=\"claim\">Rating:</span>"));
    assert!(!html.contains("<p>"));
}

#[test]
fn test_bulleted_fact_check_list() {
    let expected = "<div class=\"fact-check\"><span class=\"claim\">Claim:</span> Sky is green.</div>\n\
                    <div><span class=\"claim\">Verdict:</span> <span class=\"false\">False</span></div>";
    for input in [
        "- **Claim:** Sky is green.\n- **Verdict:** False",
        "* **Claim:** Sky is green.\n* **Verdict:** False",
        "1. **Claim:** Sky is green.\n2. **Verdict:** False",
    ] {
        assert_eq!(format_content(Some(input), Mode::Analysis), expected);
    }
}

#[test]
fn test_blocks_after_unanswered_claim() {
    let html = format_content(
        Some("**Claim:** x\n\n## Conclusion\n* item one\n* item two"),
        Mode::Analysis,
    );
    assert_eq!(
        html,
        "<div class=\"fact-check\"><span class=\"claim\">Claim:</span> x</div>\n\
         <h3>Conclusion</h3>\n\
         <ul><li>item one</li>\n<li>item two</li></ul>"
    );
}

#[test]
fn test_large_inputs_format_in_linear_time() {
    let inputs = [
        "http://".repeat(40_000),
        "**Verdict:** x\n\n".repeat(20_000),
        "- **Claim:** a\n".repeat(20_000),
        "[".repeat(200_000),
        "[x](".repeat(50_000),
        "*a".repeat(100_000),
        "**a *b ".repeat(30_000),
    ];
    for input in &inputs {
        for mode in [Mode::Summary, Mode::Analysis] {
            let started = Instant::now();
            let html = format_content(Some(input), mode);
            let elapsed = started.elapsed();
            assert!(!html.is_empty());
            assert!(
                elapsed < Duration::from_secs(3),
                "{} bytes starting {:?} took {elapsed:?}",
                input.len(),
                &input[..16]
            );
        }
    }
}

#[test]
fn test_citations_only_in_summary() {
    let summary = format_content(Some("See [1] and [2]"), Mode::Summary);
    assert_eq!(
        summary,
        "<p>See <span class=\"citation\">[1]</span> and <span class=\"citation\">[2]</span></p>"
    );

    let analysis = format_content(Some("See [1] and [2]"), Mode::Analysis);
    assert_eq!(analysis, "<p>See [1] and [2]</p>");
}

#[test]
fn test_markdown_link_scheme_is_prefixed() {
    let html = format_content(Some("[site](example.com)"), Mode::Analysis);
    assert!(html.contains("<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener\">site</a>"));
}

#[test]
fn test_markdown_link_with_absolute_url_is_single_anchor() {
    let html = format_content(Some("Read [the study](https://example.org/paper.pdf)."), Mode::Summary);
    assert_eq!(
        html,
        "<p>Read <a href=\"https://example.org/paper.pdf\" target=\"_blank\" rel=\"noopener\">the study</a>.</p>"
    );
}

#[test]
fn test_block_elements_are_never_wrapped() {
    let input = "intro\n# H\n> q\n* item\n**Claim:** c\n**Verdict:** true\ntail";
    let html = format_content(Some(input), Mode::Summary);
    for tag in ["<p><h", "<p><ul", "<p><blockquote", "<p><div", "</ul></p>", "</div></p>"] {
        assert!(!html.contains(tag), "found {tag} in {html}");
    }
}

#[test]
fn test_full_summary_document() {
    let input = "\
# Overview

The video argues that **remote work** boosts output [1].

Key Takeaways:
* Productivity rose *slightly* [2]
* Commutes fell

> \"Work is what you do, not where you go.\"

Source: https://example.com/report?id=7&v=2";

    let html = format_content(Some(input), Mode::Summary);
    assert_eq!(
        html,
        "<h2>Overview</h2>\n\
         <p>The video argues that <strong>remote work</strong> boosts output <span class=\"citation\">[1]</span>.</p>\n\
         <h3>Key Takeaways:</h3>\n\
         <ul><li>Productivity rose <em>slightly</em> <span class=\"citation\">[2]</span></li>\n\
         <li>Commutes fell</li></ul>\n\
         <blockquote>&quot;Work is what you do, not where you go.&quot;</blockquote>\n\
         <p>Source: <a href=\"https://example.com/report?id=7&amp;v=2\" target=\"_blank\" rel=\"noopener\">https://example.com/report?id=7&amp;v=2</a></p>"
    );
}

#[test]
fn test_response_round_trip_through_render() {
    let json = r#"{
        "content_type": "article",
        "metadata": {"title": "Budget & Beyond", "source": "Daily News", "publication_date": "2024-03-01"},
        "summary": "Key Points\n- Deficit shrank [1]",
        "critical_analysis": "**Claim:** Taxes doubled.\n**Verdict:** False",
        "source_url": "https://news.example.com/budget"
    }"#;
    let rendered = AnalysisResponse::from_json(json).unwrap().render().unwrap();
    assert!(rendered.metadata_html.contains("Budget &amp; Beyond"));
    assert!(rendered.metadata_html.contains("Published:</span> 2024-03-01"));
    assert!(rendered.summary_html.starts_with("<h3>Key Points</h3>"));
    assert!(rendered.analysis_html.contains("<span class=\"false\">False</span>"));
    assert!(rendered.to_html().contains("id=\"source-link\""));
}

#[test]
fn test_transcript_error_is_surfaced() {
    let response = AnalysisResponse::from_json(
        r#"{"error": "Error retrieving transcript: disabled", "summary": "ignored"}"#,
    )
    .unwrap();
    let err = response.render().unwrap_err();
    assert!(matches!(err, ResponseError::TranscriptUnavailable(_)));
    assert_eq!(err.to_string(), "Error retrieving transcript: disabled");
}

proptest! {
    #[test]
    fn prop_escape_is_total_and_single(input in any::<String>()) {
        let escaped = escape_html(&input);
        let specials = input.chars().filter(|&c| is_special(c)).count();
        prop_assert_eq!(escaped.matches('&').count(), specials);
        prop_assert!(!escaped.contains(['<', '>', '"', '\'']));
    }

    #[test]
    fn prop_plain_text_escaped_exactly_once(input in "x[a-z &<>\"']{0,80}") {
        let html = format_content(Some(&input), Mode::Analysis);
        let specials = input.chars().filter(|&c| is_special(c)).count();
        prop_assert_eq!(html.matches('&').count(), specials);
        prop_assert_eq!(html, format!("<p>{}</p>", escape_html(input.trim())));
    }

    #[test]
    fn prop_never_emits_raw_script(input in "[ -~\n]{0,200}", summary in any::<bool>()) {
        let mode = if summary { Mode::Summary } else { Mode::Analysis };
        let html = format_content(Some(&input), mode);
        prop_assert!(!html.contains("<script"));
        prop_assert!(!html.contains("<p><ul"));
        prop_assert!(!html.contains("<p><div"));
    }
}
