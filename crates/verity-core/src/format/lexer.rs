//! Block scanner for analysis text.
//!
//! Handles:
//! - Fact-check markers (`**Claim:**`, `**Verdict:**`, `**Rating:**`), which may
//!   start anywhere in a line and span several lines
//! - Headings (`# `, `## `, `### `)
//! - List items (`* `, `- `, `1. `)
//! - Blockquotes (`> `)
//! - Key-point headings (summary mode only)
//!
//! Every token carries the byte range of the source it was read from.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::Mode;
use crate::config::{CLAIM_LABELS, KEY_POINT_HEADINGS, VERDICT_LABELS};

static KEY_POINTS: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives = KEY_POINT_HEADINGS
        .iter()
        .map(|heading| regex::escape(heading))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i)^(?:{alternatives}):?$")).expect("key point pattern is valid")
});

// =============================================================================
// Token Types
// =============================================================================

/// Block-level tokens produced by the lexer
#[derive(Debug, Clone, PartialEq)]
pub enum Token<'a> {
    /// `# text` (level 2) or `## text` / `### text` (level 3)
    Heading { level: u8, text: &'a str },
    /// Bullet or numbered list item
    ListItem(&'a str),
    /// `> text`
    Blockquote(&'a str),
    /// Standalone "Key Points" style line
    KeyPoints(&'a str),
    /// Claim body, trimmed
    Claim(&'a str),
    /// Verdict or rating body, trimmed, with the label as written
    Verdict { label: &'a str, body: &'a str },
    /// Any other non-blank line
    Text(&'a str),
    /// Empty or whitespace-only line
    Blank,
}

/// A token with the source range it covers
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<'a> {
    pub token: Token<'a>,
    pub span: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerKind {
    Claim,
    Verdict,
}

/// A parsed `**Label:**` marker
struct Marker<'a> {
    kind: MarkerKind,
    label: &'a str,
    len: usize,
}

// =============================================================================
// Lexer
// =============================================================================

/// Lexer splitting analysis text into block tokens
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    mode: Mode,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(input: &'a str, mode: Mode) -> Self {
        Self {
            input,
            pos: 0,
            mode,
        }
    }

    /// Tokenize the entire input into a vector
    #[cfg(test)]
    pub fn tokenize(self) -> Vec<Token<'a>> {
        self.map(|spanned| spanned.token).collect()
    }

    fn read_line(&mut self) -> Spanned<'a> {
        let input = self.input;
        let start = self.pos;
        let rest = &input[start..];
        let line_end = rest.find('\n').unwrap_or(rest.len());
        let line = &rest[..line_end];

        // A fact-check marker cuts the line short; the marker is read next
        if let Some(marker_at) = find_marker(line, |_| true) {
            let prefix = &line[..marker_at];
            self.pos = start + marker_at;
            // `- **Claim:** ...` is the fact-check alone
            if self.is_bare_list_marker(prefix)
                && let Some(marker) = parse_marker(&input[self.pos..])
            {
                return self.read_fact_check(marker);
            }
            return Spanned {
                token: self.classify(prefix),
                span: start..self.pos,
            };
        }

        self.pos = (start + line_end + 1).min(input.len());
        Spanned {
            token: self.classify(line),
            span: start..start + line_end,
        }
    }

    fn read_fact_check(&mut self, marker: Marker<'a>) -> Spanned<'a> {
        let input = self.input;
        let start = self.pos;
        let body = &input[start + marker.len..];
        let body_len = self.body_len(body, marker.kind);

        self.pos = start + marker.len + body_len;
        let text = body[..body_len].trim();
        let token = match marker.kind {
            MarkerKind::Claim => Token::Claim(text),
            MarkerKind::Verdict => Token::Verdict {
                label: marker.label,
                body: text,
            },
        };

        Spanned {
            token,
            span: start..self.pos,
        }
    }

    /// Length of a fact-check body.
    ///
    /// A body stops at a later line that opens another block, and at the first
    /// marker it yields to: claims yield to any marker, verdicts only to
    /// claims. Verdicts also stop at a blank line. Scanning ends at the first
    /// stop, so each body is read once.
    fn body_len(&self, body: &str, kind: MarkerKind) -> usize {
        let yields_to = |next: MarkerKind| kind == MarkerKind::Claim || next == MarkerKind::Claim;
        let mut offset = 0;

        for (idx, line) in body.split_inclusive('\n').enumerate() {
            let content = line.strip_suffix('\n').unwrap_or(line);
            if idx > 0 {
                let blank = content.trim().is_empty();
                if (blank && kind == MarkerKind::Verdict) || self.opens_block(content) {
                    return offset;
                }
            }
            if let Some(at) = find_marker(content, yields_to) {
                return offset + at;
            }
            offset += line.len();
        }
        body.len()
    }

    /// Whether `line` starts a heading, list item, blockquote or key-point line.
    fn opens_block(&self, line: &str) -> bool {
        matches!(
            self.classify(line),
            Token::Heading { .. } | Token::ListItem(_) | Token::Blockquote(_) | Token::KeyPoints(_)
        )
    }

    /// Whether `prefix` is a list marker with nothing after it.
    fn is_bare_list_marker(&self, prefix: &str) -> bool {
        matches!(self.classify(prefix), Token::ListItem(""))
    }

    fn classify<'s>(&self, line: &'s str) -> Token<'s> {
        if line.trim().is_empty() {
            return Token::Blank;
        }
        if let Some(text) = line
            .strip_prefix("### ")
            .or_else(|| line.strip_prefix("## "))
        {
            return Token::Heading {
                level: 3,
                text: text.trim_end(),
            };
        }
        if let Some(text) = line.strip_prefix("# ") {
            return Token::Heading {
                level: 2,
                text: text.trim_end(),
            };
        }
        if let Some(text) = line
            .strip_prefix("* ")
            .or_else(|| line.strip_prefix("- "))
            .or_else(|| strip_ordinal(line))
        {
            return Token::ListItem(text.trim_end());
        }
        if let Some(text) = line.strip_prefix("> ") {
            return Token::Blockquote(text.trim_end());
        }
        let trimmed = line.trim_end();
        if self.mode == Mode::Summary && KEY_POINTS.is_match(trimmed) {
            return Token::KeyPoints(trimmed);
        }
        Token::Text(line)
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Spanned<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.input;
        if self.pos >= input.len() {
            return None;
        }
        match parse_marker(&input[self.pos..]) {
            Some(marker) => Some(self.read_fact_check(marker)),
            None => Some(self.read_line()),
        }
    }
}

// =============================================================================
// Scanning Helpers
// =============================================================================

/// Parse a fact-check marker at the start of `input`.
fn parse_marker(input: &str) -> Option<Marker<'_>> {
    let rest = input.strip_prefix("**")?;
    let candidates = CLAIM_LABELS
        .iter()
        .map(|name| (MarkerKind::Claim, name))
        .chain(VERDICT_LABELS.iter().map(|name| (MarkerKind::Verdict, name)));

    for (kind, name) in candidates {
        let Some(label) = rest.get(..name.len()) else {
            continue;
        };
        if label.eq_ignore_ascii_case(name) && rest[name.len()..].starts_with(":**") {
            return Some(Marker {
                kind,
                label,
                len: name.len() + 5,
            });
        }
    }
    None
}

/// Byte offset of the first marker in `input` whose kind is accepted.
fn find_marker(input: &str, accept: impl Fn(MarkerKind) -> bool) -> Option<usize> {
    let mut from = 0;
    while let Some(offset) = input[from..].find("**") {
        let idx = from + offset;
        if let Some(marker) = parse_marker(&input[idx..])
            && accept(marker.kind)
        {
            return Some(idx);
        }
        from = idx + 1;
    }
    None
}

/// Strip a `N. ` ordinal prefix.
fn strip_ordinal(line: &str) -> Option<&str> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    line[digits..].strip_prefix(". ")
}

// =============================================================================
// Tests
// =============================================================================
