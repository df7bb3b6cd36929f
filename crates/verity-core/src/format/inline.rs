//! Inline tokenizer and renderer.
//!
//! Handles:
//! - Markdown links `[text](url)`, matched as a unit before bare URLs
//! - Bare `http(s)://` URLs
//! - Strong `**text**` and emphasis `*text*` (single line, non-empty)
//! - Citation markers `[n]` (summary mode only)
//!
//! Anything else is plain text and is escaped when rendered.

use super::escape::push_escaped;
use crate::config::{LINK_REL, LINK_TARGET};
use crate::utils::normalize_link_url;

// =============================================================================
// Token Types
// =============================================================================

/// Inline tokens produced by [`InlineLexer`]
#[derive(Debug, Clone, PartialEq)]
pub enum Inline<'a> {
    /// Literal text
    Text(&'a str),
    /// `[label](url)`
    Link { label: &'a str, url: &'a str },
    /// Bare URL
    AutoLink(&'a str),
    /// `**content**`
    Strong(&'a str),
    /// `*content*`
    Emphasis(&'a str),
    /// Digits of a `[n]` marker
    Citation(&'a str),
}

/// Constructs the inline lexer may recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineRules {
    pub links: bool,
    pub strong: bool,
    pub emphasis: bool,
    pub citations: bool,
}

impl InlineRules {
    /// Rules for top-level text.
    pub fn new(citations: bool) -> Self {
        Self {
            links: true,
            strong: true,
            emphasis: true,
            citations,
        }
    }

    fn inside_link(self) -> Self {
        Self {
            links: false,
            ..self
        }
    }

    fn inside_strong(self) -> Self {
        Self {
            strong: false,
            ..self
        }
    }

    fn inside_emphasis(self) -> Self {
        Self {
            strong: false,
            emphasis: false,
            ..self
        }
    }
}

// =============================================================================
// Lexer
// =============================================================================

/// Lexer splitting a block body into inline tokens
///
/// Every byte is visited a bounded number of times: closing-delimiter
/// searches are memoized and a rejected bare URL is not rescanned from
/// inside its own run.
pub struct InlineLexer<'a> {
    input: &'a str,
    pos: usize,
    rules: InlineRules,
    pending: Option<(Inline<'a>, usize)>,
    close_bracket: NextByte,
    close_paren: NextByte,
    newline: NextByte,
    /// No bare URL starts before this offset
    autolink_from: usize,
}

impl<'a> InlineLexer<'a> {
    pub fn new(input: &'a str, rules: InlineRules) -> Self {
        Self {
            input,
            pos: 0,
            rules,
            pending: None,
            close_bracket: NextByte::new(b']'),
            close_paren: NextByte::new(b')'),
            newline: NextByte::new(b'\n'),
            autolink_from: 0,
        }
    }

    /// Try to read a construct starting at byte `at`; returns it with its end offset.
    ///
    /// Offsets passed in never decrease.
    fn construct_at(&mut self, at: usize) -> Option<(Inline<'a>, usize)> {
        let input = self.input;
        let rest = &input[at..];
        let parsed = match *rest.as_bytes().first()? {
            b'[' => (if self.rules.links { self.parse_link(at) } else { None })
                .or_else(|| self.rules.citations.then(|| parse_citation(rest)).flatten()),
            b'h' if self.rules.links && at >= self.autolink_from => {
                let parsed = parse_autolink(rest);
                if let Err(run_end) = parsed {
                    self.autolink_from = at + run_end;
                }
                parsed.ok()
            }
            b'*' => (self.rules.strong.then(|| parse_strong(rest)).flatten())
                .or_else(|| self.rules.emphasis.then(|| parse_emphasis(rest)).flatten()),
            _ => None,
        };
        parsed.map(|(token, len)| (token, at + len))
    }

    /// `[label](url)` on a single line, starting at byte `at`.
    fn parse_link(&mut self, at: usize) -> Option<(Inline<'a>, usize)> {
        let input = self.input;
        let line_end = self.newline.find(input, at).unwrap_or(input.len());
        let label_end = self.close_bracket.find(input, at + 1)?;
        if label_end > line_end || input.as_bytes().get(label_end + 1) != Some(&b'(') {
            return None;
        }
        let url_end = self.close_paren.find(input, label_end + 2)?;
        if url_end > line_end {
            return None;
        }

        let label = &input[at + 1..label_end];
        let url = &input[label_end + 2..url_end];
        if label.is_empty() || url.is_empty() {
            return None;
        }
        Some((Inline::Link { label, url }, url_end + 1 - at))
    }
}

impl<'a> Iterator for InlineLexer<'a> {
    type Item = Inline<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((token, end)) = self.pending.take() {
            self.pos = end;
            return Some(token);
        }

        let input = self.input;
        let start = self.pos;
        if start >= input.len() {
            return None;
        }

        for (offset, _) in input[start..].char_indices() {
            let at = start + offset;
            let Some((token, end)) = self.construct_at(at) else {
                continue;
            };
            if at == start {
                self.pos = end;
                return Some(token);
            }
            self.pending = Some((token, end));
            self.pos = at;
            return Some(Inline::Text(&input[start..at]));
        }

        self.pos = input.len();
        Some(Inline::Text(&input[start..]))
    }
}

/// Memoized forward search for one byte.
#[derive(Debug, Clone, Copy)]
struct NextByte {
    needle: u8,
    /// Last answer; `Some(None)` once the rest of the input has no match
    found: Option<Option<usize>>,
}

impl NextByte {
    fn new(needle: u8) -> Self {
        Self { needle, found: None }
    }

    /// First offset at or after `from` holding the needle. `from` must not
    /// decrease between calls.
    fn find(&mut self, haystack: &str, from: usize) -> Option<usize> {
        match self.found {
            Some(Some(idx)) if idx >= from => return Some(idx),
            Some(None) => return None,
            _ => {}
        }
        let found = haystack
            .as_bytes()
            .get(from..)?
            .iter()
            .position(|&b| b == self.needle)
            .map(|offset| from + offset);
        self.found = Some(found);
        found
    }
}

// =============================================================================
// Construct Parsers
// =============================================================================
//
// Each parser receives input starting at the trigger character and returns
// the token plus the number of bytes it consumed. Closing delimiters are
// searched for only up to the end of the line.

/// Offset of the first `*` or `*`-pair in `body`, stopping at a line break.
fn find_close(body: &str, pair: bool) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut from = 0;
    while let Some(offset) = bytes[from..].iter().position(|&b| b == b'*' || b == b'\n') {
        let idx = from + offset;
        if bytes[idx] == b'\n' {
            return None;
        }
        if !pair || bytes.get(idx + 1) == Some(&b'*') {
            return Some(idx);
        }
        from = idx + 1;
    }
    None
}

fn parse_citation(input: &str) -> Option<(Inline<'_>, usize)> {
    let rest = &input[1..];
    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || rest.as_bytes().get(digits) != Some(&b']') {
        return None;
    }
    Some((Inline::Citation(&rest[..digits]), digits + 2))
}

/// Bare URL; on rejection, returns the end of the scanned run instead.
fn parse_autolink(input: &str) -> Result<(Inline<'_>, usize), usize> {
    let Some(scheme_len) = ["https://", "http://"]
        .into_iter()
        .find(|scheme| input.starts_with(scheme))
        .map(str::len)
    else {
        return Err(1);
    };
    let tail = &input[scheme_len..];
    let run_len = tail
        .find(|c: char| c.is_whitespace() || matches!(c, '"' | '<' | '>'))
        .unwrap_or(tail.len());
    let run = &tail[..run_len];
    let len = scheme_len + run_len;

    // Needs a dot with at least one character on each side. A URL starting
    // later in the same run ends where this one does, so it fails too.
    let dotted = run
        .match_indices('.')
        .any(|(idx, _)| idx > 0 && idx + 1 < run.len());
    if !dotted {
        return Err(len);
    }
    Ok((Inline::AutoLink(&input[..len]), len))
}

fn parse_strong(input: &str) -> Option<(Inline<'_>, usize)> {
    let body = input.strip_prefix("**")?;
    let close = find_close(body, true)?;
    if close == 0 {
        return None;
    }
    Some((Inline::Strong(&body[..close]), close + 4))
}

fn parse_emphasis(input: &str) -> Option<(Inline<'_>, usize)> {
    let body = input.strip_prefix('*')?;
    let close = find_close(body, false)?;
    if close == 0 {
        return None;
    }
    Some((Inline::Emphasis(&body[..close]), close + 2))
}

// =============================================================================
// Rendering
// =============================================================================

/// Render inline content into `out`, escaping every text leaf once.
pub fn render_inline(out: &mut String, input: &str, rules: InlineRules) {
    for token in InlineLexer::new(input, rules) {
        match token {
            Inline::Text(text) => push_escaped(out, text),
            Inline::Link { label, url } => {
                open_anchor(out, &normalize_link_url(url));
                render_inline(out, label, rules.inside_link());
                out.push_str("</a>");
            }
            Inline::AutoLink(url) => {
                open_anchor(out, url);
                push_escaped(out, url);
                out.push_str("</a>");
            }
            Inline::Strong(content) => {
                out.push_str("<strong>");
                render_inline(out, content, rules.inside_strong());
                out.push_str("</strong>");
            }
            Inline::Emphasis(content) => {
                out.push_str("<em>");
                render_inline(out, content, rules.inside_emphasis());
                out.push_str("</em>");
            }
            Inline::Citation(number) => {
                out.push_str("<span class=\"citation\">[");
                out.push_str(number);
                out.push_str("]</span>");
            }
        }
    }
}

fn open_anchor(out: &mut String, href: &str) {
    out.push_str("<a href=\"");
    push_escaped(out, href);
    out.push_str("\" target=\"");
    out.push_str(LINK_TARGET);
    out.push_str("\" rel=\"");
    out.push_str(LINK_REL);
    out.push_str("\">");
}

// =============================================================================
// Tests
// =============================================================================
