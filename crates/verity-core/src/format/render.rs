//! Block assembly and HTML emission.
//!
//! Groups lexer tokens into block nodes (paragraphs, lists, headings,
//! blockquotes, fact-check blocks) and writes each node exactly once.
//! Paragraph wrapping is decided per node, so block elements never end up
//! inside `<p>`.

use tracing::trace;

use super::escape::push_escaped;
use super::inline::{InlineRules, render_inline};
use super::lexer::{Spanned, Token};
use super::verdict::VerdictClass;

/// Block nodes in output order
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Block<'a> {
    Heading { level: u8, text: &'a str },
    List(Vec<&'a str>),
    Blockquote(&'a str),
    Claim(&'a str),
    Verdict { label: &'a str, body: &'a str },
    Paragraph(Vec<&'a str>),
}

/// Group block tokens into nodes.
///
/// Consecutive text lines form one paragraph. List items stay in one list
/// across blank lines until some other construct appears.
pub(crate) fn assemble<'a>(tokens: impl IntoIterator<Item = Spanned<'a>>) -> Vec<Block<'a>> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&'a str> = Vec::new();
    let mut list: Vec<&'a str> = Vec::new();

    fn flush<'a, T>(blocks: &mut Vec<Block<'a>>, pending: &mut Vec<T>, wrap: fn(Vec<T>) -> Block<'a>) {
        if !pending.is_empty() {
            blocks.push(wrap(std::mem::take(pending)));
        }
    }

    for Spanned { token, span } in tokens {
        trace!(start = span.start, end = span.end, ?token, "block token");
        let block = match token {
            Token::Text(line) => {
                flush(&mut blocks, &mut list, Block::List);
                paragraph.push(line);
                continue;
            }
            Token::ListItem(item) => {
                flush(&mut blocks, &mut paragraph, Block::Paragraph);
                list.push(item);
                continue;
            }
            Token::Blank => {
                flush(&mut blocks, &mut paragraph, Block::Paragraph);
                continue;
            }
            Token::Heading { level, text } => Block::Heading { level, text },
            Token::KeyPoints(text) => Block::Heading { level: 3, text },
            Token::Blockquote(text) => Block::Blockquote(text),
            Token::Claim(body) => Block::Claim(body),
            Token::Verdict { label, body } => Block::Verdict { label, body },
        };
        flush(&mut blocks, &mut paragraph, Block::Paragraph);
        flush(&mut blocks, &mut list, Block::List);
        blocks.push(block);
    }
    flush(&mut blocks, &mut paragraph, Block::Paragraph);
    flush(&mut blocks, &mut list, Block::List);

    blocks
}

/// Emit HTML for assembled blocks, one block per line.
pub(crate) fn render_blocks(blocks: &[Block<'_>], rules: InlineRules) -> String {
    let mut out = String::new();

    for block in blocks {
        if !out.is_empty() {
            out.push('\n');
        }
        match block {
            Block::Heading { level, text } => {
                out.push_str(&format!("<h{level}>"));
                render_inline(&mut out, text, rules);
                out.push_str(&format!("</h{level}>"));
            }
            Block::List(items) => {
                out.push_str("<ul>");
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        out.push('\n');
                    }
                    out.push_str("<li>");
                    render_inline(&mut out, item, rules);
                    out.push_str("</li>");
                }
                out.push_str("</ul>");
            }
            Block::Blockquote(text) => {
                out.push_str("<blockquote>");
                render_inline(&mut out, text, rules);
                out.push_str("</blockquote>");
            }
            Block::Claim(body) => {
                out.push_str("<div class=\"fact-check\"><span class=\"claim\">Claim:</span> ");
                render_inline(&mut out, body, rules);
                out.push_str("</div>");
            }
            Block::Verdict { label, body } => {
                let class = VerdictClass::classify(body);
                out.push_str("<div><span class=\"claim\">");
                push_escaped(&mut out, label);
                out.push_str(":</span> <span class=\"");
                out.push_str(class.css_class());
                out.push_str("\">");
                render_inline(&mut out, body, rules);
                out.push_str("</span></div>");
            }
            Block::Paragraph(lines) => {
                out.push_str("<p>");
                render_inline(&mut out, lines.join("\n").trim(), rules);
                out.push_str("</p>");
            }
        }
    }

    out
}
