//! Block segmentation.
//!
//! Lines are scanned top to bottom. Each line is classified by its leading
//! marker; headings, quotes, lists and code fences consume their lines
//! directly, every other non-blank line is collected into the paragraph
//! being built until a blank line or another block interrupts it.

use mdsite_core::HtmlNode;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::inline::text_to_spans;

const HEADING_MARKER: char = '#';
const QUOTE_MARKER: char = '>';
const UNORDERED_MARKER: &str = "- ";
const CODE_FENCE: &str = "```";

static ORDERED_ITEM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*(.*)").unwrap());

/// Kind of block a line opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// `#` heading, with the number of leading `#` as level
    Heading(usize),
    Quote,
    UnorderedList,
    OrderedList,
    CodeFence,
    Blank,
    /// Any other line; continues the current paragraph
    Paragraph,
}

/// Classify a line by its leading marker.
///
/// Checks run in a fixed priority: heading, quote, unordered list, ordered
/// list, blank line, code fence, paragraph.
pub fn classify_line(line: &str) -> BlockKind {
    if line.starts_with(HEADING_MARKER) {
        let level = line.len() - line.trim_start_matches(HEADING_MARKER).len();
        BlockKind::Heading(level)
    } else if line.starts_with(QUOTE_MARKER) {
        BlockKind::Quote
    } else if line.starts_with(UNORDERED_MARKER) {
        BlockKind::UnorderedList
    } else if ORDERED_ITEM_RE.is_match(line) {
        BlockKind::OrderedList
    } else if line.trim().is_empty() {
        BlockKind::Blank
    } else if line.starts_with(CODE_FENCE) {
        BlockKind::CodeFence
    } else {
        BlockKind::Paragraph
    }
}

/// Split a Markdown document into block nodes
pub fn markdown_to_blocks(markdown: &str) -> Vec<HtmlNode> {
    let lines: Vec<&str> = markdown.split('\n').collect();
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];
        let kind = classify_line(line);
        if kind != BlockKind::Paragraph {
            flush_paragraph(&mut paragraph, &mut blocks);
        }

        match kind {
            BlockKind::Heading(level) => {
                blocks.push(heading_block(level, line));
                i += 1;
            }
            BlockKind::Quote => {
                let len = run_length(&lines[i..], |l| l.starts_with(QUOTE_MARKER));
                blocks.push(quote_block(&lines[i..i + len]));
                i += len;
            }
            BlockKind::UnorderedList => {
                let len = run_length(&lines[i..], |l| l.starts_with(UNORDERED_MARKER));
                let items = lines[i..i + len]
                    .iter()
                    .map(|l| l[UNORDERED_MARKER.len()..].trim());
                blocks.push(list_block("ul", items));
                i += len;
            }
            BlockKind::OrderedList => {
                let len = run_length(&lines[i..], |l| ORDERED_ITEM_RE.is_match(l));
                let items = lines[i..i + len].iter().map(|l| ordered_item_text(l));
                blocks.push(list_block("ol", items));
                i += len;
            }
            BlockKind::Blank => i += 1,
            BlockKind::CodeFence => {
                let body = &lines[i + 1..];
                let len = body
                    .iter()
                    .position(|l| l.starts_with(CODE_FENCE))
                    .unwrap_or(body.len());
                blocks.push(code_block(&body[..len]));
                // Opening fence, body, closing fence
                i += len + 2;
            }
            BlockKind::Paragraph => {
                paragraph.push(line);
                i += 1;
            }
        }
    }

    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

/// Emit the pending paragraph, if any. Lines are joined without separator.
fn flush_paragraph(paragraph: &mut Vec<&str>, blocks: &mut Vec<HtmlNode>) {
    if paragraph.is_empty() {
        return;
    }
    let text = paragraph.concat();
    paragraph.clear();
    blocks.push(HtmlNode::container("p", text_to_spans(&text)));
}

fn run_length<F>(lines: &[&str], belongs: F) -> usize
where
    F: Fn(&str) -> bool,
{
    lines.iter().take_while(|&&l| belongs(l)).count()
}

fn heading_block(level: usize, line: &str) -> HtmlNode {
    let text = line.trim_start_matches(HEADING_MARKER).trim();
    HtmlNode::container(format!("h{}", level), text_to_spans(text))
}

/// Quote lines lose their first `>` and are joined with single spaces
fn quote_block(lines: &[&str]) -> HtmlNode {
    let text = lines
        .iter()
        .map(|l| l[QUOTE_MARKER.len_utf8()..].trim())
        .collect::<Vec<_>>()
        .join(" ");
    HtmlNode::container("blockquote", text_to_spans(&text))
}

fn ordered_item_text(line: &str) -> &str {
    ORDERED_ITEM_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_default()
}

fn list_block<'a>(tag: &str, items: impl Iterator<Item = &'a str>) -> HtmlNode {
    let items = items
        .map(|text| HtmlNode::container("li", text_to_spans(text)))
        .collect();
    HtmlNode::container(tag, items)
}

/// Fenced code keeps its lines verbatim, no inline splitting
fn code_block(lines: &[&str]) -> HtmlNode {
    HtmlNode::container("pre", vec![HtmlNode::leaf("code", lines.join("\n"))])
}
