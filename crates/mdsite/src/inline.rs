//! Inline span splitting.
//!
//! Inline Markdown is tokenized by a fixed chain of passes. Each pass takes
//! the whole span sequence, splits every untagged text leaf on its own
//! marker, and hands the rebuilt sequence to the next pass. Leaves that an
//! earlier pass already tagged are passed through untouched.
//!
//! The order is part of the output contract: newline, bold, italic, link,
//! code, image. A backtick span containing `[x](y)` is therefore link-split
//! before the code pass sees it.

use mdsite_core::HtmlNode;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// A single inline pass over a span sequence
pub type Pass = fn(Vec<HtmlNode>) -> Vec<HtmlNode>;

/// All inline passes, in application order
pub const PASSES: [Pass; 6] = [
    split_newlines,
    split_bold,
    split_italic,
    split_links,
    split_code,
    split_images,
];

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*[^*]+\*\*|__[^_]+__").unwrap());

static ITALIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*[^*]+\*|_[^_]+_").unwrap());

/// `[text](url)`, optionally preceded by the `!` of an image
static LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(!?)\[([^\]]+)\]\(([^)]+)\)").unwrap());

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap());

/// Split a run of inline Markdown into a sequence of leaves
pub fn text_to_spans(text: &str) -> Vec<HtmlNode> {
    PASSES
        .iter()
        .fold(vec![HtmlNode::text(text)], |spans, pass| pass(spans))
}

/// Split text leaves on `\n`, putting a `<br>` leaf between the pieces.
///
/// Empty pieces produce no leaf, so `"a\n\nb"` becomes `a`, `br`, `br`, `b`.
pub fn split_newlines(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_text() {
            result.push(node);
            continue;
        }
        let text = node.value().unwrap_or_default();
        if text.is_empty() {
            continue;
        }
        if !text.contains('\n') {
            result.push(node);
            continue;
        }

        let mut pieces = text.split('\n').peekable();
        while let Some(piece) = pieces.next() {
            if !piece.is_empty() {
                result.push(HtmlNode::text(piece));
            }
            if pieces.peek().is_some() {
                result.push(HtmlNode::line_break());
            }
        }
    }

    result
}

/// `**bold**` and `__bold__` become `<b>` leaves
pub fn split_bold(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    split_with(nodes, |text| {
        regex_tokens(&BOLD_RE, text, |caps| {
            let marked = &caps[0];
            Some(HtmlNode::leaf("b", &marked[2..marked.len() - 2]))
        })
    })
}

/// `*italic*` and `_italic_` become `<i>` leaves
pub fn split_italic(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    split_with(nodes, |text| {
        regex_tokens(&ITALIC_RE, text, |caps| {
            let marked = &caps[0];
            Some(HtmlNode::leaf("i", &marked[1..marked.len() - 1]))
        })
    })
}

/// `[text](url)` becomes an `<a href>` leaf.
///
/// Image syntax `![alt](url)` is left in place for [`split_images`].
pub fn split_links(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    split_with(nodes, |text| {
        regex_tokens(&LINK_RE, text, |caps| {
            if !caps[1].is_empty() {
                return None;
            }
            Some(HtmlNode::leaf_with_attrs(
                "a",
                &caps[2],
                [("href", &caps[3])],
            ))
        })
    })
}

/// Backtick-delimited spans become `<code>` leaves.
///
/// The closing run must have the same length as the opening one.
pub fn split_code(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    split_with(nodes, find_code_spans)
}

/// `![alt](url)` becomes an `<img>` leaf
pub fn split_images(nodes: Vec<HtmlNode>) -> Vec<HtmlNode> {
    split_with(nodes, |text| {
        regex_tokens(&IMAGE_RE, text, |caps| {
            Some(HtmlNode::image(&caps[2], &caps[1]))
        })
    })
}

/// A marker found inside a text leaf, with the byte range it covers
struct Token {
    start: usize,
    end: usize,
    node: HtmlNode,
}

/// Rebuild the sequence, replacing each text leaf by the text around its
/// tokens plus the tokens themselves
fn split_with<F>(nodes: Vec<HtmlNode>, mut find: F) -> Vec<HtmlNode>
where
    F: FnMut(&str) -> Vec<Token>,
{
    let mut result = Vec::with_capacity(nodes.len());

    for node in nodes {
        if !node.is_text() {
            result.push(node);
            continue;
        }
        let text = node.value().unwrap_or_default();
        let tokens = find(text);
        if tokens.is_empty() {
            result.push(node);
            continue;
        }

        let mut last = 0;
        for token in tokens {
            if token.start > last {
                result.push(HtmlNode::text(&text[last..token.start]));
            }
            result.push(token.node);
            last = token.end;
        }
        if last < text.len() {
            result.push(HtmlNode::text(&text[last..]));
        }
    }

    result
}

/// Collect non-overlapping regex matches. Matches for which `build` returns
/// `None` stay part of the surrounding text.
fn regex_tokens<F>(re: &Regex, text: &str, build: F) -> Vec<Token>
where
    F: Fn(&Captures) -> Option<HtmlNode>,
{
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            build(&caps).map(|node| Token {
                start: whole.start(),
                end: whole.end(),
                node,
            })
        })
        .collect()
}

fn find_code_spans(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(offset) = text[pos..].find('`') {
        let start = pos + offset;
        match code_span_at(text, start) {
            Some((end, inner)) => {
                tokens.push(Token {
                    start,
                    end,
                    node: HtmlNode::leaf("code", inner),
                });
                pos = end;
            }
            None => pos = start + 1,
        }
    }

    tokens
}

/// Match a code span starting at `start`, preferring the longest opening
/// run. The inner text is non-empty, contains no newline and is as short as
/// possible. Returns the end offset and the inner text.
fn code_span_at(text: &str, start: usize) -> Option<(usize, &str)> {
    let run = text[start..].bytes().take_while(|&b| b == b'`').count();

    for len in (1..=run).rev() {
        let fence = &text[start..start + len];
        let inner_start = start + len;

        for (offset, ch) in text[inner_start..].char_indices() {
            if ch == '\n' {
                break;
            }
            let inner_end = inner_start + offset + ch.len_utf8();
            if text[inner_end..].starts_with(fence) {
                return Some((inner_end + len, &text[inner_start..inner_end]));
            }
        }
    }

    None
}
