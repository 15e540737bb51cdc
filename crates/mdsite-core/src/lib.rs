//! mdsite-core - HTML node tree and serialization
//!
//! This crate provides the HTML tree produced by the Markdown converter in
//! `mdsite`, together with its serialization to markup text.
//!
//! # Architecture
//!
//! ```text
//! Markdown ──blocks + spans──▶ ┌──────────┐
//!                              │ HtmlNode │ ──▶ HTML String
//!                              └──────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use mdsite_core::{to_html, HtmlNode};
//!
//! let tree = HtmlNode::container(
//!     "div",
//!     vec![
//!         HtmlNode::container("h1", vec![HtmlNode::text("Hello World")]),
//!         HtmlNode::container(
//!             "p",
//!             vec![
//!                 HtmlNode::text("This is "),
//!                 HtmlNode::leaf("b", "bold"),
//!                 HtmlNode::text(" text."),
//!             ],
//!         ),
//!     ],
//! );
//!
//! let html = to_html(&tree).unwrap();
//! assert_eq!(html, "<div><h1>Hello World</h1><p>This is <b>bold</b> text.</p></div>");
//! ```

mod node;
mod serialize;

pub use node::{Attributes, HtmlNode, IMAGE_TAG, LINE_BREAK_TAG};
pub use serialize::to_html;

/// Error raised when a node cannot be rendered to markup
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("container node has no tag")]
    MissingTag,

    #[error("<{tag}> leaf node has no value")]
    MissingValue { tag: String },
}

pub type Result<T> = std::result::Result<T, NodeError>;
