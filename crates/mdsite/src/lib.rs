//! # mdsite
//!
//! Convert a directory tree of Markdown documents into static HTML pages.
//!
//! ## Design
//!
//! Conversion is a pure function of the input text:
//!
//! - **Blocks**: lines are grouped into headings, quotes, lists, code fences
//!   and paragraphs ([`block`])
//! - **Spans**: the text of each block is split into bold, italic, link,
//!   code, image and line-break leaves by a fixed chain of passes ([`inline`])
//! - **Assembly**: blocks are wrapped in a single `<div>` and serialized
//!   with [`mdsite_core`]
//!
//! The [`Site`] driver walks a content directory, renders each page into an
//! HTML [`Template`] and copies static assets next to the output.
//!
//! ## Example
//!
//! ```rust
//! let html = mdsite::markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(html, "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>");
//! ```

use std::path::PathBuf;

pub mod block;
pub mod inline;
mod options;
mod site;
mod template;
mod title;

pub use mdsite_core::{HtmlNode, NodeError};
pub use options::{SiteOptions, DEFAULT_CONFIG_FILE};
pub use site::{
    clean_output, copy_static, generate_page, generate_pages_recursive, BuildReport, Site,
};
pub use template::{Template, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
pub use title::extract_title;

/// Error type for mdsite operations
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("malformed HTML tree: {0}")]
    Structural(#[from] NodeError),

    #[error("no `# ` title line found")]
    TitleNotFound,

    #[error("no `# ` title line found in {}", path.display())]
    MissingTitle { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("invalid config file {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// Convert Markdown text to an HTML node tree rooted at a `<div>`
pub fn markdown_to_html_node(markdown: &str) -> HtmlNode {
    HtmlNode::container("div", block::markdown_to_blocks(markdown))
}

/// Convert Markdown text to an HTML fragment
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown).to_html()?)
}
