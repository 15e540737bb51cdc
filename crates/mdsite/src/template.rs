//! HTML page template.

use std::fs;
use std::path::Path;

use crate::{Result, SiteError};

/// Replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Replaced by the converted page body
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// An HTML page template with title and content placeholders
#[derive(Debug, Clone)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Read a template from disk
    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(source))
    }

    /// Fill in every placeholder occurrence, title first
    pub fn render(&self, title: &str, content: &str) -> String {
        self.source
            .replace(TITLE_PLACEHOLDER, title)
            .replace(CONTENT_PLACEHOLDER, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render() {
        let template = Template::new(
            "<html><head><title>{{ Title }}</title></head><body>{{ Content }}</body></html>",
        );
        assert_eq!(
            template.render("Home", "<div><p>hi</p></div>"),
            "<html><head><title>Home</title></head><body><div><p>hi</p></div></body></html>"
        );
    }

    #[test]
    fn test_render_replaces_every_occurrence() {
        let template = Template::new("{{ Title }} | {{ Title }}");
        assert_eq!(template.render("A", ""), "A | A");
    }

    #[test]
    fn test_render_without_placeholders() {
        let template = Template::new("<p>static</p>");
        assert_eq!(template.render("A", "B"), "<p>static</p>");
    }

    #[test]
    fn test_load_missing_template() {
        let err = Template::load(Path::new("/definitely/not/here.html")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
