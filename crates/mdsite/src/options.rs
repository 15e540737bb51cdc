//! Site generation options.
//!
//! Options can be read from an optional `mdsite.toml` file; any key left out
//! keeps its default.
//!
//! ```toml
//! content = "content"
//! static = "static"
//! template = "template.html"
//! output = "public"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{Result, SiteError};

/// Default options file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "mdsite.toml";

/// Directories and files used by a site build
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteOptions {
    /// Directory holding the Markdown sources
    #[serde(rename = "content")]
    pub content_dir: PathBuf,

    /// Directory whose entries are copied verbatim into the output
    #[serde(rename = "static")]
    pub static_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template: PathBuf,

    /// Directory receiving the generated site
    #[serde(rename = "output")]
    pub output_dir: PathBuf,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            template: PathBuf::from("template.html"),
            output_dir: PathBuf::from("public"),
        }
    }
}

impl SiteOptions {
    /// Parse options from TOML text
    pub fn from_toml(source: &str, path: &Path) -> Result<Self> {
        toml::from_str(source).map_err(|source| SiteError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load options from a TOML file that must exist
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&source, path)
    }

    /// Load options from a TOML file, or return defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(source) => Self::from_toml(&source, path),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no options file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(SiteError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let options = SiteOptions::default();
        assert_eq!(options.content_dir, PathBuf::from("content"));
        assert_eq!(options.static_dir, PathBuf::from("static"));
        assert_eq!(options.template, PathBuf::from("template.html"));
        assert_eq!(options.output_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let options =
            SiteOptions::from_toml("output = \"dist\"\n", Path::new("mdsite.toml")).unwrap();
        assert_eq!(options.output_dir, PathBuf::from("dist"));
        assert_eq!(options.content_dir, PathBuf::from("content"));
    }

    #[test]
    fn test_full_toml() {
        let source = r#"
content = "docs"
static = "assets"
template = "layout.html"
output = "site"
"#;
        let options = SiteOptions::from_toml(source, Path::new("mdsite.toml")).unwrap();
        assert_eq!(
            options,
            SiteOptions {
                content_dir: PathBuf::from("docs"),
                static_dir: PathBuf::from("assets"),
                template: PathBuf::from("layout.html"),
                output_dir: PathBuf::from("site"),
            }
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = SiteOptions::from_toml("output = [", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, SiteError::Config { .. }));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let options = SiteOptions::load_or_default(Path::new("/no/such/mdsite.toml")).unwrap();
        assert_eq!(options, SiteOptions::default());
    }

    #[test]
    fn test_missing_file_is_error_when_required() {
        let err = SiteOptions::from_file(Path::new("/no/such/mdsite.toml")).unwrap_err();
        assert!(matches!(err, SiteError::Io { .. }));
    }
}
