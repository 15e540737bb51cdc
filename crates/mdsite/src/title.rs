//! Page title extraction.

use crate::{Result, SiteError};

const TITLE_PREFIX: &str = "# ";

/// Return the text of the first `# ` line, trimmed.
///
/// Only level-one headings written with a space after the `#` count.
pub fn extract_title(markdown: &str) -> Result<String> {
    markdown
        .split('\n')
        .find_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(|title| title.trim().to_string())
        .ok_or(SiteError::TitleNotFound)
}
