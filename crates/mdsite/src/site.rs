//! Site generation: walk the content tree, render each page into the
//! template and copy static assets.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::options::SiteOptions;
use crate::template::Template;
use crate::{extract_title, markdown_to_html, Result, SiteError};

const MARKDOWN_EXTENSION: &str = "md";
const HTML_EXTENSION: &str = "html";

/// Summary of a finished build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Number of HTML pages written
    pub pages: usize,
    /// Number of static files copied
    pub static_files: usize,
}

/// Builds a static site from a set of [`SiteOptions`]
#[derive(Debug, Clone)]
pub struct Site {
    options: SiteOptions,
}

impl Site {
    pub fn new(options: SiteOptions) -> Self {
        Self { options }
    }

    /// Options this site was created with
    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// Clean the output directory, copy static files and generate every page
    pub fn build(&self) -> Result<BuildReport> {
        let options = &self.options;

        clean_output(&options.output_dir)?;
        let static_files = copy_static(&options.static_dir, &options.output_dir)?;
        let template = Template::load(&options.template)?;
        let pages = generate_pages_recursive(&options.content_dir, &template, &options.output_dir)?;

        info!(
            "built {} pages and {} static files into {}",
            pages,
            static_files,
            options.output_dir.display()
        );
        Ok(BuildReport {
            pages,
            static_files,
        })
    }
}

/// Create `dir` if needed and delete the regular files directly inside it.
///
/// Subdirectories are left alone.
pub fn clean_output(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(io_error(dir))?;

    for entry in walk(WalkDir::new(dir).min_depth(1).max_depth(1)) {
        let entry = entry?;
        if entry.file_type().is_file() {
            debug!("removing {}", entry.path().display());
            fs::remove_file(entry.path()).map_err(io_error(entry.path()))?;
        }
    }
    Ok(())
}

/// Copy the `src` tree into `dst`, returning the number of files copied.
///
/// A top-level directory of `src` replaces any existing destination
/// directory of the same name. A missing `src` copies nothing.
pub fn copy_static(src: &Path, dst: &Path) -> Result<usize> {
    if !src.is_dir() {
        debug!("no static directory at {}", src.display());
        return Ok(0);
    }

    for entry in walk(WalkDir::new(src).min_depth(1).max_depth(1)) {
        let entry = entry?;
        let target = dst.join(relative_path(&entry, src));
        if entry.file_type().is_dir() && target.exists() {
            fs::remove_dir_all(&target).map_err(io_error(&target))?;
        }
    }

    let mut copied = 0;
    for entry in walk(WalkDir::new(src)) {
        let entry = entry?;
        let target = dst.join(relative_path(&entry, src));
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(io_error(&target))?;
        } else {
            debug!("copying {} -> {}", entry.path().display(), target.display());
            fs::copy(entry.path(), &target).map_err(io_error(entry.path()))?;
            copied += 1;
        }
    }
    Ok(copied)
}

/// Convert one Markdown file into an HTML page at `dest`
pub fn generate_page(from: &Path, template: &Template, dest: &Path) -> Result<()> {
    debug!("generating {} -> {}", from.display(), dest.display());

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let title = extract_title(&markdown).map_err(|err| match err {
        SiteError::TitleNotFound => SiteError::MissingTitle {
            path: from.to_path_buf(),
        },
        other => other,
    })?;
    let content = markdown_to_html(&markdown)?;

    fs::write(dest, template.render(&title, &content)).map_err(io_error(dest))
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir`. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Template,
    dest_dir: &Path,
) -> Result<usize> {
    let mut pages = 0;

    for entry in walk(WalkDir::new(content_dir)) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        if !is_markdown(entry.path()) {
            debug!("skipping non-markdown file {}", entry.path().display());
            continue;
        }

        let dest = page_path(dest_dir, relative_path(&entry, content_dir));
        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent).map_err(io_error(parent))?;
        }
        generate_page(entry.path(), template, &dest)?;
        pages += 1;
    }
    Ok(pages)
}

/// Walk entries in file-name order, so builds are reproducible
fn walk(walker: WalkDir) -> impl Iterator<Item = Result<DirEntry>> {
    walker
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map_err(SiteError::from))
}

fn relative_path<'a>(entry: &'a DirEntry, root: &Path) -> &'a Path {
    entry.path().strip_prefix(root).unwrap_or(entry.path())
}

/// `a/b/x.md` under `dest_dir` becomes `dest_dir/a/b/x.html`
fn page_path(dest_dir: &Path, relative: &Path) -> PathBuf {
    dest_dir.join(relative).with_extension(HTML_EXTENSION)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == MARKDOWN_EXTENSION)
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> SiteError + '_ {
    move |source| SiteError::Io {
        path: path.to_path_buf(),
        source,
    }
}
