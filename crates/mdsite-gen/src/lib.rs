//! # mdsite-gen
//!
//! Generate a static HTML site from a directory tree of markdown files.
//!
//! Every `*.md` file under the content directory is converted with
//! [`mdsite`], placed into an HTML template and written to the mirrored path
//! in the output directory. Static assets are copied alongside.
//!
//! ## Template
//!
//! The template is plain HTML with two placeholders:
//!
//! - `{{ Title }}`: the first `# ` heading of the page
//! - `{{ Content }}`: the converted page body
//!
//! Root-relative `href="/` and `src="/` attributes are rewritten to start
//! with the configured base path, so the site can be served from a
//! sub-directory.

mod assets;
mod options;
mod page;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub use assets::copy_static;
pub use options::SiteOptions;
pub use page::{generate_page, generate_pages_recursive, render_page};

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Failed to convert {}: {source}", .path.display())]
    Markdown {
        path: PathBuf,
        source: mdsite::MarkdownError,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Rebuild the whole site from scratch.
///
/// Clears the output directory, copies static assets into it and generates
/// every page. Returns the number of pages written.
pub fn build_site(options: &SiteOptions) -> Result<usize> {
    let output = &options.output_dir;

    if output.exists() {
        log::debug!("Removing {}", output.display());
        fs::remove_dir_all(output).map_err(io_error(output))?;
    }
    fs::create_dir_all(output).map_err(io_error(output))?;

    copy_static(&options.static_dir, output)?;

    generate_pages_recursive(
        &options.content_dir,
        &options.template_path,
        output,
        &options.base_path,
    )
}

pub(crate) fn io_error(path: &Path) -> impl FnOnce(io::Error) -> GenerateError + '_ {
    move |source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Map a walk failure to the path it happened on, falling back to `root`
pub(crate) fn walk_error(root: &Path) -> impl FnOnce(walkdir::Error) -> GenerateError + '_ {
    move |err| {
        let path = err.path().unwrap_or(root).to_path_buf();
        GenerateError::Io {
            path,
            source: err.into(),
        }
    }
}
