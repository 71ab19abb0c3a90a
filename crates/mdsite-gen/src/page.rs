//! Page rendering and generation.

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::{io_error, walk_error, GenerateError, Result};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Render one markdown page into the template.
///
/// Fills in the title and content placeholders, then points root-relative
/// `href` and `src` attributes at `base_path`.
pub fn render_page(markdown: &str, template: &str, base_path: &str) -> mdsite::Result<String> {
    let content = mdsite::markdown_to_html(markdown)?;
    let title = mdsite::extract_title(markdown)?;

    let html = template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content)
        .replace("href=\"/", &format!("href=\"{}", base_path))
        .replace("src=\"/", &format!("src=\"{}", base_path));

    Ok(html)
}

/// Convert a single markdown file and write it to `dest`
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path, base_path: &str) -> Result<()> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from).map_err(io_error(from))?;
    let template = fs::read_to_string(template_path).map_err(io_error(template_path))?;

    let html = render_page(&markdown, &template, base_path).map_err(|source| {
        GenerateError::Markdown {
            path: from.to_path_buf(),
            source,
        }
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }
    fs::write(dest, html).map_err(io_error(dest))
}

/// Generate a page for every `*.md` file below `content_dir`.
///
/// The directory structure is mirrored into `dest_dir` and each page is
/// written as `<stem>.html`. Returns the number of pages written.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<usize> {
    let mut pages = 0;

    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry.map_err(walk_error(content_dir))?;
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(content_dir) else {
            continue;
        };

        if entry.file_type().is_dir() {
            let nested = dest_dir.join(relative);
            log::debug!("Creating {}", nested.display());
            fs::create_dir_all(&nested).map_err(io_error(&nested))?;
        } else if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            let dest = dest_dir.join(relative).with_extension("html");
            generate_page(path, template_path, &dest, base_path)?;
            pages += 1;
        }
    }

    Ok(pages)
}
