//! Site generation options

use std::path::PathBuf;

/// Options for building a site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Directory tree of markdown pages
    pub content_dir: PathBuf,

    /// HTML template with `{{ Title }}` and `{{ Content }}` placeholders
    pub template_path: PathBuf,

    /// Assets copied verbatim into the output
    pub static_dir: PathBuf,

    /// Output directory, cleared on every build
    pub output_dir: PathBuf,

    /// Prefix replacing the leading `/` of root-relative links
    pub base_path: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            template_path: PathBuf::from("template.html"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            base_path: "/".to_string(),
        }
    }
}
