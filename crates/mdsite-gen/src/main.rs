use std::path::PathBuf;

use clap::Parser;
use mdsite_gen::SiteOptions;

#[derive(Parser)]
#[command(name = "mdsite-gen")]
#[command(about = "Generate a static HTML site from markdown files")]
struct Cli {
    /// Prefix for root-relative links (defaults to "/")
    base_path: Option<String>,

    /// Directory of markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Directory of static assets to copy
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory (cleared before generating)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<Cli> for SiteOptions {
    fn from(cli: Cli) -> Self {
        let mut options = SiteOptions::default();

        if let Some(base_path) = cli.base_path {
            options.base_path = base_path;
        }

        if let Some(content) = cli.content {
            options.content_dir = content;
        }

        if let Some(template) = cli.template {
            options.template_path = template;
        }

        if let Some(static_dir) = cli.static_dir {
            options.static_dir = static_dir;
        }

        if let Some(output) = cli.output {
            options.output_dir = output;
        }

        options
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = SiteOptions::from(Cli::parse());

    match mdsite_gen::build_site(&options) {
        Ok(pages) => println!("Generated {} pages in {}", pages, options.output_dir.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
