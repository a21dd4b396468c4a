//! `folio build` command.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use folio_config::{CliSettings, Config};
use folio_site::{RenderedPage, Route, Site};
use rayon::prelude::*;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the rendered site.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Path to config file (default: discover folio.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Base URL override for canonical links.
    #[arg(long)]
    base_url: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

impl BuildArgs {
    /// Render every route and write the static site.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            out_dir: self.out,
            base_url: self.base_url,
        };
        let config = Config::load(self.config.as_deref(), Some(&settings))?;
        let site = Site::new(&config.site.title, &config.site.base_url);
        let out_dir = &config.build.out_dir;

        // Renders are independent and order-insensitive; run them in
        // parallel and write the results sequentially afterward.
        let routes = Route::all();
        let pages: Vec<RenderedPage> = routes
            .par_iter()
            .map(|route| site.render(route))
            .collect::<Result<_, _>>()?;

        for (route, page) in routes.iter().zip(&pages) {
            write_page(out_dir, &route.output_path(), page)?;
        }
        fs::write(out_dir.join("styles.css"), Site::stylesheet())?;

        output.success(&format!(
            "Rendered {} pages to {}",
            pages.len(),
            out_dir.display()
        ));
        Ok(())
    }
}

fn write_page(out_dir: &Path, rel: &Path, page: &RenderedPage) -> Result<(), CliError> {
    let target = out_dir.join(rel);
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&target, &page.html)?;
    tracing::info!(path = %page.path, file = %target.display(), "wrote page");
    Ok(())
}
