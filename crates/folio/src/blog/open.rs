use crate::prelude::{eprintln, *};
use folio_core::route::Route;

use super::{build_site, list, nav, read, report_progress};

#[derive(Debug, clap::Args, Clone)]
pub struct OpenOptions {
    /// Site path (e.g., "/", "/article", "/worklog/12")
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: OpenOptions, global: crate::Global) -> Result<()> {
    let route = resolve(&options.path)?;

    if global.verbose {
        eprintln!("Resolved {} to {:?}", options.path, route);
    }

    match route {
        Route::Home => nav::print_nav(options.json),
        Route::Listing { category } => {
            let site = build_site(&global)?;
            let output = list::list_data(&site, category, 1, 1).await;
            report_progress(&site, &global);
            list::print_list(&output?, options.json)
        }
        Route::Detail { category, number } => {
            let site = build_site(&global)?;
            let output = read::read_data(&site, category, number, None).await;
            report_progress(&site, &global);
            read::print_read(&output?, options.json)
        }
    }
}

/// Resolve a site path, accepting full URLs of the site as well
fn resolve(path: &str) -> Result<Route> {
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or("/", |idx| &rest[idx..]),
        None => path,
    };

    Route::parse(path).ok_or_else(|| eyre!("Unknown route: {}", path))
}
