use std::sync::{Arc, LazyLock, Mutex};

use crate::prelude::{eprintln, *};
use colored::Colorize;
use folio_core::category::Category;
use folio_core::progress::Progress;
use folio_core::transform::Record;
use regex::Regex;

use crate::github::{Fetcher, GithubConfig};
use crate::site::Site;

pub mod comments;
pub mod list;
pub mod nav;
pub mod open;
pub mod read;
pub mod timeline;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());
static BLANK_LINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Content category argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CategoryArg {
    Blog,
    Worklog,
    Study,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Blog => Category::Blog,
            CategoryArg::Worklog => Category::Worklog,
            CategoryArg::Study => Category::Study,
        }
    }
}

/// Site wired to the configured GitHub API, with progress reporting
pub fn build_site(global: &crate::Global) -> Result<Site> {
    let config = GithubConfig::from_global(global);

    if global.verbose {
        eprintln!("GitHub API Base: {}", config.api_base);
        eprintln!("Owner: {}", config.owner);
        eprintln!();
    }

    let progress = Arc::new(Mutex::new(Progress::new()));
    let fetcher = Fetcher::new(config)
        .wrap_err("Failed to build the GitHub client")?
        .with_progress(progress);

    Ok(Site::new(fetcher))
}

/// Print the progress state of the last request when running verbose
pub fn report_progress(site: &Site, global: &crate::Global) {
    if !global.verbose {
        return;
    }

    if let Some(state) = site.fetcher().progress_state() {
        eprintln!("{} {:?}", "Progress:".bright_black(), state);
    }
}

/// Rendered HTML as terminal text: tags dropped, entities decoded
pub fn html_to_text(html: &str) -> String {
    let stripped = TAG.replace_all(html, "");
    let decoded = html_escape::decode_html_entities(&stripped);
    BLANK_LINES
        .replace_all(decoded.trim(), "\n\n")
        .into_owned()
}

/// One-line heading of a record
pub fn record_heading(record: &Record) -> String {
    format!(
        "{} {}  {}",
        format!("#{}", record.number()).yellow().bold(),
        record.title().white().bold(),
        record.created_date().bright_black()
    )
}

pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| eyre!("JSON serialization failed: {}", e))
}
