use crate::prelude::*;
use clap::Parser;

mod blog;
mod error;
mod github;
mod prelude;
mod site;

#[cfg(test)]
mod testing;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Read a blog whose articles, worklogs and study notes live in GitHub issues"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Owner of the content repositories
    #[clap(
        long,
        env = "FOLIO_OWNER",
        global = true,
        default_value = github::GithubConfig::DEFAULT_OWNER
    )]
    owner: String,

    /// GitHub REST API base URL
    #[clap(
        long,
        env = "FOLIO_API_BASE",
        global = true,
        default_value = github::GithubConfig::DEFAULT_API_BASE
    )]
    api_base: String,

    /// First half of the access token
    #[clap(long, env = "FOLIO_TOKEN_HEAD", global = true, hide_env_values = true)]
    token_head: Option<String>,

    /// Second half of the access token
    #[clap(long, env = "FOLIO_TOKEN_TAIL", global = true, hide_env_values = true)]
    token_tail: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "FOLIO_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// List the articles of a category
    #[clap(name = "list")]
    List(crate::blog::list::ListOptions),

    /// Read one article and optionally its comments
    #[clap(name = "read")]
    Read(crate::blog::read::ReadOptions),

    /// Read one page of an article's comments
    #[clap(name = "comments")]
    Comments(crate::blog::comments::CommentsOptions),

    /// Worklog timeline grouped by year
    #[clap(name = "timeline")]
    Timeline(crate::blog::timeline::TimelineOptions),

    /// Resolve a site path such as /article/12 and show it
    #[clap(name = "open")]
    Open(crate::blog::open::OpenOptions),

    /// Print the navigation entries
    #[clap(name = "nav")]
    Nav(crate::blog::nav::NavOptions),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::List(options) => crate::blog::list::run(options, app.global).await,
        SubCommands::Read(options) => crate::blog::read::run(options, app.global).await,
        SubCommands::Comments(options) => crate::blog::comments::run(options, app.global).await,
        SubCommands::Timeline(options) => crate::blog::timeline::run(options, app.global).await,
        SubCommands::Open(options) => crate::blog::open::run(options, app.global).await,
        SubCommands::Nav(options) => crate::blog::nav::run(options, app.global),
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
