use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtasks")]
#[command(about = "Run project tasks using rust instead of scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds a binary and installs it at the given path
    Install(InstallArgs),
    /// Split the access token literal in built assets so it is not stored verbatim
    ObfuscateToken(ObfuscateTokenArgs),
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Name of the binary to install (defaults to "folio")
    #[arg(short, long, default_value = "folio")]
    pub name: String,

    /// Directory to install the binary to (defaults to ~/.local/bin)
    #[arg(short, long)]
    pub path: Option<String>,
}

#[derive(Args, Debug)]
pub struct ObfuscateTokenArgs {
    /// Directory holding the built assets to rewrite
    #[arg(short, long, default_value = "assets/js")]
    pub dir: String,

    /// First half of the access token
    #[arg(long, env = "FOLIO_TOKEN_HEAD", hide_env_values = true)]
    pub head: String,

    /// Second half of the access token
    #[arg(long, env = "FOLIO_TOKEN_TAIL", hide_env_values = true)]
    pub tail: String,
}
