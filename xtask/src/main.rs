use clap::Parser;
use color_eyre::eyre::Result;

mod cli;
mod scripts;

fn main() -> Result<()> {
    color_eyre::install()?;

    let app = cli::App::parse();

    match app.command {
        Some(cli::Commands::Install(args)) => scripts::install(&args),
        Some(cli::Commands::ObfuscateToken(args)) => scripts::obfuscate_token(&args).map(|_| ()),
        None => {
            println!("No task given, run `cargo xtask --help` to list them");
            Ok(())
        }
    }
}
