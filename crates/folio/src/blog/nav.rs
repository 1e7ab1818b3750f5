use crate::prelude::{println, *};
use folio_core::category::{nav_entries, NavEntry};

use super::to_json;

#[derive(Debug, clap::Args, Clone)]
pub struct NavOptions {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(options: NavOptions, _global: crate::Global) -> Result<()> {
    print_nav(options.json)
}

pub fn print_nav(json: bool) -> Result<()> {
    let entries = nav_entries();

    if json {
        println!("{}", to_json(&entries)?);
    } else {
        println!();
        nav_table(&entries).printstd();
        println!();
    }

    Ok(())
}

fn nav_table(entries: &[NavEntry]) -> prettytable::Table {
    let mut table = new_table();
    table.set_titles(prettytable::row!["Name", "Route", "Icon", "Repository"]);

    for entry in entries {
        let repo = entry
            .category
            .map(|category| category.repo())
            .unwrap_or("-");
        table.add_row(prettytable::row![entry.name, entry.route, entry.icon, repo]);
    }

    table
}
