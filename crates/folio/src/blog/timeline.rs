use crate::prelude::{println, *};
use colored::Colorize;
use folio_core::category::Category;
use folio_core::transform::{group_timeline, Record, TimelineYear, WorklogEntry};

use super::{build_site, html_to_text, list::list_data, report_progress, to_json};

#[derive(Debug, clap::Args, Clone)]
pub struct TimelineOptions {
    /// Number of worklog pages to load
    #[arg(long, default_value = "1")]
    pub pages: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: TimelineOptions, global: crate::Global) -> Result<()> {
    let site = build_site(&global)?;

    let output = list_data(&site, Category::Worklog, 1, options.pages).await;
    report_progress(&site, &global);
    let timeline = group_timeline(&worklog_entries(&output?.records));

    if options.json {
        println!("{}", to_json(&timeline)?);
    } else {
        print!("{}", format_timeline_text(&timeline));
    }

    Ok(())
}

fn worklog_entries(records: &[Record]) -> Vec<WorklogEntry> {
    records
        .iter()
        .filter_map(|record| match record {
            Record::Worklog(entry) => Some(entry.clone()),
            _ => None,
        })
        .collect()
}

fn format_timeline_text(timeline: &[TimelineYear]) -> String {
    let mut result = String::new();

    if timeline.is_empty() {
        result.push_str(&format!("\n{}\n\n", "No worklogs yet.".yellow()));
        return result;
    }

    for year in timeline {
        result.push_str(&format!(
            "\n{} {}\n",
            year.year.bright_cyan().bold(),
            year.color_hex.bright_black()
        ));

        for entry in &year.entries {
            let summary = html_to_text(&entry.summary_html);
            let first_line = summary.lines().next().unwrap_or_default();
            result.push_str(&format!(
                "  {} {}  {}\n",
                format!("{:02}", entry.month).yellow().bold(),
                entry.title.white(),
                first_line
            ));
        }
    }

    result.push('\n');
    result
}
