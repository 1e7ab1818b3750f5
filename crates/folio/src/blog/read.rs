use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use folio_core::category::Category;
use folio_core::transform::{Comment, Record};
use serde::Serialize;

use super::{build_site, html_to_text, record_heading, report_progress, to_json, CategoryArg};
use crate::site::Site;

#[derive(Debug, clap::Args, Clone)]
pub struct ReadOptions {
    /// Category of the article: blog, worklog, study
    #[arg(value_enum, value_name = "CATEGORY")]
    pub category: CategoryArg,

    /// Issue number of the article
    pub number: u64,

    /// Also fetch the article's comments
    #[arg(short, long)]
    pub comments: bool,

    /// Page number for comments (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ReadOutput {
    pub record: Record,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

pub async fn run(options: ReadOptions, global: crate::Global) -> Result<()> {
    let site = build_site(&global)?;
    let category = Category::from(options.category);

    if global.verbose {
        eprintln!("Fetching {category} #{}...", options.number);
    }

    let comments_page = options.comments.then_some(options.page);
    let output = read_data(&site, category, options.number, comments_page).await;
    report_progress(&site, &global);
    let output = output?;

    print_read(&output, options.json)
}

pub fn print_read(output: &ReadOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(output)?);
    } else {
        print!("{}", format_read_text(output));
    }

    Ok(())
}

/// Load an article and, when `comments_page` is set, that page of its comments
pub async fn read_data(
    site: &Site,
    category: Category,
    number: u64,
    comments_page: Option<u32>,
) -> Result<ReadOutput> {
    let Some(page) = comments_page else {
        let record = site.load_article(category, number).await?;
        return Ok(ReadOutput {
            record,
            comments: None,
        });
    };

    let (record, comments) = site
        .load_article_with_comments(category, number, page)
        .await?;

    Ok(ReadOutput {
        record,
        comments: Some(comments),
    })
}

fn format_read_text(output: &ReadOutput) -> String {
    let mut result = String::new();
    let record = &output.record;

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!("{}\n", record_heading(record)));

    match record {
        Record::Article(article) => {
            result.push_str(&format!(
                "{}: {}\n",
                "Banner".green(),
                article.banner_url.cyan().underline()
            ));
            result.push_str(&format!(
                "{}: {}\n",
                "Updated".green(),
                article.updated_date.bright_black()
            ));
        }
        Record::Worklog(entry) => {
            result.push_str(&format!(
                "{}: {} / {:02} {}\n",
                "Period".green(),
                entry.year.bright_white(),
                entry.month,
                entry.color_hex.bright_black()
            ));
        }
        Record::Study(note) => {
            result.push_str(&format!(
                "{}: {}\n",
                "Updated".green(),
                note.updated_date.bright_black()
            ));
        }
    }
    result.push_str(&format!("{}\n\n", "=".repeat(80).bright_cyan()));

    result.push_str(&html_to_text(record.body_html()));
    result.push('\n');

    if let Some(comments) = &output.comments {
        result.push_str(&format_comments_text(comments));
    }

    result.push('\n');
    result
}

/// Comment section shared by `read --comments` and `comments`
pub fn format_comments_text(comments: &[Comment]) -> String {
    let mut result = String::new();

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_yellow()));
    result.push_str(&format!(
        "{}\n",
        format!("COMMENTS ({})", comments.len()).bright_yellow().bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_yellow()));

    if comments.is_empty() {
        result.push_str(&format!("\n{}\n", "No comments.".yellow()));
    }

    for comment in comments {
        result.push_str(&format!(
            "\n{} {}\n",
            format!("[{}]", comment.id).yellow().bold(),
            comment.created_at.bright_black()
        ));
        for line in html_to_text(&comment.body_html).lines() {
            result.push_str(&format!("    {line}\n"));
        }
    }

    result
}
