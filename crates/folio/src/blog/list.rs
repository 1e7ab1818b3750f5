use crate::prelude::{eprintln, println, *};
use colored::Colorize;
use folio_core::category::Category;
use folio_core::transform::Record;
use serde::Serialize;

use super::{build_site, html_to_text, record_heading, report_progress, to_json, CategoryArg};
use crate::site::Site;

#[derive(Debug, clap::Args, Clone)]
pub struct ListOptions {
    /// Category to list: blog, worklog, study
    #[arg(value_enum, value_name = "CATEGORY")]
    pub category: CategoryArg,

    /// First page to load (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Number of pages to load
    #[arg(long, default_value = "1")]
    pub pages: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct ListOutput {
    pub category: Category,
    pub first_page: u32,
    pub pages_loaded: u32,
    /// The last loaded page was full, so more may follow
    pub has_more: bool,
    pub records: Vec<Record>,
}

pub async fn run(options: ListOptions, global: crate::Global) -> Result<()> {
    let site = build_site(&global)?;
    let category = Category::from(options.category);

    if global.verbose {
        eprintln!("Fetching {} pages of {category}...", options.pages);
    }

    let output = list_data(&site, category, options.page, options.pages).await;
    report_progress(&site, &global);
    let output = output?;

    print_list(&output, options.json)
}

pub fn print_list(output: &ListOutput, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(output)?);
    } else {
        print!("{}", format_list_text(output));
    }

    Ok(())
}

/// Load `pages` pages of `category` starting at `first_page`
///
/// Pages load one after the other so the listing keeps page order; loading
/// stops early at the first page shorter than the category page size.
pub async fn list_data(
    site: &Site,
    category: Category,
    first_page: u32,
    pages: u32,
) -> Result<ListOutput> {
    let mut pages_loaded = 0;
    let mut has_more = true;

    for page in first_page..first_page.saturating_add(pages) {
        let batch = site.load_page(category, page).await?;
        pages_loaded += 1;

        if batch.len() < category.page_size() as usize {
            has_more = false;
            break;
        }
    }

    Ok(ListOutput {
        category,
        first_page,
        pages_loaded,
        has_more: has_more && pages_loaded > 0,
        records: site.read(category),
    })
}

fn format_list_text(output: &ListOutput) -> String {
    let mut result = String::new();
    let category = output.category;

    result.push_str(&format!("\n{}\n", "=".repeat(80).bright_cyan()));
    result.push_str(&format!(
        "{}\n",
        format!("{} ({})", category.label().to_uppercase(), category.route())
            .bright_cyan()
            .bold()
    ));
    result.push_str(&format!("{}\n", "=".repeat(80).bright_cyan()));

    if output.records.is_empty() {
        result.push_str(&format!("\n{}\n", "Nothing published yet.".yellow()));
    }

    for record in &output.records {
        result.push_str(&format!("\n{}\n", record_heading(record)));

        if let Record::Article(article) = record {
            result.push_str(&format!(
                "    {}: {}\n",
                "Thumbnail".green(),
                article.thumbnail_url.cyan().underline()
            ));
        }

        if let Some(summary) = record.summary_html() {
            for line in html_to_text(summary).lines() {
                result.push_str(&format!("    {line}\n"));
            }
        }

        result.push_str(&format!(
            "    {}: {}\n",
            "Read".green(),
            format!("folio read {category} {}", record.number()).cyan()
        ));
    }

    if output.has_more {
        let next = output.first_page + output.pages_loaded;
        result.push_str(&format!(
            "\n{}: {}\n",
            "Next page".green(),
            format!("folio list {category} --page {next}").cyan()
        ));
    }

    result.push('\n');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Fetcher;
    use crate::testing::{blog_issue, study_issue, test_config, MockGithub};
    use folio_core::transform::{Article, StudyNote};

    fn create_test_output(records: Vec<Record>, has_more: bool) -> ListOutput {
        ListOutput {
            category: Category::Study,
            first_page: 1,
            pages_loaded: 1,
            has_more,
            records,
        }
    }

    fn create_test_note(number: u64) -> Record {
        Record::Study(StudyNote {
            id: number * 10,
            number,
            title: format!("Note {number}"),
            body_html: "<p>body</p>".to_string(),
            created_date: "2021-06-01".to_string(),
            updated_date: "2021-06-01".to_string(),
        })
    }

    #[tokio::test]
    async fn test_list_data_stops_at_short_page() {
        let mock = MockGithub::new()
            .page("study", 1, (1..=5).map(|n| study_issue(n, n)).collect())
            .page("study", 2, vec![study_issue(6, 6)])
            .spawn()
            .await;
        let site = Site::new(Fetcher::new(test_config(&mock.base)).unwrap());

        let output = list_data(&site, Category::Study, 1, 5).await.unwrap();

        assert_eq!(output.pages_loaded, 2);
        assert!(!output.has_more);
        assert_eq!(output.records.len(), 6);
        assert_eq!(mock.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_list_data_full_page_has_more() {
        let mock = MockGithub::new()
            .page(
                "monine.github.io",
                2,
                (1..=5).map(|n| blog_issue(n, n)).collect(),
            )
            .spawn()
            .await;
        let site = Site::new(Fetcher::new(test_config(&mock.base)).unwrap());

        let output = list_data(&site, Category::Blog, 2, 1).await.unwrap();

        assert_eq!(output.pages_loaded, 1);
        assert!(output.has_more);
        assert_eq!(
            mock.requests()[0].query.get("page").map(String::as_str),
            Some("2")
        );
    }

    #[tokio::test]
    async fn test_list_data_empty_category() {
        let mock = MockGithub::new().spawn().await;
        let site = Site::new(Fetcher::new(test_config(&mock.base)).unwrap());

        let output = list_data(&site, Category::Worklog, 1, 3).await.unwrap();

        assert_eq!(output.pages_loaded, 1);
        assert!(!output.has_more);
        assert!(output.records.is_empty());
    }

    #[test]
    fn test_format_list_text_includes_read_command() {
        let output = create_test_output(vec![create_test_note(4)], false);

        let text = format_list_text(&output);

        assert!(text.contains("Note 4"));
        assert!(text.contains("folio read study 4"));
        assert!(!text.contains("Next page"));
    }

    #[test]
    fn test_format_list_text_next_page_hint() {
        let output = create_test_output(vec![create_test_note(1)], true);

        let text = format_list_text(&output);

        assert!(text.contains("folio list study --page 2"));
    }

    #[test]
    fn test_format_list_text_article_thumbnail() {
        let output = ListOutput {
            category: Category::Blog,
            first_page: 1,
            pages_loaded: 1,
            has_more: false,
            records: vec![Record::Article(Article {
                id: 10,
                number: 1,
                title: "Article 1".to_string(),
                summary_html: "<p>Summary 1</p>".to_string(),
                banner_url: "https://img.example.com/1/750".to_string(),
                thumbnail_url: "https://img.example.com/1/256".to_string(),
                body_html: "<p>Body 1</p>".to_string(),
                created_date: "2020-03-01".to_string(),
                updated_date: "2020-04-02".to_string(),
            })],
        };

        let text = format_list_text(&output);

        assert!(text.contains("Thumbnail"));
        assert!(text.contains("https://img.example.com/1/256"));
        assert!(!text.contains("Banner"));
        assert!(!text.contains("https://img.example.com/1/750"));
    }

    #[test]
    fn test_format_list_text_empty() {
        let output = create_test_output(vec![], false);

        let text = format_list_text(&output);

        assert!(text.contains("Nothing published yet."));
    }

    #[test]
    fn test_list_output_json() {
        let output = create_test_output(vec![create_test_note(4)], false);

        let json = to_json(&output).unwrap();

        assert!(json.contains("\"category\": \"study\""));
        assert!(json.contains("\"kind\": \"study\""));
        assert!(json.contains("\"number\": 4"));
    }
}
