use crate::prelude::{eprintln, println, *};
use folio_core::category::Category;
use folio_core::transform::Comment;

use super::read::format_comments_text;
use super::{build_site, report_progress, to_json, CategoryArg};
use crate::site::Site;

#[derive(Debug, clap::Args, Clone)]
pub struct CommentsOptions {
    /// Category of the article: blog, worklog, study
    #[arg(value_enum, value_name = "CATEGORY")]
    pub category: CategoryArg,

    /// Issue number of the article
    pub number: u64,

    /// Page number for comments (1-indexed)
    #[arg(short, long, default_value = "1")]
    pub page: u32,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: CommentsOptions, global: crate::Global) -> Result<()> {
    let site = build_site(&global)?;
    let category = Category::from(options.category);

    if global.verbose {
        eprintln!(
            "Fetching comments page {} of {category} #{}...",
            options.page, options.number
        );
    }

    let comments = comments_data(&site, category, options.number, options.page).await;
    report_progress(&site, &global);
    let comments = comments?;

    if options.json {
        println!("{}", to_json(&comments)?);
    } else {
        print!("{}", format_comments_text(&comments));
        println!();
    }

    Ok(())
}

/// One page of an article's comments, following the issue's own comments URL
pub async fn comments_data(
    site: &Site,
    category: Category,
    number: u64,
    page: u32,
) -> Result<Vec<Comment>> {
    Ok(site.load_comments(category, number, page).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::Fetcher;
    use crate::testing::{comment_json, study_issue, test_config, MockGithub};

    #[tokio::test]
    async fn test_comments_data_follows_comments_url() {
        let mock = MockGithub::new()
            .page("study", 1, vec![study_issue(80, 8)])
            .comments(8, vec![comment_json(1, "one"), comment_json(2, "two")])
            .spawn()
            .await;
        let site = Site::new(Fetcher::new(test_config(&mock.base)).unwrap());

        let comments = comments_data(&site, Category::Study, 8, 1).await.unwrap();

        assert_eq!(comments.len(), 2);
        assert_eq!(site.read_comments(80).len(), 2);
        let paths: Vec<String> = mock.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(
            paths,
            vec![
                "/repos/monine/study/issues/8".to_string(),
                "/repos/monine/study/issues/8/comments".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_comments_data_missing_article() {
        let mock = MockGithub::new().spawn().await;
        let site = Site::new(Fetcher::new(test_config(&mock.base)).unwrap());

        assert!(comments_data(&site, Category::Study, 8, 1).await.is_err());
    }

    #[test]
    fn test_format_comments_text_empty() {
        let text = format_comments_text(&[]);

        assert!(text.contains("COMMENTS (0)"));
        assert!(text.contains("No comments."));
    }
}
