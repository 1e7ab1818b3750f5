//! Fetch → transform → append wiring
//!
//! A [`Site`] owns the cache store and hands out snapshots of it. The store
//! lock is only ever taken between awaits, so every append is atomic while
//! concurrent page loads may still land out of request order.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use folio_core::category::Category;
use folio_core::github::COMMENTS_PAGE_SIZE;
use folio_core::markdown::MarkdownRenderer;
use folio_core::store::CacheStore;
use folio_core::transform::{transform_comments, Comment, IssueTransformer, Record, Transformer};

use crate::error::Error;
use crate::github::Fetcher;

#[derive(Debug, Clone)]
pub struct Site {
    fetcher: Fetcher,
    renderer: MarkdownRenderer,
    store: Arc<Mutex<CacheStore>>,
}

impl Site {
    /// Site with an empty listing for every registered category
    pub fn new(fetcher: Fetcher) -> Self {
        Self {
            fetcher,
            renderer: MarkdownRenderer::default(),
            store: Arc::new(Mutex::new(CacheStore::with_keys(Category::keys()))),
        }
    }

    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    /// Fetch, transform and append page `page` of `category`
    ///
    /// Returns the appended batch. A malformed issue fails the whole page and
    /// nothing is appended.
    pub async fn load_page(&self, category: Category, page: u32) -> Result<Vec<Record>, Error> {
        let issues = self
            .fetcher
            .fetch_articles(category.repo(), page, category.page_size())
            .await?;

        let records = self.transformer(category).transform_all(&issues)?;

        self.lock()
            .append_articles(category.key(), records.clone())?;

        log::debug!(
            "Appended {} {category} records from page {page}",
            records.len()
        );

        Ok(records)
    }

    /// A single record, from the cache when it holds it
    ///
    /// Fetched records are not appended to the listing.
    pub async fn load_article(&self, category: Category, number: u64) -> Result<Record, Error> {
        let cached = self.lock().find_by_number(category.key(), number).cloned();
        if let Some(record) = cached {
            log::debug!("Cache hit for {category} #{number}");
            return Ok(record);
        }

        let issue = self
            .fetcher
            .fetch_article_by_number(category.repo(), number)
            .await?;

        Ok(self.transformer(category).transform(&issue)?)
    }

    /// Fetch and store page `page` of the comments of issue `number`
    pub async fn load_comments(
        &self,
        category: Category,
        number: u64,
        page: u32,
    ) -> Result<Vec<Comment>, Error> {
        let issue = self
            .fetcher
            .fetch_article_by_number(category.repo(), number)
            .await?;

        let url = issue
            .comments_url
            .clone()
            .unwrap_or_else(|| self.fetcher.comments_url(category.repo(), number));

        let comments = self.fetch_comments(&url, page).await?;
        self.lock().set_comments(issue.id, comments.clone());

        Ok(comments)
    }

    /// A record together with page `page` of its comments
    ///
    /// The comments URL is derived from the issue number. The issue is only
    /// fetched on a cache miss.
    pub async fn load_article_with_comments(
        &self,
        category: Category,
        number: u64,
        page: u32,
    ) -> Result<(Record, Vec<Comment>), Error> {
        let url = self.fetcher.comments_url(category.repo(), number);

        let (record, comments) = futures::try_join!(
            self.load_article(category, number),
            self.fetch_comments(&url, page)
        )?;

        self.lock().set_comments(record.id(), comments.clone());

        Ok((record, comments))
    }

    async fn fetch_comments(&self, url: &str, page: u32) -> Result<Vec<Comment>, Error> {
        let raw = self
            .fetcher
            .fetch_comments(url, page, COMMENTS_PAGE_SIZE)
            .await?;

        Ok(transform_comments(&raw, &self.renderer))
    }

    /// Snapshot of the cached listing of `category`
    pub fn read(&self, category: Category) -> Vec<Record> {
        self.lock().read(category.key()).to_vec()
    }

    /// Snapshot of the cached comments of an article
    pub fn read_comments(&self, article_id: u64) -> Vec<Comment> {
        self.lock().read_comments(article_id).to_vec()
    }

    fn transformer(&self, category: Category) -> IssueTransformer {
        IssueTransformer::new(category.variant(), self.renderer.clone())
    }

    // Store mutations are single calls, a poisoned lock still holds whole batches
    fn lock(&self) -> MutexGuard<'_, CacheStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
