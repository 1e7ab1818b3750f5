//! Category-keyed article cache
//!
//! Listings grow page by page: every fetched page is appended to the sequence
//! of its category, in the order the appends happen. Comments are kept per
//! article id and replaced wholesale.

use std::collections::HashMap;

use crate::error::ConfigurationError;
use crate::transform::{Comment, Record};

#[derive(Debug, Default, Clone)]
pub struct CacheStore {
    articles: HashMap<String, Vec<Record>>,
    comments: HashMap<u64, Vec<Comment>>,
}

impl CacheStore {
    /// Empty store with no known keys; call [`CacheStore::initialize`] next
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with an empty sequence for every key
    pub fn with_keys<'a>(keys: impl IntoIterator<Item = &'a str>) -> Self {
        let mut store = Self::new();
        store.initialize(keys);
        store
    }

    /// Create an empty sequence for every key. Keys that already exist keep
    /// their contents.
    pub fn initialize<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) {
        for key in keys {
            self.articles.entry(key.to_string()).or_default();
        }
    }

    pub fn is_known(&self, key: &str) -> bool {
        self.articles.contains_key(key)
    }

    /// Append a transformed page to the end of `key`'s sequence
    ///
    /// Records are not deduplicated and previously stored records are left
    /// untouched.
    pub fn append_articles(
        &mut self,
        key: &str,
        records: Vec<Record>,
    ) -> Result<(), ConfigurationError> {
        let sequence = self
            .articles
            .get_mut(key)
            .ok_or_else(|| ConfigurationError::UnknownCategory(key.to_string()))?;
        sequence.extend(records);
        Ok(())
    }

    /// Replace the comments of an article
    pub fn set_comments(&mut self, article_id: u64, comments: Vec<Comment>) {
        self.comments.insert(article_id, comments);
    }

    /// Records of `key` in append order; empty for unknown keys
    pub fn read(&self, key: &str) -> &[Record] {
        self.articles.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Comments of an article; empty when none were stored
    pub fn read_comments(&self, article_id: u64) -> &[Comment] {
        self.comments
            .get(&article_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// First cached record of `key` with the given issue number
    pub fn find_by_number(&self, key: &str, number: u64) -> Option<&Record> {
        self.read(key).iter().find(|record| record.number() == number)
    }
}
