//! Content Fetcher for the GitHub Issues API

use std::sync::{Arc, Mutex};

use folio_core::credential::Credential;
use folio_core::github::{PageRequest, RawComment, RawIssue};
use folio_core::progress::{Progress, ProgressState};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::de::DeserializeOwned;

use crate::error::Error;

/// GitHub API configuration
#[derive(Debug, Clone)]
pub struct GithubConfig {
    pub api_base: String,
    pub owner: String,
    /// `None` sends anonymous, heavily rate-limited requests
    pub credential: Option<Credential>,
}

impl GithubConfig {
    /// Default GitHub REST API base URL
    pub const DEFAULT_API_BASE: &'static str = "https://api.github.com";

    /// Default owner of the content repositories
    pub const DEFAULT_OWNER: &'static str = "monine";

    /// Build the configuration from global CLI options
    ///
    /// The access token is joined from its two halves here, once, at startup.
    pub fn from_global(global: &crate::Global) -> Self {
        let credential = match (&global.token_head, &global.token_tail) {
            (Some(head), Some(tail)) => {
                Some(Credential::from_halves(head, tail)).filter(|c| !c.is_empty())
            }
            (None, None) => None,
            _ => {
                log::warn!("Only one access token half is set; sending anonymous requests");
                None
            }
        };

        Self {
            api_base: global.api_base.trim_end_matches('/').to_string(),
            owner: global.owner.clone(),
            credential,
        }
    }
}

/// Fetches issues and comments, attaching the access token to every request
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: reqwest::Client,
    config: GithubConfig,
    progress: Option<Arc<Mutex<Progress>>>,
}

impl Fetcher {
    pub fn new(config: GithubConfig) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github.v3+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("folio"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::transport(&config.api_base, e))?;

        if config.credential.is_none() {
            log::warn!("No access token configured; GitHub rate limits anonymous requests");
        }

        Ok(Self {
            client,
            config,
            progress: None,
        })
    }

    /// Report loading / success / error of every request to `progress`
    pub fn with_progress(mut self, progress: Arc<Mutex<Progress>>) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Current progress state, when progress reporting is attached
    pub fn progress_state(&self) -> Option<ProgressState> {
        let progress = self.progress.as_ref()?;
        let state = progress.lock().ok()?.state();
        Some(state)
    }

    /// `GET /repos/{owner}/{repo}/issues?page=&per_page=&filter=created`
    pub async fn fetch_articles(
        &self,
        repo: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<RawIssue>, Error> {
        let request = PageRequest::new(page, page_size)?;
        let url = format!(
            "{}/repos/{}/{repo}/issues",
            self.config.api_base, self.config.owner
        );

        self.get_json(&url, request.issue_query()).await
    }

    /// `GET /repos/{owner}/{repo}/issues/{number}`
    pub async fn fetch_article_by_number(&self, repo: &str, number: u64) -> Result<RawIssue, Error> {
        let url = format!(
            "{}/repos/{}/{repo}/issues/{number}",
            self.config.api_base, self.config.owner
        );

        self.get_json(&url, Vec::new()).await
    }

    /// `GET {comments_url}?page=&per_page=`
    pub async fn fetch_comments(
        &self,
        comments_url: &str,
        page: u32,
        page_size: u32,
    ) -> Result<Vec<RawComment>, Error> {
        let request = PageRequest::new(page, page_size)?;
        self.get_json(comments_url, request.comment_query()).await
    }

    /// Comments URL of an issue, for payloads that omit `comments_url`
    pub fn comments_url(&self, repo: &str, number: u64) -> String {
        format!(
            "{}/repos/{}/{repo}/issues/{number}/comments",
            self.config.api_base, self.config.owner
        )
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<T, Error> {
        self.begin_progress();
        let result = self.send(url, query).await;
        self.settle_progress(result.is_ok());
        result
    }

    async fn send<T: DeserializeOwned>(
        &self,
        url: &str,
        query: Vec<(&'static str, String)>,
    ) -> Result<T, Error> {
        log::debug!("GET {url} {query:?}");

        let mut request = self.client.get(url).query(&query);
        if let Some(credential) = &self.config.credential {
            request = request.query(&[("access_token", credential.expose())]);
        }

        // reqwest errors embed the full URL, token included
        let response = request
            .send()
            .await
            .map_err(|e| Error::transport(url, e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("GET {url} returned {status}");
            return Err(Error::transport(url, format!("HTTP {status}")));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::transport(url, e.without_url()))
    }

    fn begin_progress(&self) {
        if let Some(progress) = &self.progress {
            if let Ok(mut progress) = progress.lock() {
                progress.begin();
            }
        }
    }

    fn settle_progress(&self, success: bool) {
        if let Some(progress) = &self.progress {
            if let Ok(mut progress) = progress.lock() {
                if !progress.settle(success) {
                    log::debug!("Ignoring late settle, progress already {:?}", progress.state());
                }
            }
        }
    }
}
