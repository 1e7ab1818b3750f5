//! In-process mock of the GitHub Issues API for shell tests

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::{header::USER_AGENT, HeaderMap, StatusCode, Uri},
    routing::get,
    Json, Router,
};
use folio_core::credential::Credential;
use serde_json::{json, Value};

use crate::github::GithubConfig;

/// A request as seen by the mock
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub query: HashMap<String, String>,
    pub user_agent: Option<String>,
}

/// Builder for the mock server
#[derive(Debug, Default)]
pub struct MockGithub {
    pages: HashMap<(String, u32), Vec<Value>>,
    delays: HashMap<(String, u32), u64>,
    comments: HashMap<u64, Vec<Value>>,
    failing: HashSet<String>,
    omit_comments_url: bool,
}

impl MockGithub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues returned for `page` of `repo`
    pub fn page(mut self, repo: &str, page: u32, issues: Vec<Value>) -> Self {
        self.pages.insert((repo.to_string(), page), issues);
        self
    }

    /// Delay the response of `page` of `repo`
    pub fn delay(mut self, repo: &str, page: u32, millis: u64) -> Self {
        self.delays.insert((repo.to_string(), page), millis);
        self
    }

    /// Comments of issue `number`
    pub fn comments(mut self, number: u64, comments: Vec<Value>) -> Self {
        self.comments.insert(number, comments);
        self
    }

    /// Every listing of `repo` answers 500
    pub fn failing(mut self, repo: &str) -> Self {
        self.failing.insert(repo.to_string());
        self
    }

    /// Single-issue payloads come without `comments_url`
    pub fn without_comments_url(mut self) -> Self {
        self.omit_comments_url = true;
        self
    }

    pub async fn spawn(self) -> MockServer {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let requests = Arc::new(Mutex::new(Vec::new()));

        let state = Arc::new(MockState {
            base: base.clone(),
            builder: self,
            requests: requests.clone(),
        });

        let router = Router::new()
            .route("/repos/{owner}/{repo}/issues", get(list_issues))
            .route("/repos/{owner}/{repo}/issues/{number}", get(get_issue))
            .route(
                "/repos/{owner}/{repo}/issues/{number}/comments",
                get(list_comments),
            )
            .with_state(state);

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        MockServer { base, requests }
    }
}

/// Handle to a running mock
pub struct MockServer {
    pub base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockServer {
    /// Requests received so far, in arrival order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

struct MockState {
    base: String,
    builder: MockGithub,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockState {
    fn record(&self, uri: &Uri, query: HashMap<String, String>, headers: &HeaderMap) {
        let user_agent = headers
            .get(USER_AGENT)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        self.requests.lock().unwrap().push(RecordedRequest {
            path: uri.path().to_string(),
            query,
            user_agent,
        });
    }
}

async fn list_issues(
    State(state): State<Arc<MockState>>,
    Path((_owner, repo)): Path<(String, String)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<Value>, StatusCode> {
    let page: u32 = query
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    state.record(&uri, query, &headers);

    if let Some(millis) = state.builder.delays.get(&(repo.clone(), page)) {
        tokio::time::sleep(Duration::from_millis(*millis)).await;
    }

    if state.builder.failing.contains(&repo) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }

    let issues = state
        .builder
        .pages
        .get(&(repo, page))
        .cloned()
        .unwrap_or_default();

    Ok(Json(Value::Array(issues)))
}

async fn get_issue(
    State(state): State<Arc<MockState>>,
    Path((owner, repo, number)): Path<(String, String, u64)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Json<Value>, StatusCode> {
    state.record(&uri, query, &headers);

    let mut issue = state
        .builder
        .pages
        .iter()
        .filter(|((r, _), _)| *r == repo)
        .flat_map(|(_, issues)| issues.iter())
        .find(|issue| issue["number"] == json!(number))
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)?;

    if !state.builder.omit_comments_url {
        issue["comments_url"] = json!(format!(
            "{}/repos/{owner}/{repo}/issues/{number}/comments",
            state.base
        ));
    }

    Ok(Json(issue))
}

async fn list_comments(
    State(state): State<Arc<MockState>>,
    Path((_owner, _repo, number)): Path<(String, String, u64)>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    uri: Uri,
) -> Json<Value> {
    state.record(&uri, query, &headers);

    let comments = state
        .builder
        .comments
        .get(&number)
        .cloned()
        .unwrap_or_default();

    Json(Value::Array(comments))
}

/// Config pointing at `base` with the token `headhalftailhalf`
pub fn test_config(base: &str) -> GithubConfig {
    GithubConfig {
        api_base: base.to_string(),
        owner: "monine".to_string(),
        credential: Some(Credential::from_halves("headhalf", "tailhalf")),
    }
}

/// A well-formed blog issue
pub fn blog_issue(id: u64, number: u64) -> Value {
    json!({
        "id": id,
        "number": number,
        "title": format!("Article {number}"),
        "body": format!(
            "<!-- summary -->\n\nSummary {number}\n\n<!-- summary -->\n\n<!-- banner -->\n\n![banner](https://img.example.com/{number}/750)\n\n<!-- banner -->\n\nBody {number}\n"
        ),
        "created_at": "2020-03-01T10:20:30Z",
        "updated_at": "2020-04-02T08:00:00Z",
        "labels": [],
        "comments": 0
    })
}

/// A blog issue without any markers
pub fn malformed_blog_issue(id: u64, number: u64) -> Value {
    json!({
        "id": id,
        "number": number,
        "title": "No markers",
        "body": "Just text",
        "created_at": "2020-03-01T10:20:30Z",
        "updated_at": "2020-03-01T10:20:30Z",
        "labels": []
    })
}

/// A worklog issue for `month` of `year`
pub fn worklog_issue(id: u64, year: &str, color: &str, month: u32) -> Value {
    json!({
        "id": id,
        "number": id,
        "title": format!("{month}月"),
        "body": format!("intro\n\n<!-- summary -->\n\nsummary {month}\n\n<!-- summary -->\n\nbody {month}\n"),
        "created_at": format!("{year}-{month:02}-28T12:00:00Z"),
        "updated_at": format!("{year}-{month:02}-28T12:00:00Z"),
        "labels": [{ "name": year, "color": color }]
    })
}

/// A study issue
pub fn study_issue(id: u64, number: u64) -> Value {
    json!({
        "id": id,
        "number": number,
        "title": format!("Note {number}"),
        "body": format!("Note body {number}"),
        "created_at": "2021-06-01T00:00:00Z",
        "updated_at": "2021-06-02T00:00:00Z",
        "labels": []
    })
}

/// An issue comment
pub fn comment_json(id: u64, body: &str) -> Value {
    json!({
        "id": id,
        "body": body,
        "created_at": "2020-03-01T10:20:30Z",
        "updated_at": "2020-03-01T10:20:30Z"
    })
}
