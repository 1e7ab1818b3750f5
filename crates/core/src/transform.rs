//! Transformation functions from GitHub issues to presentation records
//!
//! Every function here is pure: the issue body is rendered to HTML and the
//! presentation fields are cut out of the rendered document along the
//! sentinel markers. Missing markers or labels fail the whole transform with
//! [`TransformError::MalformedContent`]; no partial record is ever produced.

use serde::Serialize;

use crate::category::Variant;
use crate::error::{ContentField, TransformError};
use crate::github::{RawComment, RawIssue};
use crate::markdown::MarkdownRenderer;
use crate::markers::{self, Marker};

/// Blog article
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Article {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub body_html: String,
    pub summary_html: String,
    pub banner_url: String,
    pub thumbnail_url: String,
    pub created_date: String,
    pub updated_date: String,
}

/// Monthly worklog entry
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WorklogEntry {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub color_hex: String,
    pub year: String,
    pub month: u32,
    pub summary_html: String,
    pub body_html: String,
    pub created_date: String,
}

/// Study note
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StudyNote {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub body_html: String,
    pub created_date: String,
    pub updated_date: String,
}

/// Issue comment
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub created_at: String,
    pub body_html: String,
}

/// A transformed issue of any category
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Record {
    Article(Article),
    Worklog(WorklogEntry),
    Study(StudyNote),
}

impl Record {
    pub fn id(&self) -> u64 {
        match self {
            Record::Article(a) => a.id,
            Record::Worklog(w) => w.id,
            Record::Study(s) => s.id,
        }
    }

    pub fn number(&self) -> u64 {
        match self {
            Record::Article(a) => a.number,
            Record::Worklog(w) => w.number,
            Record::Study(s) => s.number,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Record::Article(a) => &a.title,
            Record::Worklog(w) => &w.title,
            Record::Study(s) => &s.title,
        }
    }

    pub fn body_html(&self) -> &str {
        match self {
            Record::Article(a) => &a.body_html,
            Record::Worklog(w) => &w.body_html,
            Record::Study(s) => &s.body_html,
        }
    }

    pub fn created_date(&self) -> &str {
        match self {
            Record::Article(a) => &a.created_date,
            Record::Worklog(w) => &w.created_date,
            Record::Study(s) => &s.created_date,
        }
    }

    /// Listing excerpt; study notes have none
    pub fn summary_html(&self) -> Option<&str> {
        match self {
            Record::Article(a) => Some(&a.summary_html),
            Record::Worklog(w) => Some(&w.summary_html),
            Record::Study(_) => None,
        }
    }
}

/// Turns a raw issue into a presentation record
pub trait Transformer {
    fn transform(&self, issue: &RawIssue) -> Result<Record, TransformError>;
}

/// Transformer selected by category variant
#[derive(Debug, Clone)]
pub struct IssueTransformer {
    variant: Variant,
    renderer: MarkdownRenderer,
}

impl IssueTransformer {
    pub fn new(variant: Variant, renderer: MarkdownRenderer) -> Self {
        Self { variant, renderer }
    }

    /// Transform a whole page, stopping at the first malformed issue
    pub fn transform_all(&self, issues: &[RawIssue]) -> Result<Vec<Record>, TransformError> {
        issues.iter().map(|issue| self.transform(issue)).collect()
    }
}

impl Transformer for IssueTransformer {
    fn transform(&self, issue: &RawIssue) -> Result<Record, TransformError> {
        match self.variant {
            Variant::Blog => transform_article(issue, &self.renderer).map(Record::Article),
            Variant::Worklog => transform_worklog(issue, &self.renderer).map(Record::Worklog),
            Variant::Study => Ok(Record::Study(transform_study(issue, &self.renderer))),
        }
    }
}

/// Date portion of an ISO-8601 timestamp (`2020-03-01T10:00:00Z` → `2020-03-01`)
pub fn date_part(timestamp: &str) -> String {
    timestamp
        .split('T')
        .next()
        .unwrap_or(timestamp)
        .to_string()
}

/// Timestamp without the ISO separators (`2020-03-01T10:00:00Z` → `2020-03-01 10:00:00`)
pub fn comment_timestamp(timestamp: &str) -> String {
    timestamp.replace(['T', 'Z'], " ").trim().to_string()
}

/// Leading base-10 integer of a title (`"03月"` → 3)
pub fn parse_month(title: &str) -> Option<u32> {
    let trimmed = title.trim_start();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

/// Transform a blog issue
///
/// The summary is the segment after the first `<!-- summary -->` marker, the
/// banner URL the first URL after the first `<!-- banner -->` marker, and the
/// body everything after the second `<!-- banner -->` marker.
pub fn transform_article(
    issue: &RawIssue,
    renderer: &MarkdownRenderer,
) -> Result<Article, TransformError> {
    let html = renderer.render(&issue.body);
    let malformed = |field| TransformError::malformed(issue.id, field);

    let summary = markers::segment(&html, Marker::Summary, 1)
        .ok_or_else(|| malformed(ContentField::Summary))?;

    let banner_sections = markers::split(&html, Marker::Banner);
    let banner = banner_sections
        .get(1)
        .ok_or_else(|| malformed(ContentField::Banner))?;
    let body = banner_sections
        .get(2)
        .ok_or_else(|| malformed(ContentField::BannerBody))?;

    let banner_url =
        markers::first_url(banner).ok_or_else(|| malformed(ContentField::BannerUrl))?;

    Ok(Article {
        id: issue.id,
        number: issue.number,
        title: issue.title.clone(),
        body_html: body.to_string(),
        summary_html: summary.to_string(),
        banner_url: banner_url.to_string(),
        thumbnail_url: markers::thumbnail_url(banner_url),
        created_date: date_part(&issue.created_at),
        updated_date: date_part(&issue.updated_at),
    })
}

/// Transform a worklog issue
///
/// The first label carries the year (name) and the timeline color; the title
/// starts with the month number.
pub fn transform_worklog(
    issue: &RawIssue,
    renderer: &MarkdownRenderer,
) -> Result<WorklogEntry, TransformError> {
    let malformed = |field| TransformError::malformed(issue.id, field);

    let label = issue
        .labels
        .first()
        .ok_or_else(|| malformed(ContentField::Label))?;
    let month = parse_month(&issue.title).ok_or_else(|| malformed(ContentField::Month))?;

    let html = renderer.render(&issue.body);
    let sections = markers::split(&html, Marker::Summary);
    let summary = sections
        .get(1)
        .ok_or_else(|| malformed(ContentField::Summary))?;
    let body = sections
        .get(2)
        .ok_or_else(|| malformed(ContentField::SummaryBody))?;

    Ok(WorklogEntry {
        id: issue.id,
        number: issue.number,
        title: issue.title.clone(),
        color_hex: format!("#{}", label.color),
        year: label.name.clone(),
        month,
        summary_html: summary.to_string(),
        body_html: body.to_string(),
        created_date: date_part(&issue.created_at),
    })
}

/// Transform a study issue. Study notes carry no markers, so this cannot fail.
pub fn transform_study(issue: &RawIssue, renderer: &MarkdownRenderer) -> StudyNote {
    StudyNote {
        id: issue.id,
        number: issue.number,
        title: issue.title.clone(),
        body_html: renderer.render(&issue.body),
        created_date: date_part(&issue.created_at),
        updated_date: date_part(&issue.updated_at),
    }
}

/// Transform issue comments
pub fn transform_comments(comments: &[RawComment], renderer: &MarkdownRenderer) -> Vec<Comment> {
    comments
        .iter()
        .map(|c| Comment {
            id: c.id,
            created_at: comment_timestamp(&c.created_at),
            body_html: renderer.render(&c.body),
        })
        .collect()
}

/// Worklog entries of one year
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TimelineYear {
    pub year: String,
    pub color_hex: String,
    pub entries: Vec<WorklogEntry>,
}

/// Group worklog entries by year
///
/// Years keep the order in which they first appear; each year takes the color
/// of its first entry. Entries within a year come out in reverse input order,
/// so a newest-first listing yields months in ascending order.
pub fn group_timeline(entries: &[WorklogEntry]) -> Vec<TimelineYear> {
    let mut years: Vec<TimelineYear> = Vec::new();

    for entry in entries {
        match years.iter_mut().find(|y| y.year == entry.year) {
            Some(year) => year.entries.insert(0, entry.clone()),
            None => years.push(TimelineYear {
                year: entry.year.clone(),
                color_hex: entry.color_hex.clone(),
                entries: vec![entry.clone()],
            }),
        }
    }

    years
}
