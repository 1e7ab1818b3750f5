//! Core library for folio
//!
//! This crate implements the **Functional Core** of folio, following the
//! Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! folio uses GitHub Issues as a headless content store for a blog. The
//! workspace is split in two crates:
//!
//! - **`folio_core`** (this crate): Pure transformation functions and in-memory state, zero I/O
//! - **`folio`**: HTTP fetching, wiring and the command line surface (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: rendering and transforming an issue depends only on the issue
//! - **No side effects**: no network, no filesystem, no globals
//! - **Testable**: every module is tested with fixture issues, no mocking required
//!
//! # Module Organization
//!
//! - [`github`]: Wire types of the GitHub Issues API and page requests
//! - [`markdown`]: GitHub-flavored Markdown rendering
//! - [`highlight`]: tree-sitter based syntax highlighting for code blocks
//! - [`markers`]: Sentinel comment markers that lay out authored issue bodies
//! - [`transform`]: Issue to article / worklog / study note / comment transforms
//! - [`category`]: Category registry (repository, navigation, transform variant)
//! - [`route`]: Route table of the presentation layer
//! - [`store`]: Append-only, category-keyed article cache
//! - [`progress`]: Loading / success / error indicator
//! - [`credential`]: Access token assembly and literal obfuscation
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use folio_core::category::Category;
//! use folio_core::markdown::MarkdownRenderer;
//! use folio_core::store::CacheStore;
//! use folio_core::transform::IssueTransformer;
//!
//! let transformer = IssueTransformer::new(Category::Worklog.variant(), MarkdownRenderer::default());
//! let records = transformer.transform_all(&issues)?;
//!
//! let mut store = CacheStore::with_keys(Category::keys());
//! store.append_articles(Category::Worklog.key(), records)?;
//! assert_eq!(store.read("worklog").len(), issues.len());
//! ```

pub mod category;
pub mod credential;
pub mod error;
pub mod github;
pub mod highlight;
pub mod markdown;
pub mod markers;
pub mod progress;
pub mod route;
pub mod store;
pub mod transform;
