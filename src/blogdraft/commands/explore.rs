//! Explore view: narrowing a post collection by category, author and date.
//!
//! Criteria are AND-combined and applied in that order. Filtering is stable:
//! matching posts keep their relative order. With no criteria the collection
//! comes back unchanged.

use crate::commands::{all_posts, CmdMessage, CmdResult, Facets};
use crate::error::{BlogError, Result};
use crate::model::Post;
use crate::store::PostStore;
use chrono::NaiveDate;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

pub const NO_MATCHES: &str = "No stories found matching your filters.";

/// Inclusive calendar-date bounds. The range only applies when both bounds
/// are set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.start?, self.end?))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.bounds() {
            Some((start, end)) => date >= start && date <= end,
            None => true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub author: Option<String>,
    pub date_range: Option<DateRange>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact category match. An empty string means "any".
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = non_empty(category.into());
        self
    }

    /// Exact author-name match. An empty string means "any".
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = non_empty(author.into());
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.author.is_none()
            && self.date_range.and_then(|r| r.bounds()).is_none()
    }

    pub fn matches(&self, post: &Post) -> bool {
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            if post.category != category {
                return false;
            }
        }
        if let Some(author) = self.author.as_deref().filter(|a| !a.is_empty()) {
            if post.author.name != author {
                return false;
            }
        }
        match &self.date_range {
            Some(range) => range.contains(post.published_on()),
            None => true,
        }
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Parses a `YYYY-MM-DD` bound.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| BlogError::InvalidDate(input.to_string()))
}

pub fn filter(posts: &[Post], criteria: &FilterCriteria) -> Vec<Post> {
    posts
        .iter()
        .filter(|post| criteria.matches(post))
        .cloned()
        .collect()
}

/// Distinct categories and author names in first-seen order.
pub fn facets(posts: &[Post]) -> Facets {
    let mut facets = Facets::default();
    for post in posts {
        if !post.category.is_empty() && !facets.categories.contains(&post.category) {
            facets.categories.push(post.category.clone());
        }
        if !facets.authors.contains(&post.author.name) {
            facets.authors.push(post.author.name.clone());
        }
    }
    facets
}

pub fn run<S: PostStore>(store: &S, criteria: &FilterCriteria) -> Result<CmdResult> {
    let posts = all_posts(store);
    let matched = filter(&posts, criteria);
    Ok(build_result(&posts, matched))
}

/// [`run`] with the simulated latency of [`run_with_latency`]. `Ok(None)` when
/// cancelled.
pub async fn run_delayed<S: PostStore>(
    store: &S,
    criteria: &FilterCriteria,
    latency: Duration,
    cancel: &CancellationToken,
) -> Result<Option<CmdResult>> {
    let posts = all_posts(store);
    let matched = run_with_latency(&posts, criteria, latency, cancel).await;
    Ok(matched.map(|m| build_result(&posts, m)))
}

fn build_result(posts: &[Post], matched: Vec<Post>) -> CmdResult {
    tracing::debug!(total = posts.len(), matched = matched.len(), "explore filter applied");
    let mut result = CmdResult::default()
        .with_facets(facets(posts))
        .with_listed_posts(matched);
    if result.listed_posts.is_empty() {
        result.add_message(CmdMessage::info(NO_MATCHES));
    }
    result
}

/// Like [`filter`], but surfaces the result only after `latency`, as a remote
/// call would. Returns `None` if `cancel` fires first.
pub async fn run_with_latency(
    posts: &[Post],
    criteria: &FilterCriteria,
    latency: Duration,
    cancel: &CancellationToken,
) -> Option<Vec<Post>> {
    tokio::select! {
        _ = cancel.cancelled() => {
            tracing::debug!("explore request cancelled");
            None
        }
        _ = tokio::time::sleep(latency) => Some(filter(posts, criteria)),
    }
}
