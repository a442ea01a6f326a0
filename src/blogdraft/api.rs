//! # API Facade
//!
//! A thin facade over the command layer and the editing session. Every UI
//! (the bundled CLI, a web front end, tests) goes through [`BlogApi`].
//!
//! The facade dispatches, normalizes inputs (e.g. parsing ids) and returns
//! structured results. It does no printing and holds no business logic.
//!
//! `BlogApi<S: PostStore>` is generic over storage: `BlogApi<FileStore>` in
//! production, `BlogApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::BlogConfig;
use crate::draft::categories::CategoryRegistry;
use crate::error::{BlogError, Result};
use crate::model::Post;
use crate::session::{EditingSession, SessionContext};
use crate::store::PostStore;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

pub struct BlogApi<S: PostStore> {
    store: S,
    paths: commands::BlogPaths,
}

impl<S: PostStore> BlogApi<S> {
    pub fn new(store: S, paths: commands::BlogPaths) -> Self {
        Self { store, paths }
    }

    /// Starts an editing session that saves into this API's store.
    pub fn start_session(&mut self, context: SessionContext) -> EditingSession<&mut S> {
        EditingSession::new(&mut self.store, context)
    }

    pub fn explore(&self, criteria: &FilterCriteria) -> Result<commands::CmdResult> {
        commands::explore::run(&self.store, criteria)
    }

    /// Explore with simulated latency. `Ok(None)` when cancelled.
    pub async fn explore_with_latency(
        &self,
        criteria: &FilterCriteria,
        latency: Duration,
        cancel: &CancellationToken,
    ) -> Result<Option<commands::CmdResult>> {
        commands::explore::run_delayed(&self.store, criteria, latency, cancel).await
    }

    pub fn show_post(&self, id: &str) -> Result<commands::CmdResult> {
        let id = parse_id(id)?;
        commands::show::run(&self.store, &id)
    }

    pub fn list_posts(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn categories(&self, registry: &CategoryRegistry) -> Result<commands::CmdResult> {
        commands::categories::run(registry)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn load_config(&self) -> Result<BlogConfig> {
        BlogConfig::load(&self.paths.data_dir)
    }

    pub fn saved_posts(&self) -> Vec<Post> {
        self.store.load()
    }

    pub fn paths(&self) -> &commands::BlogPaths {
        &self.paths
    }
}

fn parse_id(input: &str) -> Result<Uuid> {
    Uuid::parse_str(input.trim()).map_err(|_| BlogError::Api(format!("Invalid post id: {}", input)))
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::explore::{DateRange, FilterCriteria};
pub use crate::commands::submit::SubmitOutcome;
pub use crate::commands::{BlogPaths, CmdMessage, CmdResult, Facets, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::path::PathBuf;

    fn api() -> BlogApi<InMemoryStore> {
        BlogApi::new(
            InMemoryStore::new(),
            BlogPaths {
                data_dir: PathBuf::from("/nonexistent/blogdraft"),
            },
        )
    }

    #[test]
    fn session_saves_into_api_store() {
        let mut api = api();
        {
            let mut session = api.start_session(SessionContext::default());
            session.set_title("Title");
            session.set_content("Body");
            session.set_author_name("Ann");
            session.set_author_bio("Bio");
            assert!(session.submit().is_saved());
        }
        assert_eq!(api.saved_posts().len(), 1);
        assert_eq!(api.list_posts().unwrap().listed_posts[0].title, "Title");
    }

    #[test]
    fn saved_post_shares_catalog_categories() {
        let mut api = api();
        {
            let mut session = api.start_session(SessionContext::default());
            session.set_title("My Rust Notes");
            session.set_content("Ownership and borrowing");
            session.set_author_name("Ann");
            session.set_author_bio("Bio");
            session.select_category("technology");
            assert!(session.submit().is_saved());
        }

        let catalog_category = crate::catalog::posts()[0].category.clone();
        let result = api
            .explore(&FilterCriteria::new().category(catalog_category.clone()))
            .unwrap();
        let titles: Vec<_> = result.listed_posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            [
                "Getting Started with Next.js",
                "The Future of Artificial Intelligence",
                "My Rust Notes"
            ]
        );

        let facets = result.facets.unwrap();
        let matching = facets
            .categories
            .iter()
            .filter(|c| c.eq_ignore_ascii_case(&catalog_category))
            .count();
        assert_eq!(matching, 1);

        let saved_id = api.saved_posts()[0].id.to_string();
        let shown = api.show_post(&saved_id).unwrap();
        assert_eq!(
            shown.related_posts[0].title,
            "Getting Started with Next.js"
        );
    }

    #[test]
    fn show_post_parses_id() {
        let api = api();
        let result = api
            .show_post("00000000-0000-0000-0000-000000000003")
            .unwrap();
        assert_eq!(result.affected_posts[0].category, "travel");
        assert!(matches!(api.show_post("three"), Err(BlogError::Api(_))));
    }

    #[test]
    fn explore_dispatches_filter() {
        let api = api();
        let result = api.explore(&FilterCriteria::new().author("John Doe")).unwrap();
        assert_eq!(result.listed_posts.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn explore_with_latency_can_be_cancelled() {
        let api = api();
        let cancel = CancellationToken::new();
        let criteria = FilterCriteria::new().category("food");

        let result = api
            .explore_with_latency(&criteria, Duration::from_millis(500), &cancel)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(result.listed_posts.len(), 1);

        cancel.cancel();
        let cancelled = api
            .explore_with_latency(&criteria, Duration::from_millis(500), &cancel)
            .await
            .unwrap();
        assert!(cancelled.is_none());
    }
}
