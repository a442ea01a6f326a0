//! # Editing Session
//!
//! An [`EditingSession`] owns one draft from the first keystroke until it has
//! been saved and reset. It wires the pieces of [`crate::draft`] together:
//!
//! 1. every edit mutates the [`Draft`] and recomputes validation;
//! 2. [`EditingSession::submit`] saves only a valid draft;
//! 3. after a successful save the draft is reset once the configured delay
//!    has passed.
//!
//! The delayed reset is a [`Deferred`] tied to the session's cancellation
//! token. It is applied by the next interaction after the deadline, or by
//! awaiting [`EditingSession::settle`]. Dropping the session cancels it, so a
//! closed session never resets anything behind anyone's back.
//!
//! Session-wide preferences (theme, delays, metric settings) travel in a
//! [`SessionContext`] handed in at construction instead of living in globals.

use crate::commands::submit::{self, SubmitOutcome};
use crate::config::{BlogConfig, Theme};
use crate::deferred::Deferred;
use crate::draft::categories::{Category, CategoryRegistry};
use crate::draft::metrics::{DraftMetrics, MetricsSettings};
use crate::draft::tags::{TagChange, TagKey};
use crate::draft::validation::ValidationErrors;
use crate::draft::Draft;
use crate::model::ImageRef;
use crate::store::PostStore;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub theme: Theme,
    pub reset_delay: Duration,
    pub metrics: MetricsSettings,
}

impl SessionContext {
    pub fn from_config(config: &BlogConfig) -> Self {
        Self {
            theme: config.theme,
            reset_delay: config.reset_delay(),
            metrics: config.metrics(),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::from_config(&BlogConfig::default())
    }
}

pub struct EditingSession<S: PostStore> {
    store: S,
    context: SessionContext,
    draft: Draft,
    categories: CategoryRegistry,
    errors: ValidationErrors,
    saved: Option<Uuid>,
    pending_reset: Option<Deferred>,
    cancel: CancellationToken,
}

impl<S: PostStore> EditingSession<S> {
    pub fn new(store: S, context: SessionContext) -> Self {
        let draft = Draft::new();
        let errors = draft.validate();
        tracing::debug!(id = %draft.post().id, "editing session started");
        Self {
            store,
            context,
            draft,
            categories: CategoryRegistry::new(),
            errors,
            saved: None,
            pending_reset: None,
            cancel: CancellationToken::new(),
        }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn categories(&self) -> &CategoryRegistry {
        &self.categories
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validation result for the current draft, rebuilt after every edit.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn metrics(&self) -> DraftMetrics {
        self.draft.metrics(&self.context.metrics)
    }

    pub fn is_reset_pending(&self) -> bool {
        self.pending_reset.is_some()
    }

    /// Token cancelled when the session goes away. Hand out child tokens for
    /// work that must not outlive the session.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.edit("title", |d| d.set_title(title));
    }

    pub fn set_author_name(&mut self, name: impl Into<String>) {
        self.edit("author.name", |d| d.set_author_name(name));
    }

    pub fn set_author_bio(&mut self, bio: impl Into<String>) {
        self.edit("author.bio", |d| d.set_author_bio(bio));
    }

    pub fn set_author_image(&mut self, image: Option<ImageRef>) {
        self.edit("author.image", |d| d.set_author_image(image));
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.edit("content", |d| d.set_content(content));
    }

    pub fn attach_image(&mut self, image: ImageRef) {
        self.edit("image", |d| d.set_image(Some(image)));
    }

    pub fn clear_image(&mut self) {
        self.edit("image", |d| d.set_image(None));
    }

    pub fn select_category(&mut self, id: impl Into<String>) {
        self.edit("category", |d| d.set_category(id));
    }

    /// Registers a custom category and selects it. Blank names are ignored.
    pub fn add_category(&mut self, name: &str) -> Option<Category> {
        self.poll_reset();
        let category = self.categories.add_custom(name).cloned()?;
        let id = category.id.clone();
        self.edit("category", |d| d.set_category(id));
        Some(category)
    }

    pub fn tag_key(&mut self, key: TagKey) -> Option<TagChange> {
        self.edit("tags", |d| d.tag_key(key))
    }

    pub fn type_tags(&mut self, text: &str) -> Vec<TagChange> {
        self.edit("tags", |d| d.type_tags(text))
    }

    pub fn add_tags(&mut self, text: &str) -> Vec<TagChange> {
        self.edit("tags", |d| d.add_tags(text))
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.edit("tags", |d| d.remove_tag(tag))
    }

    /// Validates and saves the draft. On success the reset is scheduled after
    /// `reset_delay`.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.poll_reset();
        if let Some(id) = self.saved {
            return SubmitOutcome::AlreadySaved(id);
        }

        let outcome = submit::run(&mut self.store, self.draft.post());
        match &outcome {
            SubmitOutcome::Saved(post) => {
                self.saved = Some(post.id);
                self.pending_reset = Some(Deferred::after(
                    self.context.reset_delay,
                    self.cancel.child_token(),
                ));
            }
            SubmitOutcome::Invalid(errors) => self.errors = errors.clone(),
            SubmitOutcome::Failed(_) | SubmitOutcome::AlreadySaved(_) => {}
        }
        outcome
    }

    /// Applies the pending reset if its deadline passed. Returns whether it did.
    pub fn poll_reset(&mut self) -> bool {
        let due = self.pending_reset.as_ref().is_some_and(Deferred::is_due);
        if due {
            self.reset();
        }
        due
    }

    /// Waits for the pending reset and applies it. Returns `false` when nothing
    /// was pending or the reset got cancelled.
    pub async fn settle(&mut self) -> bool {
        let fired = match self.pending_reset.as_ref() {
            Some(pending) => pending.wait().await,
            None => return false,
        };
        if fired {
            self.reset();
        }
        fired
    }

    /// Ends the session, cancelling anything still pending.
    pub fn close(self) {}

    fn edit<R>(&mut self, field: &'static str, f: impl FnOnce(&mut Draft) -> R) -> R {
        self.poll_reset();
        let out = f(&mut self.draft);
        self.errors = self.draft.validate();
        tracing::debug!(field, invalid = self.errors.len(), "draft updated");
        out
    }

    fn reset(&mut self) {
        self.pending_reset = None;
        self.saved = None;
        self.draft = Draft::new();
        self.errors = self.draft.validate();
        tracing::info!(id = %self.draft.post().id, "draft reset");
    }
}

impl<S: PostStore> Drop for EditingSession<S> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}
