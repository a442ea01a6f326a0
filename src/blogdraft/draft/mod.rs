//! # Draft Editing
//!
//! Everything that happens to a post before it is saved lives here:
//!
//! - [`Draft`]: the field store holding the post being written
//! - [`validation`]: required-field checks
//! - [`metrics`]: word count, reading time, progress and preview
//! - [`tags`]: the ordered tag set and its key-driven editor
//! - [`categories`]: predefined and session-added categories
//! - [`tips`]: rotating writing tips and quotes
//!
//! All of it is synchronous and side-effect free apart from mutating the draft
//! itself. Session concerns (saving, delayed reset) are in [`crate::session`].

pub mod categories;
pub mod metrics;
pub mod tags;
pub mod tips;
pub mod validation;

use crate::model::{ImageRef, Post};
use metrics::{DraftMetrics, MetricsSettings};
use tags::{TagChange, TagInput, TagKey, TagSet};
use validation::ValidationErrors;

/// The field store: current values of the post being written plus the
/// half-typed tag buffer.
#[derive(Debug, Clone)]
pub struct Draft {
    post: Post,
    tag_input: TagInput,
}

impl Default for Draft {
    fn default() -> Self {
        Self::new()
    }
}

impl Draft {
    pub fn new() -> Self {
        Self {
            post: Post::blank(),
            tag_input: TagInput::new(),
        }
    }

    /// The current snapshot.
    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn tags(&self) -> &TagSet {
        &self.post.tags
    }

    pub fn tag_buffer(&self) -> &str {
        self.tag_input.buffer()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.post.title = title.into();
    }

    pub fn set_author_name(&mut self, name: impl Into<String>) {
        self.post.author.name = name.into();
    }

    pub fn set_author_bio(&mut self, bio: impl Into<String>) {
        self.post.author.bio = bio.into();
    }

    pub fn set_author_image(&mut self, image: Option<ImageRef>) {
        self.post.author.image = image;
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.post.category = category.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.post.content = content.into();
    }

    pub fn set_image(&mut self, image: Option<ImageRef>) {
        self.post.image = image;
    }

    pub fn tag_key(&mut self, key: TagKey) -> Option<TagChange> {
        self.tag_input.handle_key(&mut self.post.tags, key)
    }

    pub fn type_tags(&mut self, text: &str) -> Vec<TagChange> {
        self.tag_input.type_str(&mut self.post.tags, text)
    }

    /// Adds every tag of a complete list at once. Repeats are skipped and the
    /// half-typed buffer is left alone.
    pub fn add_tags(&mut self, text: &str) -> Vec<TagChange> {
        let mut added = Vec::new();
        for tag in tags::split_tags(text) {
            if self.post.tags.insert(tag.to_string()) {
                added.push(TagChange::Added(tag.to_string()));
            }
        }
        added
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.post.tags.remove(tag)
    }

    pub fn validate(&self) -> ValidationErrors {
        validation::validate(&self.post)
    }

    pub fn metrics(&self, settings: &MetricsSettings) -> DraftMetrics {
        DraftMetrics::compute(&self.post, settings)
    }
}

#[cfg(test)]
mod tests {
    use super::validation::Field;
    use super::*;

    #[test]
    fn new_draft_is_empty_and_invalid() {
        let draft = Draft::new();
        assert_eq!(draft.post().title, "");
        assert!(draft.tags().is_empty());
        assert_eq!(draft.validate().len(), 4);
        assert_eq!(draft.metrics(&MetricsSettings::default()).progress, 0);
    }

    #[test]
    fn setters_update_snapshot() {
        let mut draft = Draft::new();
        draft.set_title("My Post");
        draft.set_author_name("Sam");
        draft.set_author_bio("Writer");
        draft.set_category("travel");
        draft.set_content("<p>Some words here</p>");
        draft.set_image(Some(ImageRef::trusted("cover.jpg")));
        draft.type_tags("trips, europe\n");

        let post = draft.post();
        assert_eq!(post.title, "My Post");
        assert_eq!(post.author.name, "Sam");
        assert_eq!(post.category, "travel");
        assert_eq!(post.tags.as_slice(), ["trips", "europe"]);
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn validation_follows_every_edit() {
        let mut draft = Draft::new();
        draft.set_title("x");
        assert!(!draft.validate().contains(Field::Title));
        draft.set_title("  ");
        assert!(draft.validate().contains(Field::Title));
    }

    #[test]
    fn word_count_tracks_content() {
        let mut draft = Draft::new();
        let settings = MetricsSettings::default();
        draft.set_content("one two three");
        assert_eq!(draft.metrics(&settings).word_count, 3);
        draft.set_content("");
        assert_eq!(draft.metrics(&settings).word_count, 0);
        assert_eq!(draft.metrics(&settings).reading_minutes, None);
    }

    #[test]
    fn remove_tag_by_name() {
        let mut draft = Draft::new();
        draft.type_tags("a b c ");
        assert!(draft.remove_tag("b"));
        assert_eq!(draft.tags().as_slice(), ["a", "c"]);
    }

    #[test]
    fn add_tags_skips_repeats_without_merging() {
        let mut draft = Draft::new();
        let added = draft.add_tags("rust rust web,, cli");
        assert_eq!(draft.tags().as_slice(), ["rust", "web", "cli"]);
        assert_eq!(added.len(), 3);
        assert_eq!(draft.tag_buffer(), "");
    }

    #[test]
    fn add_tags_leaves_typed_buffer_alone() {
        let mut draft = Draft::new();
        draft.type_tags("half");
        draft.add_tags("rust");
        assert_eq!(draft.tag_buffer(), "half");
        assert_eq!(draft.tags().as_slice(), ["rust"]);
    }

    #[test]
    fn duplicate_keystroke_commit_keeps_buffer() {
        let mut draft = Draft::new();
        draft.type_tags("rust rust");
        assert_eq!(draft.tag_key(TagKey::Enter), None);
        assert_eq!(draft.tag_buffer(), "rust");
        assert_eq!(draft.tags().as_slice(), ["rust"]);
    }
}
