use crate::commands::{CmdMessage, CmdResult};
use crate::draft::validation::{self, ValidationErrors};
use crate::model::Post;
use crate::store::PostStore;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Appended to the store.
    Saved(Post),
    /// Required fields are missing; nothing was written.
    Invalid(ValidationErrors),
    /// The store refused the append; the draft is untouched and may be retried.
    Failed(String),
    /// This draft was already saved and is waiting to be reset.
    AlreadySaved(Uuid),
}

impl SubmitOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SubmitOutcome::Saved(_))
    }

    pub fn into_result(self) -> CmdResult {
        let mut result = CmdResult::default();
        match self {
            SubmitOutcome::Saved(post) => {
                result.add_message(CmdMessage::success("Blog post saved successfully!"));
                result.add_message(CmdMessage::info(format!("id: {}", post.id)));
                result.affected_posts.push(post);
            }
            SubmitOutcome::Invalid(errors) => {
                for (field, message) in errors.iter() {
                    result.add_message(CmdMessage::error(format!("{}: {}", field, message)));
                }
            }
            SubmitOutcome::Failed(reason) => {
                result.add_message(CmdMessage::error(format!(
                    "Could not save blog post: {}",
                    reason
                )));
            }
            SubmitOutcome::AlreadySaved(id) => {
                result.add_message(CmdMessage::warning(format!(
                    "Blog post {} was already saved",
                    id
                )));
            }
        }
        result
    }
}

/// Validates `post` and, only if it is valid, appends it to `store`.
pub fn run<S: PostStore>(store: &mut S, post: &Post) -> SubmitOutcome {
    let errors = validation::validate(post);
    if !errors.is_empty() {
        tracing::debug!(id = %post.id, missing = errors.len(), "submit blocked by validation");
        return SubmitOutcome::Invalid(errors);
    }

    match store.append(post) {
        Ok(()) => SubmitOutcome::Saved(post.clone()),
        Err(e) => {
            tracing::error!(id = %post.id, error = %e, "failed to save post");
            SubmitOutcome::Failed(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::draft::validation::Field;
    use crate::model::Author;
    use crate::store::memory::InMemoryStore;

    fn valid_post() -> Post {
        let mut post = Post::blank();
        post.title = "Title".into();
        post.content = "Body".into();
        post.author = Author::new("Ann", "Bio");
        post
    }

    #[test]
    fn valid_post_is_appended() {
        let mut store = InMemoryStore::new();
        let post = valid_post();
        assert_eq!(run(&mut store, &post), SubmitOutcome::Saved(post.clone()));
        assert_eq!(store.load(), vec![post]);
    }

    #[test]
    fn missing_title_blocks_append() {
        let mut store = InMemoryStore::new();
        let mut post = valid_post();
        post.title.clear();

        let SubmitOutcome::Invalid(errors) = run(&mut store, &post) else {
            panic!("expected validation failure");
        };
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Title), Some("Blog title is required"));
        assert!(store.is_empty());
    }

    #[test]
    fn store_failure_is_reported() {
        let mut store = InMemoryStore::failing();
        let outcome = run(&mut store, &valid_post());
        assert!(matches!(outcome, SubmitOutcome::Failed(_)));

        let result = outcome.into_result();
        assert!(matches!(result.messages[0].level, MessageLevel::Error));
        assert!(result.messages[0].content.contains("storage is unavailable"));
    }

    #[test]
    fn invalid_outcome_lists_each_field() {
        let result = SubmitOutcome::Invalid(validation::validate(&Post::blank())).into_result();
        assert_eq!(result.messages.len(), 4);
        assert_eq!(result.messages[0].content, "title: Blog title is required");
    }
}
