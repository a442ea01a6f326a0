//! Required-field validation for a draft.
//!
//! Validation is a pure function of the post snapshot. The result is rebuilt
//! from scratch on every call; an empty result means the draft may be saved.

use crate::model::Post;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Content,
    AuthorName,
    AuthorBio,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::AuthorName => "author.name",
            Field::AuthorBio => "author.bio",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            Field::Title => "Blog title is required",
            Field::Content => "Blog content is required",
            Field::AuthorName => "Author name is required",
            Field::AuthorBio => "Author bio is required",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field name to error message. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn require(&mut self, field: Field, value: &str) {
        if value.trim().is_empty() {
            self.0.insert(field, field.required_message().to_string());
        }
    }
}

pub fn validate(post: &Post) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    errors.require(Field::Title, &post.title);
    errors.require(Field::Content, &post.content);
    errors.require(Field::AuthorName, &post.author.name);
    errors.require(Field::AuthorBio, &post.author.bio);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;

    fn complete() -> Post {
        let mut post = Post::blank();
        post.title = "Title".into();
        post.content = "<p>Body</p>".into();
        post.author = Author::new("Jane", "Writes things");
        post
    }

    #[test]
    fn complete_post_is_valid() {
        assert!(validate(&complete()).is_empty());
    }

    #[test]
    fn blank_post_reports_every_required_field() {
        let errors = validate(&Post::blank());
        let fields: Vec<_> = errors.iter().map(|(f, _)| f).collect();
        assert_eq!(
            fields,
            [
                Field::Title,
                Field::Content,
                Field::AuthorName,
                Field::AuthorBio
            ]
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut post = complete();
        post.title = " \t\n".into();
        post.author.bio = "   ".into();

        let errors = validate(&post);
        assert_eq!(errors.get(Field::Title), Some("Blog title is required"));
        assert_eq!(errors.get(Field::AuthorBio), Some("Author bio is required"));
        assert!(!errors.contains(Field::Content));
        assert!(!errors.contains(Field::AuthorName));
    }

    #[test]
    fn missing_title_only() {
        let mut post = complete();
        post.title.clear();

        let errors = validate(&post);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Title), Some("Blog title is required"));
    }

    #[test]
    fn validation_is_deterministic() {
        let mut post = complete();
        post.content.clear();
        assert_eq!(validate(&post), validate(&post));
    }
}
