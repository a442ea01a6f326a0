use crate::draft::tags::TagSet;
use crate::error::{BlogError, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque handle to an uploaded image (a URL, a data URL or a local path).
///
/// Only image content types are accepted when a reference is created from an
/// upload; once stored it is just a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Creates a reference for an upload, rejecting anything that is not `image/*`.
    pub fn from_upload(location: impl Into<String>, content_type: &str) -> Result<Self> {
        let location = location.into();
        if location.trim().is_empty() {
            return Err(BlogError::InvalidImage("empty image reference".to_string()));
        }
        if !content_type.trim().to_ascii_lowercase().starts_with("image/") {
            return Err(BlogError::InvalidImage(format!(
                "{} is not an image ({})",
                location, content_type
            )));
        }
        Ok(Self(location))
    }

    /// Wraps an already trusted reference (catalog data, stored posts).
    pub fn trusted(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub bio: String,
    #[serde(rename = "imageUrl", default)]
    pub image: Option<ImageRef>,
}

impl Author {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
            image: None,
        }
    }
}

/// A blog post record. While it is being edited it is the draft; once
/// appended to the store it is a published post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    /// Category id (a registry slug such as `technology`).
    #[serde(default)]
    pub category: String,
    /// Marked-up body text, kept as an opaque string.
    pub content: String,
    #[serde(rename = "imageUrl", default)]
    pub image: Option<ImageRef>,
    #[serde(default)]
    pub tags: TagSet,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// A blank draft with a fresh id and creation timestamp.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            author: Author::default(),
            category: String::new(),
            content: String::new(),
            image: None,
            tags: TagSet::default(),
            created_at: Utc::now(),
        }
    }

    /// Calendar date the post was created on, used for date-range filtering.
    pub fn published_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_upload_requires_image_content_type() {
        assert!(ImageRef::from_upload("cover.png", "image/png").is_ok());
        assert!(ImageRef::from_upload("cover.PNG", "IMAGE/PNG").is_ok());
        assert!(matches!(
            ImageRef::from_upload("notes.pdf", "application/pdf"),
            Err(BlogError::InvalidImage(_))
        ));
        assert!(matches!(
            ImageRef::from_upload("  ", "image/png"),
            Err(BlogError::InvalidImage(_))
        ));
    }

    #[test]
    fn blank_posts_get_distinct_ids() {
        assert_ne!(Post::blank().id, Post::blank().id);
    }

    #[test]
    fn post_serializes_with_storage_field_names() {
        let mut post = Post::blank();
        post.title = "Hello".into();
        post.image = Some(ImageRef::trusted("data:image/png;base64,AAAA"));
        post.author.image = Some(ImageRef::trusted("me.jpg"));
        post.tags.insert("rust".into());

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["imageUrl"], "data:image/png;base64,AAAA");
        assert_eq!(value["author"]["imageUrl"], "me.jpg");
        assert_eq!(value["tags"], serde_json::json!(["rust"]));
        assert!(value.get("createdAt").is_some());
    }

    #[test]
    fn posts_without_optional_fields_deserialize() {
        let json = r#"{
            "id": "00000000-0000-0000-0000-000000000007",
            "title": "Old",
            "author": {"name": "A", "bio": "B"},
            "content": "<p>x</p>",
            "createdAt": "2024-03-12T10:00:00Z"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert!(post.image.is_none());
        assert!(post.tags.is_empty());
        assert_eq!(post.category, "");
        assert_eq!(
            post.published_on(),
            NaiveDate::from_ymd_opt(2024, 3, 12).unwrap()
        );
    }
}
