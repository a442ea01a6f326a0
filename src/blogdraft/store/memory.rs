use super::PostStore;
use crate::error::{BlogError, Result};
use crate::model::Post;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    posts: Vec<Post>,
    fail_appends: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose appends always fail, for exercising the failure path.
    pub fn failing() -> Self {
        Self {
            posts: Vec::new(),
            fail_appends: true,
        }
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

impl PostStore for InMemoryStore {
    fn load(&self) -> Vec<Post> {
        self.posts.clone()
    }

    fn append(&mut self, post: &Post) -> Result<()> {
        if self.fail_appends {
            return Err(BlogError::Store("storage is unavailable".to_string()));
        }
        self.posts.push(post.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Author;
    use chrono::{NaiveDate, TimeZone, Utc};

    /// A valid post dated at noon UTC on `date` (`YYYY-MM-DD`).
    pub fn post_on(title: &str, category: &str, author: &str, date: &str) -> Post {
        let day = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        let mut post = Post::blank();
        post.title = title.to_string();
        post.category = category.to_string();
        post.author = Author::new(author, format!("{} writes here", author));
        post.content = format!("<p>{} body</p>", title);
        post.created_at = Utc.from_utc_datetime(&day.and_hms_opt(12, 0, 0).unwrap());
        post
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_posts(mut self, count: usize) -> Self {
            for i in 0..count {
                let post = post_on(
                    &format!("Test Post {}", i + 1),
                    "technology",
                    "Test Author",
                    "2024-03-01",
                );
                self.store.append(&post).unwrap();
            }
            self
        }

        pub fn with_post(mut self, post: Post) -> Self {
            self.store.append(&post).unwrap();
            self
        }
    }
}
