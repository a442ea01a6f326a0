//! # Storage Layer
//!
//! Saved posts are kept as one ordered list under a single well-known key
//! ([`STORE_KEY`]). The [`PostStore`] trait is deliberately small: load the
//! whole list, or append one post to it. There is no update or delete, and a
//! single writer is assumed, so the last write wins.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the list is a JSON array in `<data dir>/blogs.json`
//! - [`memory::InMemoryStore`]: in-memory list for tests
//!
//! ## Failure Model
//!
//! Loading never fails. A missing blob is an empty list, and so is a blob that
//! cannot be read or parsed (a warning is logged). Appending reports I/O and
//! serialization failures to the caller.

use crate::error::Result;
use crate::model::Post;
use uuid::Uuid;

pub mod fs;
pub mod memory;

/// The key the post list is stored under.
pub const STORE_KEY: &str = "blogs";

pub trait PostStore {
    /// All saved posts in the order they were appended.
    fn load(&self) -> Vec<Post>;

    /// Appends `post` at the end of the saved list.
    fn append(&mut self, post: &Post) -> Result<()>;

    fn get(&self, id: &Uuid) -> Option<Post> {
        self.load().into_iter().find(|p| &p.id == id)
    }
}

impl<T: PostStore + ?Sized> PostStore for &mut T {
    fn load(&self) -> Vec<Post> {
        (**self).load()
    }

    fn append(&mut self, post: &Post) -> Result<()> {
        (**self).append(post)
    }

    fn get(&self, id: &Uuid) -> Option<Post> {
        (**self).get(id)
    }
}
