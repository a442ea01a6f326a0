use super::{PostStore, STORE_KEY};
use crate::error::{BlogError, Result};
use crate::model::Post;
use std::fs;
use std::path::PathBuf;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the blob holding the post list.
    pub fn blob_path(&self) -> PathBuf {
        self.root.join(format!("{}.json", STORE_KEY))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BlogError::Io)?;
        }
        Ok(())
    }

    fn save_all(&self, posts: &[Post]) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(posts).map_err(BlogError::Serialization)?;
        fs::write(self.blob_path(), content).map_err(BlogError::Io)?;
        Ok(())
    }
}

impl PostStore for FileStore {
    fn load(&self) -> Vec<Post> {
        let path = self.blob_path();
        if !path.exists() {
            return Vec::new();
        }
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not read stored posts, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "stored posts are malformed, treating as empty");
                Vec::new()
            }
        }
    }

    fn append(&mut self, post: &Post) -> Result<()> {
        let mut posts = self.load();
        posts.push(post.clone());
        self.save_all(&posts)?;
        tracing::info!(id = %post.id, total = posts.len(), "post appended");
        Ok(())
    }
}
