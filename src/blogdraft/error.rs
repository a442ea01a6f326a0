use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("Post not found: {0}")]
    PostNotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, BlogError>;
