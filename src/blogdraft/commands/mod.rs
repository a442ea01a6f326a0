use crate::config::BlogConfig;
use crate::draft::categories::Category;
use crate::model::Post;
use std::path::PathBuf;

pub mod categories;
pub mod config;
pub mod explore;
pub mod list;
pub mod show;
pub mod submit;

#[derive(Debug, Clone)]
pub struct BlogPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Choices offered by the explore filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub authors: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_posts: Vec<Post>,
    pub listed_posts: Vec<Post>,
    pub related_posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub facets: Option<Facets>,
    pub config: Option<BlogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_posts(mut self, posts: Vec<Post>) -> Self {
        self.affected_posts = posts;
        self
    }

    pub fn with_listed_posts(mut self, posts: Vec<Post>) -> Self {
        self.listed_posts = posts;
        self
    }

    pub fn with_related_posts(mut self, posts: Vec<Post>) -> Self {
        self.related_posts = posts;
        self
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = Some(facets);
        self
    }

    pub fn with_config(mut self, config: BlogConfig) -> Self {
        self.config = Some(config);
        self
    }
}

/// Catalog posts followed by saved posts: the collection the explore and
/// detail views read from.
pub(crate) fn all_posts<S: crate::store::PostStore>(store: &S) -> Vec<Post> {
    let mut posts = crate::catalog::posts().to_vec();
    posts.extend(store.load());
    posts
}
