use crate::api::{BlogApi, BlogPaths};
use crate::config::BlogConfig;
use crate::error::{BlogError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::PathBuf;

/// Overrides the data directory when set.
pub const HOME_ENV: &str = "BLOGDRAFT_HOME";

pub struct BlogContext {
    pub api: BlogApi<FileStore>,
    pub config: BlogConfig,
}

/// Data directory: `$BLOGDRAFT_HOME` if set and non-empty, otherwise the
/// platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "blogdraft", "blogdraft")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BlogError::Store("Could not determine data directory".to_string()))
}

pub fn initialize() -> Result<BlogContext> {
    let data_dir = data_dir()?;
    initialize_at(data_dir)
}

pub fn initialize_at(data_dir: PathBuf) -> Result<BlogContext> {
    let config = match BlogConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "could not load config, using defaults");
            BlogConfig::default()
        }
    };
    tracing::debug!(data_dir = %data_dir.display(), "initialized");

    let store = FileStore::new(data_dir.clone());
    let api = BlogApi::new(store, BlogPaths { data_dir });
    Ok(BlogContext { api, config })
}
