//! Document storage for site settings and news.
//!
//! [`DocumentStore`] is the seam the UI talks to; [`JsonFileStore`] keeps one
//! pretty-printed JSON file per record under a data directory.

mod json_file;

pub use json_file::JsonFileStore;

use crate::content::{HeroContent, NewsDraft, NewsItem, SiteSettings};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error at `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed record `{path}`: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no such record: {0}")]
    NotFound(String),

    #[error("invalid record id: {0:?}")]
    InvalidId(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

pub trait DocumentStore: Send + Sync {
    fn load_settings(&self) -> StoreResult<Option<SiteSettings>>;

    /// Changes whenever the stored settings record changes; `None` while no
    /// record exists.
    fn settings_fingerprint(&self) -> StoreResult<Option<String>>;

    /// Merge into the stored record. Fields this build does not know about
    /// are kept.
    fn save_settings(&self, settings: &SiteSettings) -> StoreResult<()>;

    /// Replace only `heroContent`.
    fn update_hero(&self, hero: &HeroContent) -> StoreResult<()>;

    /// Newest first.
    fn list_news(&self, limit: Option<usize>) -> StoreResult<Vec<NewsItem>>;

    fn add_news(&self, draft: NewsDraft) -> StoreResult<NewsItem>;

    fn update_news(&self, id: &str, draft: NewsDraft) -> StoreResult<NewsItem>;

    fn delete_news(&self, id: &str) -> StoreResult<()>;
}
