//! Collaborator contracts describing the persistence and enrichment adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{ArticleRecord, SideArticleRecord};
use crate::domain::types::ArticleType;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("resource not found")]
    NotFound,
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    #[error("database timeout")]
    Timeout,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

/// Predicate narrowing an article query.
///
/// `min_id` is an inclusive lower bound compared numerically against the
/// creation id, which is how the store expresses "created after".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleQueryFilter {
    pub min_id: Option<String>,
    pub exclude_types: Vec<ArticleType>,
    pub exclude_tags: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    CommentCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortRule {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortRule {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Ascending,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Descending,
        }
    }
}

/// Read access to the persistent article store.
///
/// Implementations own query execution, connection handling, and any
/// timeouts; the cache only sees the resulting records or a [`RepoError`].
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Runs a filtered, ordered, bounded query and returns the raw records.
    async fn query(
        &self,
        filter: &ArticleQueryFilter,
        sort: &[SortRule],
        limit: usize,
    ) -> Result<Vec<ArticleRecord>, RepoError>;

    /// Returns up to `limit` pseudo-randomly selected records.
    async fn fetch_random(&self, limit: usize) -> Result<Vec<ArticleRecord>, RepoError>;
}

/// Enrichment service projecting raw records into side-list view records.
///
/// Fills in author display data; not expected to fail. Whatever lookup errors
/// it hits internally are its own concern.
#[async_trait]
pub trait ArticleOrganizer: Send + Sync {
    async fn organize(&self, articles: Vec<ArticleRecord>) -> Vec<SideArticleRecord>;
}
