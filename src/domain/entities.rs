//! Domain entities mirrored from persistent storage.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::types::ArticleType;

/// Full stored representation of one article.
///
/// The id is the creation id assigned by the persistence layer: a
/// millisecond-timestamp-based string that compares numerically in creation
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub permalink: String,
    pub author_id: String,
    pub article_type: ArticleType,
    pub tags: Vec<String>,
    pub comment_count: i64,
    pub view_count: i64,
    pub content: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// Lightweight view of an article, sufficient for rendering a side-list link.
///
/// Produced by the enrichment collaborator from raw [`ArticleRecord`]s; has no
/// identity beyond its source article id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideArticleRecord {
    pub id: String,
    pub title: String,
    pub permalink: String,
    pub author_id: String,
    pub author_name: String,
    pub author_avatar_url: String,
}
