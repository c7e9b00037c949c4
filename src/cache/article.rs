//! Article cache facade.
//!
//! Composes the bounded article and abstract caches with the two side-list
//! snapshots. This is the only cache surface the rest of the application
//! sees; request handlers and the refresh scheduler share one instance by
//! `Arc`.

use std::sync::Arc;

use metrics::counter;
use serde::Serialize;
use time::{Duration, OffsetDateTime};
use tracing::{debug, error, instrument};

use crate::application::repos::{
    ArticleOrganizer, ArticleQueryFilter, ArticleRepository, RepoError, SortField, SortRule,
};
use crate::domain::entities::{ArticleRecord, SideArticleRecord};
use crate::domain::error::DomainError;
use crate::domain::types::{ArticleType, SANDBOX_TAG_TITLE};

use super::config::{CacheConfig, CacheConfigError};
use super::snapshot::SnapshotList;
use super::store::BoundedCache;

const METRIC_SIDE_REFRESH: &str = "agora_cache_side_refresh_total";

/// Articles older than this never qualify for the hot side list.
const HOT_WINDOW_DAYS: i64 = 7;

/// Entry counts across the cache surfaces, for dashboards and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub articles: usize,
    pub abstracts: usize,
    pub side_hot: usize,
    pub side_random: usize,
}

/// The article cache.
///
/// Holds full article records and their derived abstracts in two bounded LRU
/// caches sharing one configured capacity, plus the hot and random side-list
/// snapshots. A write to an article record purges the cached abstract for the
/// same id; the side lists change only through the `load_side_*` operations.
///
/// All operations are safe to call from concurrent request handlers. Only the
/// `load_side_*` pair performs I/O.
pub struct ArticleCache {
    config: CacheConfig,
    articles: BoundedCache<String, ArticleRecord>,
    abstracts: BoundedCache<String, String>,
    side_hot: SnapshotList<SideArticleRecord>,
    side_random: SnapshotList<SideArticleRecord>,
    repository: Arc<dyn ArticleRepository>,
    organizer: Arc<dyn ArticleOrganizer>,
}

impl ArticleCache {
    /// Create the cache with its collaborators.
    ///
    /// Fails if the configured article capacity is zero.
    pub fn new(
        config: CacheConfig,
        repository: Arc<dyn ArticleRepository>,
        organizer: Arc<dyn ArticleOrganizer>,
    ) -> Result<Self, CacheConfigError> {
        let capacity = config.article_limit_non_zero()?;
        Ok(Self {
            config,
            articles: BoundedCache::new("articles", capacity),
            abstracts: BoundedCache::new("abstracts", capacity),
            side_hot: SnapshotList::new("side_hot"),
            side_random: SnapshotList::new("side_random"),
            repository,
            organizer,
        })
    }

    /// Gets an article by id, as an independent copy.
    ///
    /// `None` means the caller should fall back to the persistent store and
    /// then [`put_article`](Self::put_article) the result.
    pub fn get_article(&self, id: &str) -> Option<ArticleRecord> {
        self.articles.get(&id.to_string())
    }

    /// Adds or updates an article record.
    ///
    /// Any cached abstract for the same id is purged: the abstract is derived
    /// from the record and must be recomputed after a write.
    pub fn put_article(&self, article: ArticleRecord) -> Result<(), DomainError> {
        if article.id.is_empty() {
            return Err(DomainError::validation("article record has no id"));
        }

        let id = article.id.clone();
        self.articles.put(id.clone(), article);
        self.abstracts.remove(&id);
        Ok(())
    }

    /// Removes an article and its cached abstract.
    pub fn remove_article(&self, id: &str) {
        let key = id.to_string();
        self.articles.remove(&key);
        self.abstracts.remove(&key);
    }

    /// Gets the cached abstract for an article, if one has been computed.
    pub fn get_article_abstract(&self, id: &str) -> Option<String> {
        self.abstracts.get(&id.to_string())
    }

    /// Caches a freshly computed abstract. The entity cache is untouched.
    pub fn put_article_abstract(&self, id: impl Into<String>, text: impl Into<String>) {
        self.abstracts.put(id.into(), text.into());
    }

    /// Returns the hot side list, empty before the first successful refresh.
    pub fn get_side_hot_articles(&self) -> Vec<SideArticleRecord> {
        self.side_hot.get()
    }

    /// Refreshes the hot side list from the repository.
    ///
    /// Hot means: created within the last week, not a discussion, not tagged
    /// sandbox; most-commented first, oldest first among ties. On repository
    /// failure the previous snapshot stays in place.
    #[instrument(skip(self))]
    pub async fn load_side_hot_articles(&self) {
        let filter = ArticleQueryFilter {
            min_id: Some(hot_window_floor_id(OffsetDateTime::now_utc())),
            exclude_types: vec![ArticleType::Discussion],
            exclude_tags: vec![SANDBOX_TAG_TITLE.to_string()],
        };
        let sort = [
            SortRule::descending(SortField::CommentCount),
            SortRule::ascending(SortField::Id),
        ];

        let fetched = self
            .repository
            .query(&filter, &sort, self.config.side_hot_limit)
            .await;
        self.finish_side_load("hot", &self.side_hot, fetched).await;
    }

    /// Returns the random side list, empty before the first successful
    /// refresh.
    pub fn get_side_random_articles(&self) -> Vec<SideArticleRecord> {
        self.side_random.get()
    }

    /// Refreshes the random side list from the repository. On repository
    /// failure the previous snapshot stays in place.
    #[instrument(skip(self))]
    pub async fn load_side_random_articles(&self) {
        let fetched = self
            .repository
            .fetch_random(self.config.side_random_limit)
            .await;
        self.finish_side_load("random", &self.side_random, fetched)
            .await;
    }

    /// Empties every cache surface: both bounded caches and both snapshots.
    pub fn clear(&self) {
        self.articles.clear();
        self.abstracts.clear();
        self.side_hot.clear();
        self.side_random.clear();
    }

    /// Current entry counts.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            articles: self.articles.len(),
            abstracts: self.abstracts.len(),
            side_hot: self.side_hot.len(),
            side_random: self.side_random.len(),
        }
    }

    async fn finish_side_load(
        &self,
        list: &'static str,
        target: &SnapshotList<SideArticleRecord>,
        fetched: Result<Vec<ArticleRecord>, RepoError>,
    ) {
        match fetched {
            Ok(raw) => {
                let organized = self.organizer.organize(raw).await;
                debug!(list, count = organized.len(), "loaded side articles");
                target.replace(organized);
                counter!(METRIC_SIDE_REFRESH, "list" => list, "outcome" => "replaced")
                    .increment(1);
            }
            Err(err) => {
                counter!(METRIC_SIDE_REFRESH, "list" => list, "outcome" => "skipped").increment(1);
                error!(
                    list,
                    error = %err,
                    "loading side articles failed, keeping previous snapshot"
                );
            }
        }
    }
}

/// Creation-id floor for the hot window: the millisecond timestamp of
/// `now` minus the window, rendered the way the store renders ids.
fn hot_window_floor_id(now: OffsetDateTime) -> String {
    let floor = now - Duration::days(HOT_WINDOW_DAYS);
    ((floor.unix_timestamp_nanos() / 1_000_000) as i64).to_string()
}
