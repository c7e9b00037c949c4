//! Verifies the metric keys emitted by the cache paths.
//!
//! Uses a debugging recorder installed for the whole test process, so this
//! file holds a single test driving every metric-emitting path.

use std::sync::{Arc, Mutex};

use agora_cache::application::repos::{
    ArticleOrganizer, ArticleQueryFilter, ArticleRepository, RepoError, SortRule,
};
use agora_cache::cache::{ArticleCache, CacheConfig};
use agora_cache::domain::entities::{ArticleRecord, SideArticleRecord};
use agora_cache::domain::types::ArticleType;
use async_trait::async_trait;
use metrics_util::debugging::{DebugValue, DebuggingRecorder};
use time::macros::datetime;

fn sample_article(id: &str) -> ArticleRecord {
    ArticleRecord {
        id: id.to_string(),
        title: "Metrics Test Article".to_string(),
        permalink: format!("/article/{id}"),
        author_id: "99".to_string(),
        article_type: ArticleType::Normal,
        tags: vec![],
        comment_count: 0,
        view_count: 0,
        content: String::new(),
        created_at: datetime!(2026-08-03 12:00 UTC),
        updated_at: datetime!(2026-08-03 12:00 UTC),
    }
}

#[derive(Default)]
struct StubRepository {
    query_articles: Mutex<Option<Vec<ArticleRecord>>>,
}

#[async_trait]
impl ArticleRepository for StubRepository {
    async fn query(
        &self,
        _filter: &ArticleQueryFilter,
        _sort: &[SortRule],
        _limit: usize,
    ) -> Result<Vec<ArticleRecord>, RepoError> {
        self.query_articles
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| RepoError::Persistence("query failed".to_string()))
    }

    async fn fetch_random(&self, _limit: usize) -> Result<Vec<ArticleRecord>, RepoError> {
        Ok(vec![])
    }
}

struct StubOrganizer;

#[async_trait]
impl ArticleOrganizer for StubOrganizer {
    async fn organize(&self, articles: Vec<ArticleRecord>) -> Vec<SideArticleRecord> {
        articles
            .into_iter()
            .map(|article| SideArticleRecord {
                id: article.id,
                title: article.title,
                permalink: article.permalink,
                author_name: "member".to_string(),
                author_avatar_url: String::new(),
                author_id: article.author_id,
            })
            .collect()
    }
}

fn counter_value(
    snapshot: &[(
        metrics_util::CompositeKey,
        Option<metrics::Unit>,
        Option<metrics::SharedString>,
        DebugValue,
    )],
    name: &str,
    label: (&str, &str),
) -> Option<u64> {
    snapshot.iter().find_map(|(key, _, _, value)| {
        let key = key.key();
        let labelled = key
            .labels()
            .any(|l| l.key() == label.0 && l.value() == label.1);
        if key.name() == name && labelled {
            match value {
                DebugValue::Counter(count) => Some(*count),
                _ => None,
            }
        } else {
            None
        }
    })
}

#[tokio::test]
async fn cache_paths_emit_expected_metric_keys() {
    let recorder = DebuggingRecorder::new();
    let snapshotter = recorder.snapshotter();
    recorder
        .install()
        .expect("debug metrics recorder should install in this test process");

    let repository = Arc::new(StubRepository::default());
    *repository.query_articles.lock().unwrap() = Some(vec![sample_article("1")]);

    let cache = ArticleCache::new(
        CacheConfig {
            article_limit: 1,
            ..Default::default()
        },
        repository.clone(),
        Arc::new(StubOrganizer),
    )
    .expect("cache construction");

    // Miss, hit, then a capacity eviction on the article cache.
    assert!(cache.get_article("1").is_none());
    cache.put_article(sample_article("1")).unwrap();
    assert!(cache.get_article("1").is_some());
    cache.put_article(sample_article("2")).unwrap();

    // One replaced refresh, one skipped refresh.
    cache.load_side_hot_articles().await;
    repository.query_articles.lock().unwrap().take();
    cache.load_side_hot_articles().await;

    let snapshot = snapshotter.snapshot().into_vec();

    assert_eq!(
        counter_value(&snapshot, "agora_cache_miss_total", ("cache", "articles")),
        Some(1)
    );
    assert_eq!(
        counter_value(&snapshot, "agora_cache_hit_total", ("cache", "articles")),
        Some(1)
    );
    assert_eq!(
        counter_value(&snapshot, "agora_cache_evict_total", ("cache", "articles")),
        Some(1)
    );
    assert_eq!(
        counter_value(
            &snapshot,
            "agora_cache_side_refresh_total",
            ("outcome", "replaced")
        ),
        Some(1)
    );
    assert_eq!(
        counter_value(
            &snapshot,
            "agora_cache_side_refresh_total",
            ("outcome", "skipped")
        ),
        Some(1)
    );
}
