//! Cache configuration.
//!
//! The three knobs the cache consumes from application configuration:
//! article cache capacity and the two side-list sizes.

use std::num::NonZeroUsize;

use serde::Deserialize;
use thiserror::Error;

// Default values for cache configuration
const DEFAULT_ARTICLE_LIMIT: usize = 1024;
const DEFAULT_SIDE_HOT_LIMIT: usize = 8;
const DEFAULT_SIDE_RANDOM_LIMIT: usize = 8;

#[derive(Debug, Error)]
pub enum CacheConfigError {
    #[error("`article_limit` must be greater than zero")]
    ZeroArticleLimit,
}

/// Cache configuration from application settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum entries in the article cache. The abstract cache shares the
    /// same capacity.
    pub article_limit: usize,
    /// Number of entries requested for the hot side list on refresh.
    pub side_hot_limit: usize,
    /// Number of entries requested for the random side list on refresh.
    pub side_random_limit: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            article_limit: DEFAULT_ARTICLE_LIMIT,
            side_hot_limit: DEFAULT_SIDE_HOT_LIMIT,
            side_random_limit: DEFAULT_SIDE_RANDOM_LIMIT,
        }
    }
}

impl CacheConfig {
    /// Returns the article limit as `NonZeroUsize`. Zero is rejected, never
    /// treated as "unbounded".
    pub fn article_limit_non_zero(&self) -> Result<NonZeroUsize, CacheConfigError> {
        NonZeroUsize::new(self.article_limit).ok_or(CacheConfigError::ZeroArticleLimit)
    }
}
