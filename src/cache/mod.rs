//! Agora cache system.
//!
//! Three cache surfaces behind one facade:
//!
//! - **Article cache**: bounded LRU of full article records, isolated copies
//!   in and out.
//! - **Abstract cache**: bounded LRU of derived preview strings, purged in
//!   lockstep with primary writes.
//! - **Side lists**: "hot" and "random" snapshot lists, rebuilt wholesale by
//!   the `load_side_*` operations and served as copies in between.
//!
//! ## Configuration
//!
//! ```toml
//! [cache]
//! article_limit = 1024
//! side_hot_limit = 8
//! side_random_limit = 8
//! ```

mod article;
mod config;
mod lock;
mod snapshot;
mod store;

pub use article::{ArticleCache, CacheStats};
pub use config::{CacheConfig, CacheConfigError};
pub use snapshot::SnapshotList;
pub use store::BoundedCache;
