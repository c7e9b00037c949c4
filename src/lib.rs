//! agora-cache: the in-process caching layer of the Agora discussion board.
//!
//! Sits in front of the persistent article store and serves three kinds of
//! cached state:
//!
//! - **Article records**: full entity records, bounded LRU, isolated copies.
//! - **Article abstracts**: derived preview strings, purged whenever the
//!   source article changes.
//! - **Side lists**: the "hot" and "random" snapshot lists shown next to the
//!   feed, rebuilt wholesale by an external scheduler calling the `load_side_*`
//!   operations.
//!
//! The crate performs no scheduling and owns no connection pool; persistence
//! and enrichment are consumed through the traits in [`application::repos`].

pub mod application;
pub mod cache;
pub mod domain;
pub mod infra;
