//! Application layer: contracts the cache consumes.

pub mod repos;
