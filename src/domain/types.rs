//! Shared domain enumerations and well-known values.

use serde::{Deserialize, Serialize};

/// Tag reserved for sandbox posts. Articles carrying it never reach the
/// public side lists.
pub const SANDBOX_TAG_TITLE: &str = "Sandbox";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleType {
    Normal,
    Discussion,
    CityBroadcast,
    Thought,
}
