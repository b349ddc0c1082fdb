//! Data Transfer Objects - request types for the posts API.
//!
//! Create and update bodies are taken as raw JSON documents so the
//! validator can report on their exact shape.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/posts`.
///
/// `page` is kept as raw text so that malformed values reach the
/// page check instead of failing extraction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostsQuery {
    pub page: Option<String>,
}
