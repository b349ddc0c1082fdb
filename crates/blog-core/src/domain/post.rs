use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog post with tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Create a new post with a freshly generated, time-ordered id.
    pub fn new(new_post: NewPost) -> Self {
        let NewPost { title, body, tags } = new_post;
        Self {
            id: Uuid::now_v7(),
            title,
            body,
            tags,
        }
    }
}

/// A create payload that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// Partial update of a post. Absent fields are left untouched.
///
/// Unknown fields in the incoming document are ignored, the same way the
/// store drops fields outside its schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    /// Merge the present fields into `post`.
    pub fn apply(self, post: &mut Post) {
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(body) = self.body {
            post.body = body;
        }
        if let Some(tags) = self.tags {
            post.tags = tags;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.body.is_none() && self.tags.is_none()
    }
}

/// Parse a path parameter into a post id.
///
/// Returns `None` when the text is not a well-formed UUID.
pub fn parse_post_id(raw: &str) -> Option<Uuid> {
    Uuid::try_parse(raw).ok()
}
