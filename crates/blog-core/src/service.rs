//! Post operations - create, list, read, update, remove.

use std::sync::Arc;

use serde_json::Value;
use uuid::Uuid;

use crate::domain::{Post, PostPatch};
use crate::error::{DomainError, RepoError};
use crate::pagination::{PAGE_SIZE, Page, last_page, truncate_body};
use crate::ports::PostStore;
use crate::validation::validate_new_post;

/// One page of posts plus the number of the last page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostPage {
    pub posts: Vec<Post>,
    pub last_page: u64,
}

/// Post service - runs each operation against the injected store.
#[derive(Clone)]
pub struct PostService {
    store: Arc<dyn PostStore>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Validate a create payload and persist it as a new post.
    pub async fn write(&self, payload: &Value) -> Result<Post, DomainError> {
        let new_post = validate_new_post(payload).map_err(DomainError::Validation)?;

        let post = self.store.insert(Post::new(new_post)).await?;
        tracing::info!(post_id = %post.id, "Post created");

        Ok(post)
    }

    /// Newest-first page of posts with shortened bodies.
    ///
    /// The page and the total count are two separate store reads; a write
    /// landing between them can make `last_page` disagree with `posts`.
    pub async fn list(&self, page: Option<&str>) -> Result<PostPage, DomainError> {
        let page = Page::parse(page)?;

        let posts = self
            .store
            .find_newest(page.skip(), PAGE_SIZE)
            .await?;
        let total = self.store.count().await?;

        tracing::debug!(page = page.number(), returned = posts.len(), total, "Listed posts");

        Ok(PostPage {
            posts: posts
                .into_iter()
                .map(|post| Post {
                    body: truncate_body(&post.body),
                    ..post
                })
                .collect(),
            last_page: last_page(total),
        })
    }

    /// Fetch a single post with its full body.
    pub async fn read(&self, id: Uuid) -> Result<Post, DomainError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })
    }

    /// Apply an update document and return the post after the change.
    ///
    /// The document is not validated beyond casting it to the post shape;
    /// a cast failure is reported as a store error. Only JSON objects cast.
    pub async fn update(&self, id: Uuid, changes: Value) -> Result<Post, DomainError> {
        if !changes.is_object() {
            return Err(RepoError::Cast("update document must be an object".to_string()).into());
        }
        let patch: PostPatch =
            serde_json::from_value(changes).map_err(|e| RepoError::Cast(e.to_string()))?;

        let post = self
            .store
            .update_by_id(id, patch)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "Post",
                id,
            })?;
        tracing::info!(post_id = %id, "Post updated");

        Ok(post)
    }

    /// Delete a post. Succeeds whether or not the post existed.
    pub async fn remove(&self, id: Uuid) -> Result<(), DomainError> {
        self.store.delete_by_id(id).await?;
        tracing::info!(post_id = %id, "Post removed");
        Ok(())
    }
}
