use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, PostPatch};
use crate::error::RepoError;

/// Post store - abstraction over document persistence (PostgreSQL, in-memory).
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Persist a new post and return the stored representation.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// Fetch a window of posts ordered by id descending (newest first).
    async fn find_newest(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError>;

    /// Total number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Apply a patch and return the post as it is after the update,
    /// or `None` if no post has this id.
    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError>;

    /// Delete a post. Deleting a missing id is not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError>;
}
