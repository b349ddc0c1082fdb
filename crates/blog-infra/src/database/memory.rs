//! In-memory post store - used when no database is configured.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;

/// In-memory post store keyed by id.
///
/// Post ids are time-ordered, so the map's key order is creation order.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<BTreeMap<Uuid, Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut posts = self.posts.write().await;
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&id).cloned())
    }

    async fn find_newest(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(posts
            .values()
            .rev()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let mut posts = self.posts.write().await;
        Ok(posts.get_mut(&id).map(|post| {
            patch.apply(post);
            post.clone()
        }))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        self.posts.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::NewPost;

    fn post(title: &str) -> Post {
        Post::new(NewPost {
            title: title.to_string(),
            body: "body".to_string(),
            tags: Vec::new(),
        })
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let store = InMemoryPostStore::new();
        let saved = store.insert(post("first")).await.unwrap();

        assert_eq!(store.find_by_id(saved.id).await.unwrap(), Some(saved));
        assert_eq!(store.find_by_id(Uuid::now_v7()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_newest_window() {
        let store = InMemoryPostStore::new();
        for i in 0..5 {
            store.insert(post(&format!("p{i}"))).await.unwrap();
        }

        let titles = |posts: Vec<Post>| posts.into_iter().map(|p| p.title).collect::<Vec<_>>();

        assert_eq!(titles(store.find_newest(0, 2).await.unwrap()), vec!["p4", "p3"]);
        assert_eq!(titles(store.find_newest(1, 2).await.unwrap()), vec!["p3", "p2"]);
        assert!(store.find_newest(5, 2).await.unwrap().is_empty());

        assert_eq!(store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let store = InMemoryPostStore::new();
        let saved = store.insert(post("first")).await.unwrap();

        let patch: PostPatch = serde_json::from_str(r#"{"body": "changed"}"#).unwrap();
        let updated = store.update_by_id(saved.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.body, "changed");
        assert_eq!(updated.title, "first");

        store.delete_by_id(saved.id).await.unwrap();
        store.delete_by_id(saved.id).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 0);
        assert!(
            store
                .update_by_id(saved.id, PostPatch::default())
                .await
                .unwrap()
                .is_none()
        );
    }
}
