//! PostgreSQL post store.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder,
    QuerySelect, Set,
};
use uuid::Uuid;

use blog_core::domain::{Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post store backed by SeaORM.
pub struct PostgresPostStore {
    db: DbConn,
}

impl PostgresPostStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

#[async_trait]
impl PostStore for PostgresPostStore {
    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(query_error)?;
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn find_newest(&self, skip: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        tracing::debug!(skip, limit, "Fetching posts");

        let result = PostEntity::find()
            .order_by_desc(post::Column::Id)
            .offset(skip)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(query_error)
    }

    async fn update_by_id(&self, id: Uuid, patch: PostPatch) -> Result<Option<Post>, RepoError> {
        let Some(model) = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?
        else {
            return Ok(None);
        };

        if patch.is_empty() {
            return Ok(Some(model.into()));
        }

        let mut active_model = model.into_active_model();
        if let Some(title) = patch.title {
            active_model.title = Set(title);
        }
        if let Some(body) = patch.body {
            active_model.body = Set(body);
        }
        if let Some(tags) = patch.tags {
            active_model.tags = Set(tags);
        }

        // A delete landing between the read and the update leaves no row to update.
        match active_model.update(&self.db).await {
            Ok(updated) => Ok(Some(updated.into())),
            Err(DbErr::RecordNotUpdated) => {
                tracing::debug!(post_id = %id, "Post vanished before update");
                Ok(None)
            }
            Err(e) => Err(query_error(e)),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_error)?;

        tracing::debug!(post_id = %id, rows = result.rows_affected, "Deleted post");
        Ok(())
    }
}
