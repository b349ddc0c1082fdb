use blog_core::domain::{Post, PostPatch};
use blog_core::error::RepoError;
use blog_core::ports::PostStore;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};
use uuid::Uuid;

use crate::database::PostgresPostStore;
use crate::database::entity::post;

fn model(title: &str) -> post::Model {
    post::Model {
        id: Uuid::now_v7(),
        title: title.to_owned(),
        body: "Body".to_owned(),
        tags: vec!["rust".to_owned()],
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let row = model("Test Post");
    let post_id = row.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let store = PostgresPostStore::new(db);

    let result: Option<Post> = store.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.tags, vec!["rust".to_string()]);
}

#[tokio::test]
async fn test_find_newest_orders_by_id_descending() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![model("newer"), model("older")]])
        .into_connection();

    let store = PostgresPostStore::new(db.clone());
    let posts = store.find_newest(10, 10).await.unwrap();
    assert_eq!(posts.len(), 2);

    let log = db.into_transaction_log();
    let sql = format!("{:?}", log[0]);
    assert!(sql.contains("DESC"), "{sql}");
    assert!(sql.contains("LIMIT"), "{sql}");
    assert!(sql.contains("OFFSET"), "{sql}");
}

#[tokio::test]
async fn test_update_missing_post_returns_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<post::Model>::new()])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let patch = PostPatch {
        title: Some("X".to_string()),
        ..Default::default()
    };

    assert!(store.update_by_id(Uuid::now_v7(), patch).await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_returns_post_after_change() {
    let before = model("Before");
    let after = post::Model {
        title: "After".to_owned(),
        ..before.clone()
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![before.clone()], vec![after]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let patch = PostPatch {
        title: Some("After".to_string()),
        ..Default::default()
    };

    let updated = store.update_by_id(before.id, patch).await.unwrap().unwrap();
    assert_eq!(updated.title, "After");
    assert_eq!(updated.body, "Body");
}

#[tokio::test]
async fn test_update_of_post_deleted_mid_update_returns_none() {
    let before = model("Before");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![before.clone()], Vec::<post::Model>::new()])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let patch = PostPatch {
        title: Some("After".to_string()),
        ..Default::default()
    };

    assert!(store.update_by_id(before.id, patch).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_post_is_ok() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let store = PostgresPostStore::new(db);
    store.delete_by_id(Uuid::now_v7()).await.unwrap();
}

#[tokio::test]
async fn test_query_failure_maps_to_repo_error() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_owned())])
        .into_connection();

    let store = PostgresPostStore::new(db);
    let err = store.find_by_id(Uuid::now_v7()).await.unwrap_err();

    assert!(matches!(err, RepoError::Query(msg) if msg.contains("connection reset")));
}
