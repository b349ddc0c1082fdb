//! Post handlers.

use actix_web::{HttpResponse, web};
use serde_json::Value;
use uuid::Uuid;

use blog_core::domain::parse_post_id;
use blog_shared::dto::ListPostsQuery;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// Response header carrying the number of the last list page.
pub const LAST_PAGE_HEADER: &str = "Last-Page";

fn post_id(path: web::Path<String>) -> AppResult<Uuid> {
    let raw = path.into_inner();
    parse_post_id(&raw).ok_or(AppError::InvalidId(raw))
}

/// POST /api/posts
pub async fn write(state: web::Data<AppState>, body: web::Json<Value>) -> AppResult<HttpResponse> {
    let post = state.posts.write(&body).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// GET /api/posts?page=N
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let page = state.posts.list(query.page.as_deref()).await?;

    Ok(HttpResponse::Ok()
        .insert_header((LAST_PAGE_HEADER, page.last_page.to_string()))
        .json(page.posts))
}

/// GET /api/posts/{id}
pub async fn read(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.read(post_id(path)?).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// Update document from a raw request body. No body means no changes.
fn update_document(body: &[u8]) -> AppResult<Value> {
    if body.trim_ascii().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| AppError::BadRequest(e.to_string()))
}

/// PATCH|PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Bytes,
) -> AppResult<HttpResponse> {
    let id = post_id(path)?;
    let post = state.posts.update(id, update_document(&body)?).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{id}
pub async fn remove(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state.posts.remove(post_id(path)?).await?;
    Ok(HttpResponse::NoContent().finish())
}
