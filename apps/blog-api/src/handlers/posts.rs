//! Post CRUD handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::{NewPost, PostPatch, tags_from_json};
use blog_shared::DeletedResponse;
use blog_shared::dto::{CreatePostRequest, UpdatePostRequest};

use crate::middleware::auth::AdminKey;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/posts
pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.posts.list().await)
}

/// GET /api/posts/{slug}
pub async fn get(state: web::Data<AppState>, slug: web::Path<String>) -> AppResult<HttpResponse> {
    let post = state.posts.get(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// POST /api/posts
pub async fn create(
    _admin: AdminKey,
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let new_post = NewPost {
        slug: req.slug.unwrap_or_default(),
        title: req.title.unwrap_or_default(),
        excerpt: req.excerpt,
        content: req.content,
        cover_image: req.cover_image,
        cover_alt: req.cover_alt,
        date: req.date,
        reading_time: req.reading_time,
        tags: tags_from_json(req.tags),
    };

    let post = state.posts.create(new_post).await?;
    Ok(HttpResponse::Created().json(post))
}

/// PUT /api/posts/{slug}
pub async fn update(
    _admin: AdminKey,
    state: web::Data<AppState>,
    slug: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let patch = PostPatch {
        title: req.title,
        excerpt: req.excerpt,
        content: req.content,
        cover_image: req.cover_image,
        cover_alt: req.cover_alt,
        date: req.date,
        reading_time: req.reading_time,
        tags: tags_from_json(req.tags),
    };

    let post = state.posts.update(&slug, patch).await?;
    Ok(HttpResponse::Ok().json(post))
}

/// DELETE /api/posts/{slug}
pub async fn delete(
    _admin: AdminKey,
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.posts.delete(&slug).await?;
    Ok(HttpResponse::Ok().json(DeletedResponse::new(post)))
}
