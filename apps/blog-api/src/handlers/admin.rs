//! Admin handlers.

use actix_web::{HttpResponse, web};

use blog_core::domain::tags_from_json;
use blog_shared::dto::GeneratePostRequest;

use crate::middleware::auth::AdminKey;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/admin/generate-post
pub async fn generate_post(
    _admin: AdminKey,
    state: web::Data<AppState>,
    body: web::Json<GeneratePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let topic = req.topic.unwrap_or_default();

    let post = state
        .posts
        .generate(&topic, tags_from_json(req.tags))
        .await?;

    Ok(HttpResponse::Created().json(post))
}
