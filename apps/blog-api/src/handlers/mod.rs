//! HTTP handlers and route configuration.
//!
//! Canonical routes live under `/api`. Legacy prefixes mount the same
//! scopes, so there is one route table per resource.

mod admin;
mod health;
mod posts;

use actix_web::{Scope, error::JsonPayloadError, web};

use crate::middleware::error::AppError;

/// Older unprefixed mount points of the posts scope.
const LEGACY_POST_PATHS: &[&str] = &["/posts", "/blog/posts"];
const LEGACY_ADMIN_PATH: &str = "/admin";

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(health::status))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .service(posts_scope("/posts"))
                .service(admin_scope("/admin")),
        );

    for path in LEGACY_POST_PATHS {
        cfg.service(posts_scope(path));
    }
    cfg.service(admin_scope(LEGACY_ADMIN_PATH));
}

fn posts_scope(path: &str) -> Scope {
    web::scope(path)
        .route("", web::get().to(posts::list))
        .route("", web::post().to(posts::create))
        .route("/{slug}", web::get().to(posts::get))
        .route("/{slug}", web::put().to(posts::update))
        .route("/{slug}", web::delete().to(posts::delete))
}

fn admin_scope(path: &str) -> Scope {
    web::scope(path).route("/generate-post", web::post().to(admin::generate_post))
}

/// Malformed JSON bodies answer with the same error envelope as everything else.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = match &err {
            JsonPayloadError::ContentType => "Expected a JSON body.".to_string(),
            other => other.to_string(),
        };
        AppError::BadRequest(message).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, http::StatusCode, test};
    use async_trait::async_trait;
    use serde_json::{Value, json};
    use std::sync::Arc;

    use blog_core::PostService;
    use blog_core::domain::today;
    use blog_core::error::GeneratorError;
    use blog_core::ports::{ArticleGenerator, ArticleRequest};
    use blog_infra::{InMemoryPostStore, JsonFilePostStore};

    use crate::config::AccessConfig;
    use crate::middleware::cors::Cors;
    use crate::state::AppState;

    const KEY: &str = "test-secret";
    const ORIGIN: &str = "http://localhost:5173";

    struct FixedGenerator;

    #[async_trait]
    impl ArticleGenerator for FixedGenerator {
        async fn generate(&self, request: &ArticleRequest) -> Result<String, GeneratorError> {
            Ok(format!("<h2>{}</h2>", request.topic))
        }
    }

    fn access(key: Option<&str>) -> AccessConfig {
        AccessConfig {
            admin_key: key.map(String::from),
            allowed_origins: vec![ORIGIN.to_string()],
        }
    }

    fn memory_state() -> AppState {
        AppState::from_service(PostService::new(Arc::new(InMemoryPostStore::new())))
    }

    macro_rules! test_app {
        ($state:expr, $access:expr) => {{
            let access: AccessConfig = $access;
            test::init_service(
                App::new()
                    .wrap(Cors::new(access.allowed_origins.clone()))
                    .app_data(web::Data::new($state))
                    .app_data(web::Data::new(access))
                    .configure(configure_routes),
            )
            .await
        }};
    }

    #[actix_rt::test]
    async fn test_root_liveness() {
        let app = test_app!(memory_state(), access(Some(KEY)));

        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/").to_request(),
        )
        .await;

        assert_eq!(body["ok"], json!(true));
    }

    #[actix_rt::test]
    async fn test_post_lifecycle_on_legacy_and_api_paths() {
        let app = test_app!(memory_state(), access(Some(KEY)));

        // Create through the legacy path
        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "title": "Hello", "slug": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["date"], json!(today()));
        assert_eq!(created["tags"], json!([]));

        // Same object through the canonical path
        let fetched: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/api/posts/hello").to_request(),
        )
        .await;
        assert_eq!(fetched, created);

        // Duplicate slug
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "title": "Again", "slug": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let error: Value = test::read_body_json(resp).await;
        assert!(error["message"].as_str().unwrap().contains("hello"));

        // Partial update
        let req = test::TestRequest::put()
            .uri("/posts/hello")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "title": "Hi", "excerpt": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let updated: Value = test::read_body_json(resp).await;
        assert_eq!(updated["title"], json!("Hi"));
        assert_eq!(updated["slug"], created["slug"]);
        assert_eq!(updated["date"], created["date"]);
        assert_eq!(updated["excerpt"], created["excerpt"]);

        // Delete
        let req = test::TestRequest::delete()
            .uri("/posts/hello")
            .insert_header(("X-Admin-Key", KEY))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let deleted: Value = test::read_body_json(resp).await;
        assert_eq!(deleted["success"], json!(true));
        assert_eq!(deleted["deleted"]["slug"], json!("hello"));

        let resp = test::call_service(
            &app,
            test::TestRequest::get().uri("/posts/hello").to_request(),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::delete()
            .uri("/api/posts/hello")
            .insert_header(("X-Admin-Key", KEY))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_list_omits_content() {
        let app = test_app!(memory_state(), access(Some(KEY)));

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({
                "title": "Hello",
                "slug": "hello",
                "content": "<p>Body</p>",
                "tags": ["party"]
            }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        for uri in ["/api/posts", "/posts", "/blog/posts"] {
            let list: Value = test::call_and_read_body_json(
                &app,
                test::TestRequest::get().uri(uri).to_request(),
            )
            .await;
            assert_eq!(list.as_array().unwrap().len(), 1);
            assert!(list[0].get("content").is_none());
            assert_eq!(list[0]["readingTime"], json!("5 min"));
            assert_eq!(list[0]["tags"], json!(["party"]));
        }

        let post: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/blog/posts/hello").to_request(),
        )
        .await;
        assert_eq!(post["content"], json!("<p>Body</p>"));
    }

    #[actix_rt::test]
    async fn test_update_keeps_tags_unless_array() {
        let app = test_app!(memory_state(), access(Some(KEY)));

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "title": "Hello", "slug": "hello", "tags": ["a", "b"] }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/api/posts/hello")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "tags": "c" }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["tags"], json!(["a", "b"]));

        let req = test::TestRequest::put()
            .uri("/api/posts/hello")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "tags": ["c"] }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["tags"], json!(["c"]));
    }

    #[actix_rt::test]
    async fn test_admin_key_checks() {
        let app = test_app!(memory_state(), access(Some(KEY)));
        let body = json!({ "slug": "no-title" });

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(&body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("X-Admin-Key", "wrong"))
            .set_json(&body)
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::FORBIDDEN);

        // Correct key proceeds to validation
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["message"], json!("title is required"));

        // Reads stay public
        let resp = test::call_service(&app, test::TestRequest::get().uri("/posts").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_rt::test]
    async fn test_missing_server_key_is_internal_error() {
        let app = test_app!(memory_state(), access(None));

        let req = test::TestRequest::delete()
            .uri("/api/posts/anything")
            .insert_header(("X-Admin-Key", KEY))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let error: Value = test::read_body_json(resp).await;
        assert!(error["message"].is_string());
    }

    #[actix_rt::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app!(memory_state(), access(Some(KEY)));

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("X-Admin-Key", KEY))
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let error: Value = test::read_body_json(resp).await;
        assert_eq!(error["status"], json!(400));
    }

    #[actix_rt::test]
    async fn test_disallowed_origin_is_rejected_before_service() {
        let state = memory_state();
        let posts = state.posts.clone();
        let app = test_app!(state, access(Some(KEY)));

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("Origin", "https://evil.example.com"))
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "title": "Hello", "slug": "hello" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
        assert!(posts.list().await.is_empty());
    }

    #[actix_rt::test]
    async fn test_allowed_origin_gets_cors_headers() {
        let app = test_app!(memory_state(), access(Some(KEY)));

        let req = test::TestRequest::get()
            .uri("/api/posts")
            .insert_header(("Origin", ORIGIN))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers().get("access-control-allow-origin").unwrap(),
            ORIGIN
        );

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/posts")
            .insert_header(("Origin", ORIGIN))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        let allowed_headers = resp
            .headers()
            .get("access-control-allow-headers")
            .unwrap()
            .to_str()
            .unwrap();
        assert!(allowed_headers.contains("X-Admin-Key"));
    }

    #[actix_rt::test]
    async fn test_generate_post() {
        let service = PostService::new(Arc::new(InMemoryPostStore::new()))
            .with_generator(Arc::new(FixedGenerator));
        let app = test_app!(AppState::from_service(service), access(Some(KEY)));

        let req = test::TestRequest::post()
            .uri("/admin/generate-post")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "topic": "Festa Junina", "tags": ["june"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let post: Value = test::read_body_json(resp).await;
        assert_eq!(post["slug"], json!("festa-junina"));
        assert_eq!(post["content"], json!("<h2>Festa Junina</h2>"));
        assert_eq!(post["tags"], json!(["june"]));

        let req = test::TestRequest::post()
            .uri("/api/admin/generate-post")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "tags": [] }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/admin/generate-post")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "topic": "  " }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/api/admin/generate-post")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "topic": "Bolo de Rolo " }))
            .to_request();
        let post: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(post["title"], json!("Bolo de Rolo "));
        assert_eq!(post["slug"], json!("bolo-de-rolo"));
    }

    #[actix_rt::test]
    async fn test_generate_without_generator_is_internal_error() {
        let app = test_app!(memory_state(), access(Some(KEY)));

        let req = test::TestRequest::post()
            .uri("/api/admin/generate-post")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "topic": "Buffets" }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_rt::test]
    async fn test_posts_persist_to_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("posts.json");
        let state = AppState::from_service(PostService::new(Arc::new(JsonFilePostStore::new(&path))));
        let app = test_app!(state, access(Some(KEY)));

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .insert_header(("X-Admin-Key", KEY))
            .set_json(json!({ "title": "Hello", "slug": "hello" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let document: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(document[0]["slug"], json!("hello"));
        assert_eq!(document[0]["title"], json!("Hello"));
    }
}
