//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::PostService;
use blog_core::ports::PostStore;
use blog_infra::{InMemoryPostStore, JsonFilePostStore};

use crate::config::{AppConfig, IN_MEMORY_STORE};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the application state with the configured store and generator.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn PostStore> = if config.posts_file == IN_MEMORY_STORE {
            tracing::warn!("POSTS_FILE is {}. Posts will not survive a restart.", IN_MEMORY_STORE);
            Arc::new(InMemoryPostStore::new())
        } else {
            let store = JsonFilePostStore::new(&config.posts_file);
            tracing::info!(path = %store.path().display(), "Using JSON document store");
            Arc::new(store)
        };

        let service = PostService::new(store).with_persistence(config.persistence);
        let service = with_generator(service, config);

        tracing::info!(persistence = ?config.persistence, "Application state initialized");

        Self::from_service(service)
    }

    pub fn from_service(service: PostService) -> Self {
        Self {
            posts: Arc::new(service),
        }
    }
}

#[cfg(feature = "openai")]
fn with_generator(service: PostService, config: &AppConfig) -> PostService {
    use blog_infra::{OpenAiArticleGenerator, OpenAiConfig};

    let Some(settings) = &config.generator else {
        tracing::warn!("OPENAI_API_KEY not set. Post generation is disabled.");
        return service;
    };

    let mut openai = OpenAiConfig::new(settings.api_key.clone());
    if let Some(model) = &settings.model {
        openai.model = model.clone();
    }
    if let Some(base_url) = &settings.base_url {
        openai.base_url = base_url.clone();
    }
    if let Some(prompt) = &settings.system_prompt {
        openai.system_prompt = prompt.clone();
    }

    match OpenAiArticleGenerator::new(openai) {
        Ok(generator) => service.with_generator(Arc::new(generator)),
        Err(e) => {
            tracing::error!("Failed to build text generation client: {}. Generation disabled.", e);
            service
        }
    }
}

#[cfg(not(feature = "openai"))]
fn with_generator(service: PostService, config: &AppConfig) -> PostService {
    if config.generator.is_some() {
        tracing::warn!("Built without the openai feature. Post generation is disabled.");
    }
    service
}
