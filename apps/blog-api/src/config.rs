//! Application configuration loaded from environment variables.

use std::env;

use blog_core::PersistenceMode;

const DEFAULT_ORIGIN: &str = "http://localhost:5173";

/// Marker value of `POSTS_FILE` selecting the in-memory store.
pub const IN_MEMORY_STORE: &str = ":memory:";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub posts_file: String,
    pub persistence: PersistenceMode,
    pub access: AccessConfig,
    pub generator: Option<GeneratorSettings>,
}

/// Credential and cross-origin policy for the HTTP surface.
#[derive(Debug, Clone, Default)]
pub struct AccessConfig {
    /// Shared secret expected in the admin key header. `None` disables
    /// every mutating route.
    pub admin_key: Option<String>,
    /// Origins allowed to make cross-origin requests.
    pub allowed_origins: Vec<String>,
}

/// Text-generation service settings.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    pub api_key: String,
    pub model: Option<String>,
    pub base_url: Option<String>,
    pub system_prompt: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let persistence = match var("PERSISTENCE_MODE").map(|v| v.parse()) {
            Some(Ok(mode)) => mode,
            Some(Err(e)) => {
                tracing::warn!("{}. Falling back to best-effort persistence.", e);
                PersistenceMode::default()
            }
            None => PersistenceMode::default(),
        };

        let generator = var("OPENAI_API_KEY").map(|api_key| GeneratorSettings {
            api_key,
            model: var("OPENAI_MODEL"),
            base_url: var("OPENAI_BASE_URL"),
            system_prompt: var("OPENAI_SYSTEM_PROMPT"),
        });

        Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            posts_file: var("POSTS_FILE").unwrap_or_else(|| "posts.json".to_string()),
            persistence,
            access: AccessConfig {
                admin_key: var("ADMIN_API_KEY"),
                allowed_origins: parse_origins(var("CORS_ORIGIN"), var("CORS_ORIGINS")),
            },
            generator,
        }
    }
}

/// Primary origin first, then the comma-separated extras.
/// Blank entries and duplicates are dropped.
fn parse_origins(primary: Option<String>, extra: Option<String>) -> Vec<String> {
    let primary = primary.unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
    let extra = extra.unwrap_or_default();

    let mut origins: Vec<String> = Vec::new();
    for origin in std::iter::once(primary.as_str()).chain(extra.split(',')) {
        let origin = origin.trim();
        if !origin.is_empty() && !origins.iter().any(|o| o == origin) {
            origins.push(origin.to_string());
        }
    }

    origins
}
