//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - File and in-memory stores only
//! - `openai` - Article generation through the OpenAI Responses API

pub mod store;

#[cfg(feature = "openai")]
pub mod generator;

// Re-exports
pub use store::{InMemoryPostStore, JsonFilePostStore};

#[cfg(feature = "openai")]
pub use generator::{OpenAiArticleGenerator, OpenAiConfig};
