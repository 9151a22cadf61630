use async_trait::async_trait;

use crate::error::GeneratorError;

/// What to write about.
#[derive(Debug, Clone)]
pub struct ArticleRequest {
    pub topic: String,
}

/// External text-generation service producing article bodies.
#[async_trait]
pub trait ArticleGenerator: Send + Sync {
    /// Produce the HTML body of an article for `request`.
    async fn generate(&self, request: &ArticleRequest) -> Result<String, GeneratorError>;
}
