//! In-memory post store - used for tests and throwaway runs.

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::Post;
use blog_core::error::StoreError;
use blog_core::ports::PostStore;

/// Post store holding the collection in a `Vec` behind an async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::with_posts(Vec::new())
    }

    /// Start from an existing collection.
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts),
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn read_all(&self) -> Vec<Post> {
        self.posts.read().await.clone()
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        let mut store = self.posts.write().await;
        *store = posts.to_vec();
        Ok(())
    }
}
