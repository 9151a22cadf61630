use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Whole-collection storage for posts.
///
/// Every service call reads the full collection and, for mutations, writes
/// the full collection back. Implementations keep no cross-call state that
/// the service relies on.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Load every post in stored order.
    ///
    /// Never fails: a missing, empty or unreadable backing document is an
    /// empty collection. Implementations log what went wrong.
    async fn read_all(&self) -> Vec<Post>;

    /// Replace the stored collection with `posts`. Last write wins.
    async fn write_all(&self, posts: &[Post]) -> Result<(), StoreError>;
}
