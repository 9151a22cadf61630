//! Post service - CRUD semantics over a [`PostStore`].

use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{NewPost, Post, PostPatch, PostSummary, slugify, today};
use crate::error::DomainError;
use crate::ports::{ArticleGenerator, ArticleRequest, PostStore};

const ENTITY: &str = "Post";
const GENERATED_READING_TIME: &str = "7 min";

/// How a failed document write is reported to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PersistenceMode {
    /// Log the failure and return the in-memory result anyway.
    #[default]
    BestEffort,
    /// Fail the operation with [`DomainError::Storage`].
    Strict,
}

impl FromStr for PersistenceMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "best-effort" | "best_effort" | "besteffort" => Ok(Self::BestEffort),
            "strict" => Ok(Self::Strict),
            other => Err(format!("unknown persistence mode: {other}")),
        }
    }
}

/// Post operations. Each call re-reads the whole collection from the store;
/// mutations write the whole collection back.
pub struct PostService {
    store: Arc<dyn PostStore>,
    generator: Option<Arc<dyn ArticleGenerator>>,
    mode: PersistenceMode,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl PostService {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            generator: None,
            mode: PersistenceMode::default(),
            write_lock: Mutex::new(()),
        }
    }

    /// Enable the generation pathway.
    pub fn with_generator(mut self, generator: Arc<dyn ArticleGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_persistence(mut self, mode: PersistenceMode) -> Self {
        self.mode = mode;
        self
    }

    /// All posts as summaries, in stored order.
    pub async fn list(&self) -> Vec<PostSummary> {
        self.store
            .read_all()
            .await
            .iter()
            .map(PostSummary::from)
            .collect()
    }

    /// First post whose slug equals `slug` exactly.
    pub async fn get(&self, slug: &str) -> Result<Post, DomainError> {
        self.store
            .read_all()
            .await
            .into_iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| not_found(slug))
    }

    /// Append a new post. `title` and `slug` must be non-empty and the slug unused.
    pub async fn create(&self, new_post: NewPost) -> Result<Post, DomainError> {
        if new_post.title.is_empty() {
            return Err(DomainError::Validation("title is required".to_string()));
        }
        if new_post.slug.is_empty() {
            return Err(DomainError::Validation("slug is required".to_string()));
        }

        let _guard = self.write_lock.lock().await;
        let mut posts = self.store.read_all().await;

        if posts.iter().any(|p| p.slug == new_post.slug) {
            return Err(duplicate(&new_post.slug));
        }

        let post = new_post.into_post();
        posts.push(post.clone());
        self.persist(&posts).await?;

        tracing::info!(slug = %post.slug, "Post created");
        Ok(post)
    }

    /// Apply `patch` to the post identified by `slug`.
    pub async fn update(&self, slug: &str, patch: PostPatch) -> Result<Post, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.store.read_all().await;

        let post = posts
            .iter_mut()
            .find(|p| p.slug == slug)
            .ok_or_else(|| not_found(slug))?;
        patch.apply(post);
        let updated = post.clone();

        self.persist(&posts).await?;

        tracing::info!(slug = %slug, "Post updated");
        Ok(updated)
    }

    /// Remove the post identified by `slug` and return it.
    pub async fn delete(&self, slug: &str) -> Result<Post, DomainError> {
        let _guard = self.write_lock.lock().await;
        let mut posts = self.store.read_all().await;

        let index = posts
            .iter()
            .position(|p| p.slug == slug)
            .ok_or_else(|| not_found(slug))?;
        let removed = posts.remove(index);

        self.persist(&posts).await?;

        tracing::info!(slug = %slug, "Post deleted");
        Ok(removed)
    }

    /// Write an article about `topic` with the configured generator and
    /// prepend it to the collection.
    pub async fn generate(
        &self,
        topic: &str,
        tags: Option<Vec<String>>,
    ) -> Result<Post, DomainError> {
        if topic.trim().is_empty() {
            return Err(DomainError::Validation("topic is required".to_string()));
        }

        let generator = self.generator.as_ref().ok_or_else(|| {
            DomainError::Misconfigured("text generation is not configured".to_string())
        })?;

        let slug = slugify(topic);
        if slug.is_empty() {
            return Err(DomainError::Validation(
                "topic does not yield a usable slug".to_string(),
            ));
        }
        if self.store.read_all().await.iter().any(|p| p.slug == slug) {
            return Err(duplicate(&slug));
        }

        tracing::debug!(topic = %topic, "Requesting generated article");
        let content = generator
            .generate(&ArticleRequest {
                topic: topic.to_string(),
            })
            .await?;

        let post = Post {
            slug,
            title: topic.to_string(),
            excerpt: format!("Article about {topic} with practical tips."),
            date: today(),
            reading_time: GENERATED_READING_TIME.to_string(),
            tags: tags.unwrap_or_default(),
            cover_image: String::new(),
            cover_alt: topic.to_string(),
            content,
            ..Post::default()
        };

        let _guard = self.write_lock.lock().await;
        let mut posts = self.store.read_all().await;

        // The collection may have changed while the generator was running.
        if posts.iter().any(|p| p.slug == post.slug) {
            return Err(duplicate(&post.slug));
        }

        posts.insert(0, post.clone());
        self.persist(&posts).await?;

        tracing::info!(slug = %post.slug, "Generated post stored");
        Ok(post)
    }

    async fn persist(&self, posts: &[Post]) -> Result<(), DomainError> {
        match self.store.write_all(posts).await {
            Ok(()) => Ok(()),
            Err(e) => match self.mode {
                PersistenceMode::Strict => Err(e.into()),
                PersistenceMode::BestEffort => {
                    tracing::error!(
                        error = %e,
                        "Failed to persist posts; returning in-memory result"
                    );
                    Ok(())
                }
            },
        }
    }
}

fn not_found(slug: &str) -> DomainError {
    DomainError::NotFound {
        entity_type: ENTITY,
        slug: slug.to_string(),
    }
}

fn duplicate(slug: &str) -> DomainError {
    DomainError::Duplicate(format!("a post with slug '{slug}' already exists"))
}
