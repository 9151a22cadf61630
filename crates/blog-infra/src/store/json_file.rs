//! JSON document post store.
//!
//! The whole collection lives in one pretty-printed JSON array. Reads load
//! the full document, writes replace it through a temporary sibling file
//! and a rename.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use blog_core::domain::Post;
use blog_core::error::StoreError;
use blog_core::ports::PostStore;

/// Post store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFilePostStore {
    path: PathBuf,
}

impl JsonFilePostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "posts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl PostStore for JsonFilePostStore {
    async fn read_all(&self) -> Vec<Post> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Posts document not found");
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to read posts document"
                );
                return Vec::new();
            }
        };

        if text.trim().is_empty() {
            return Vec::new();
        }

        let entries = match serde_json::from_str::<Vec<Value>>(&text) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::error!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to parse posts document"
                );
                return Vec::new();
            }
        };

        // Field types are decoded leniently; only non-object entries are dropped.
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Post>(entry) {
                Ok(post) => Some(post),
                Err(e) => {
                    tracing::warn!(
                        path = %self.path.display(),
                        index,
                        error = %e,
                        "Skipping unreadable post entry"
                    );
                    None
                }
            })
            .collect()
    }

    async fn write_all(&self, posts: &[Post]) -> Result<(), StoreError> {
        let mut json = serde_json::to_string_pretty(posts)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        json.push('\n');

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Write(e.to_string()))?;
        }

        let temp = self.temp_path();
        tokio::fs::write(&temp, json)
            .await
            .map_err(|e| StoreError::Write(format!("{}: {}", temp.display(), e)))?;
        tokio::fs::rename(&temp, &self.path)
            .await
            .map_err(|e| StoreError::Write(format!("{}: {}", self.path.display(), e)))?;

        tracing::debug!(path = %self.path.display(), count = posts.len(), "Posts document written");
        Ok(())
    }
}
