//! Data Transfer Objects - request bodies for the API.
//!
//! Every field is optional at the wire level; required fields are checked
//! by the service so a missing value gets a domain error instead of a
//! deserialization failure. `tags` stays untyped because only an array
//! counts as a tag list.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request to create a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    pub slug: Option<String>,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub cover_alt: Option<String>,
    pub date: Option<String>,
    pub reading_time: Option<String>,
    pub tags: Option<Value>,
}

/// Partial update of a post. Absent and `null` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub cover_alt: Option<String>,
    pub date: Option<String>,
    pub reading_time: Option<String>,
    pub tags: Option<Value>,
}

/// Request to generate a post with the text-generation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePostRequest {
    pub topic: Option<String>,
    pub tags: Option<Value>,
}
