use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Reading time shown in list views when a post has none.
pub const DEFAULT_READING_TIME: &str = "5 min";

/// Post entity - a blog article as stored in the posts document.
///
/// Every field is optional in the stored document and decoding never fails
/// on a field's type: missing or `null` values load as empty, numbers and
/// booleans load as their text, and `tags` follows [`tags_from_json`].
/// Keys the API does not know about are kept in `extra` and written back
/// untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Post {
    #[serde(deserialize_with = "lenient_string")]
    pub slug: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub excerpt: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub reading_time: String,
    #[serde(deserialize_with = "lenient_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub cover_image: String,
    #[serde(deserialize_with = "lenient_string")]
    pub cover_alt: String,
    #[serde(deserialize_with = "lenient_string")]
    pub content: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(tags_from_json(Some(value)).unwrap_or_default())
}

/// Today's date as `YYYY-MM-DD` (UTC).
pub fn today() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Interpret a loosely typed `tags` value.
///
/// Only an array counts as a tag list; anything else yields `None` so callers
/// keep whatever they had. Non-string elements are dropped.
pub fn tags_from_json(value: Option<Value>) -> Option<Vec<String>> {
    match value? {
        Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(tag) => Some(tag),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

/// List-view projection of a [`Post`]. Never carries the body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub reading_time: String,
    pub tags: Vec<String>,
    pub cover_image: String,
}

impl From<&Post> for PostSummary {
    fn from(post: &Post) -> Self {
        let reading_time = if post.reading_time.is_empty() {
            DEFAULT_READING_TIME.to_string()
        } else {
            post.reading_time.clone()
        };

        Self {
            slug: post.slug.clone(),
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date.clone(),
            reading_time,
            tags: post.tags.clone(),
            cover_image: post.cover_image.clone(),
        }
    }
}

/// Fields supplied by a caller creating a post.
///
/// `title` and `slug` are required and checked by the service; the rest
/// fall back to defaults.
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub slug: String,
    pub title: String,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub cover_alt: Option<String>,
    pub date: Option<String>,
    pub reading_time: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl NewPost {
    /// Build the stored post, applying defaults to unset fields.
    pub fn into_post(self) -> Post {
        Post {
            slug: self.slug,
            title: self.title,
            excerpt: self.excerpt.unwrap_or_default(),
            date: self.date.unwrap_or_else(today),
            reading_time: self.reading_time.unwrap_or_default(),
            tags: self.tags.unwrap_or_default(),
            cover_image: self.cover_image.unwrap_or_default(),
            cover_alt: self.cover_alt.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            extra: Map::new(),
        }
    }
}

/// Partial update. `None` means "leave unchanged", never "clear".
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub cover_image: Option<String>,
    pub cover_alt: Option<String>,
    pub date: Option<String>,
    pub reading_time: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostPatch {
    /// Overwrite the fields of `post` that this patch carries.
    pub fn apply(self, post: &mut Post) {
        fn set<T>(target: &mut T, value: Option<T>) {
            if let Some(value) = value {
                *target = value;
            }
        }

        set(&mut post.title, self.title);
        set(&mut post.excerpt, self.excerpt);
        set(&mut post.content, self.content);
        set(&mut post.cover_image, self.cover_image);
        set(&mut post.cover_alt, self.cover_alt);
        set(&mut post.date, self.date);
        set(&mut post.reading_time, self.reading_time);
        set(&mut post.tags, self.tags);
    }
}
