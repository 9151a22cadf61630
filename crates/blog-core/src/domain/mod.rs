//! Domain entities - the core business objects.

mod post;
mod slug;

pub use post::{DEFAULT_READING_TIME, NewPost, Post, PostPatch, PostSummary, tags_from_json, today};
pub use slug::slugify;
