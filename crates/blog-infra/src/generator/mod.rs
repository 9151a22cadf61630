//! Article generators backed by external text-generation services.

mod openai;

pub use openai::{OpenAiArticleGenerator, OpenAiConfig};
