//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;
mod store;

pub use generator::{ArticleGenerator, ArticleRequest};
pub use store::PostStore;
