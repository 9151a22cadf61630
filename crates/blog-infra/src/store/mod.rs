//! Post store implementations - JSON document on disk and in-memory fallback.

mod json_file;
mod memory;

pub use json_file::JsonFilePostStore;
pub use memory::InMemoryPostStore;
