//! # Blog Core
//!
//! The domain layer of the blog posts API.
//! Post records, the storage and generation ports, and the service that
//! implements the CRUD semantics over them. No HTTP, no filesystem.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::DomainError;
pub use service::{PersistenceMode, PostService};
