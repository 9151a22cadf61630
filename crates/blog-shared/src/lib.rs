//! # Blog Shared
//!
//! Request and response bodies of the blog posts API.

pub mod dto;
pub mod response;

pub use response::{DeletedResponse, ErrorResponse, StatusResponse};
