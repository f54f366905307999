//! Domain DTOs for the blog post API.
//!
//! # Design
//! These types mirror the post-service's schema but are defined
//! independently, so the viewer core never links against Axum internals.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A single blog post returned by the API.
///
/// `id` is assigned by the service and unique within a listing; `title` is
/// non-empty; `content` may be empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}
