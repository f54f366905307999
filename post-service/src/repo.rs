//! Read-only post storage behind a repository seam.
//!
//! The HTTP layer depends only on `PostRepository`, so swapping the
//! hard-coded dataset for a real store would not touch the routes.

use serde::{Deserialize, Serialize};

/// A single blog post as served by the API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

/// Read-only source of posts.
pub trait PostRepository: Send + Sync {
    /// The full post collection, ordered ascending by `id`. Every call
    /// within a process lifetime returns the same sequence.
    fn list_posts(&self) -> Vec<Post>;
}

/// In-memory repository constructed once at service startup. The collection
/// is immutable for the life of the process.
#[derive(Debug, Clone)]
pub struct FixedPosts {
    posts: Vec<Post>,
}

impl FixedPosts {
    /// Build a repository from an arbitrary collection, ordering it
    /// ascending by `id`.
    pub fn new(mut posts: Vec<Post>) -> Self {
        posts.sort_by_key(|p| p.id);
        Self { posts }
    }

    /// The demo dataset served by the blog.
    pub fn seed() -> Self {
        Self::new(vec![
            Post {
                id: 1,
                title: "Welcome to the Blog!".to_string(),
                content: "This is the first post.".to_string(),
            },
            Post {
                id: 2,
                title: "Serving JSON with Axum".to_string(),
                content: "A read-only API for a single-page viewer.".to_string(),
            },
            Post {
                id: 3,
                title: "Blog in the Terminal".to_string(),
                content: "Rendering posts without a browser.".to_string(),
            },
        ])
    }
}

impl PostRepository for FixedPosts {
    fn list_posts(&self) -> Vec<Post> {
        self.posts.clone()
    }
}
