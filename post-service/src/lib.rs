//! HTTP service exposing the read-only blog post listing.
//!
//! # Design
//! `app` wires the single `GET /api/posts` route to a `PostRepository`
//! trait object, so the HTTP layer never knows where posts come from; the
//! in-memory `FixedPosts` is a stand-in for a persistent store. The route
//! always succeeds: there is no application-level failure a listing can hit.
//!
//! Cross-origin policy is explicit: with a configured origin the router
//! carries a `CorsLayer` allowing exactly that origin; without one no CORS
//! headers are emitted at all and browsers will refuse cross-origin use.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Method},
    routing::get,
    Json, Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod repo;

pub use config::ServiceConfig;
pub use repo::{FixedPosts, Post, PostRepository};

/// Shared handle to the post source, cloned into each request handler.
pub type Repo = Arc<dyn PostRepository>;

pub fn app(repo: Repo, allowed_origin: Option<&str>) -> Router {
    let router = Router::new()
        .route("/api/posts", get(list_posts))
        .layer(TraceLayer::new_for_http())
        .with_state(repo);
    match allowed_origin.and_then(cors_layer) {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

pub async fn run(
    listener: TcpListener,
    repo: Repo,
    allowed_origin: Option<&str>,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app(repo, allowed_origin)).await
}

/// Build a CORS layer admitting exactly the configured origin. An origin
/// that is not a valid header value is reported and treated as unconfigured.
fn cors_layer(origin: &str) -> Option<CorsLayer> {
    match origin.parse::<HeaderValue>() {
        Ok(value) => Some(CorsLayer::new().allow_origin(value).allow_methods([Method::GET])),
        Err(_) => {
            tracing::warn!("CORS_ORIGIN {origin:?} is not a valid header value; ignoring it");
            None
        }
    }
}

async fn list_posts(State(repo): State<Repo>) -> Json<Vec<Post>> {
    Json(repo.list_posts())
}
