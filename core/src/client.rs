//! Request builder and response parser for the post listing.
//!
//! # Design
//! `PostClient` owns nothing but the normalized base address. The listing is
//! split in two: `build_list_posts` produces the `HttpRequest`, and
//! `parse_list_posts` interprets whatever `HttpResponse` the host brought
//! back. The HTTP round-trip happens elsewhere, so everything in this module
//! is deterministic.

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Post;

/// Stateless client for the post API. Builds requests and parses responses;
/// never touches the network itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostClient {
    base_url: String,
}

impl PostClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The normalized base address this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/api/posts", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, FetchError> {
        check_status(&response)?;
        serde_json::from_str(&response.body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Map non-2xx status codes to `FetchError::Server`.
fn check_status(response: &HttpResponse) -> Result<(), FetchError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(FetchError::Server {
        status: response.status,
        status_text: response.status_text.clone(),
    })
}
