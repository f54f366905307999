//! Deterministic core of the blog post viewer.
//!
//! # Overview
//! Everything the viewer decides lives here: building the listing request,
//! interpreting the response, the {loading, loaded, failed} display states,
//! the error taxonomy, and plain-text rendering. The host executes the
//! actual HTTP round-trip, so the whole crate runs without a network.
//!
//! # Design
//! - `PostClient` is stateless; it holds only the normalized base address.
//! - The single list operation is split into `build_list_posts` (produces
//!   request) and `parse_list_posts` (consumes response), so the I/O
//!   boundary is explicit.
//! - `PostViewer` owns the fetch lifecycle: one request per mount, gated on
//!   a configured base address, with ticket-based discard of completions
//!   that arrive after a reconfigure or teardown.
//! - DTOs are defined independently from the post-service crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod http;
pub mod render;
pub mod types;
pub mod view;

pub use client::PostClient;
pub use error::FetchError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use render::render;
pub use types::Post;
pub use view::{FetchTicket, PostViewer, TransportError, ViewState};
