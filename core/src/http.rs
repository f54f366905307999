//! HTTP requests and responses as plain data.
//!
//! # Design
//! The viewer core never performs I/O itself: it hands the host an
//! `HttpRequest` value and later receives an `HttpResponse` value built from
//! whatever the transport saw on the wire. Keeping both sides as owned plain
//! data makes every fetch path reproducible in tests without a server.

/// HTTP method for a request. The post API is read-only, so only `Get`
/// exists today.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

/// A request the host is asked to execute, produced by
/// `PostClient::build_list_posts`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// What the transport saw: status line and body, fed back into
/// `PostClient::parse_list_posts`. `status_text` carries the reason phrase
/// so failure messages can echo it.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}
