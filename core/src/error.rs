//! Error taxonomy for the post viewer.
//!
//! # Design
//! Every variant maps to display text shown to the reader; fetch failures
//! never crash the viewer. The three network-facing variants (`Server`,
//! `NoResponse`, `RequestSetup`) are mutually exclusive: a response with a
//! bad status, no response at all, or a failure before the request ever left.
//! `ConfigMissing` short-circuits the fetch entirely, and `Decode` covers a
//! 2xx response whose body is not a valid post list.

use std::fmt;

/// Errors surfaced by a fetch attempt, rendered verbatim to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// No base address was configured; no request was issued.
    ConfigMissing,

    /// The server responded with a non-2xx status.
    Server { status: u16, status_text: String },

    /// The request was sent but no response came back.
    NoResponse,

    /// The request could not be constructed or sent.
    RequestSetup(String),

    /// The response body could not be decoded into a post list.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::ConfigMissing => {
                write!(f, "Error: API_URL is not configured for the viewer.")
            }
            FetchError::Server { status, status_text } => {
                write!(
                    f,
                    "Server Error: {status} - {status_text}. Check CORS origin or backend URL."
                )
            }
            FetchError::NoResponse => {
                write!(f, "No response received from server. Is the backend running?")
            }
            FetchError::RequestSetup(msg) => {
                write!(f, "Error setting up request: {msg}")
            }
            FetchError::Decode(msg) => {
                write!(f, "Failed to decode server response: {msg}")
            }
        }
    }
}

impl std::error::Error for FetchError {}
