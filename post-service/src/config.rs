//! Environment-backed configuration for the post service.
//!
//! Read once at startup and passed explicitly into the router constructor;
//! nothing below this module touches the environment.

use std::env;

const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// TCP port to bind. `PORT` env var, default 5000.
    pub port: u16,
    /// Exact origin allowed to make cross-origin requests. `CORS_ORIGIN`
    /// env var; absent means no CORS headers are ever emitted.
    pub allowed_origin: Option<String>,
}

impl ServiceConfig {
    /// Read configuration from the environment. A missing or unparsable
    /// `PORT` falls back to the default; a missing `CORS_ORIGIN` is
    /// non-fatal and leaves the service refusing cross-origin requests.
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            allowed_origin: env::var("CORS_ORIGIN").ok().filter(|s| !s.is_empty()),
        }
    }
}
