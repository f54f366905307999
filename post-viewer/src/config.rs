//! Environment-backed configuration for the viewer.

use std::env;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Base address of the post service. `API_URL` env var. Absence is not
    /// fatal: the viewer renders a configuration error instead of fetching.
    pub api_url: Option<String>,
}

impl ViewerConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("API_URL").ok().filter(|s| !s.is_empty()),
        }
    }
}
