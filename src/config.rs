//! API base address configuration.
//!
//! The debugger talks to a locally running scraper API. The base address is
//! fixed at build time; set `API_BASE_URL` when compiling to point the
//! explorer at a different host.

use leptos::prelude::*;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: &'static str,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL,
        }
    }
}

impl ApiConfig {
    pub fn from_build_env() -> Self {
        Self {
            base_url: option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL),
        }
    }

    /// Full request URL for a built path.
    pub fn request_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Config provided by [`crate::App`]. Falls back to defaults so widgets can
/// mount without the shell.
pub fn use_api_config() -> ApiConfig {
    use_context::<ApiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_api() {
        assert_eq!(ApiConfig::default().base_url, "http://localhost:3000");
    }

    #[test]
    fn test_request_url_joins_base_and_path() {
        let config = ApiConfig::default();
        assert_eq!(
            config.request_url("/api/v1/komiku/home"),
            "http://localhost:3000/api/v1/komiku/home"
        );
    }

    #[test]
    fn test_request_url_keeps_query_string() {
        let config = ApiConfig {
            base_url: "http://127.0.0.1:8080",
        };
        assert_eq!(
            config.request_url("/api/v1/komiku/search?q=naruto"),
            "http://127.0.0.1:8080/api/v1/komiku/search?q=naruto"
        );
    }
}
