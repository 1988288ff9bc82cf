//! API Configuration
//!
//! Where the remote item store lives and whose items to show.

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://mate.academy/students-api";
pub const DEFAULT_USER_ID: u32 = 2504;

/// Remote store settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL without trailing slash, `/todos` is appended
    pub base_url: String,
    /// Fixed owner id scoping the list
    pub user_id: u32,
    /// How long an error banner stays up
    pub error_timeout_ms: u64,
    /// Client-side request timeout (ignored on wasm)
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_id: DEFAULT_USER_ID,
            error_timeout_ms: 3_000,
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Build from optional overrides, e.g. `option_env!` values baked in at compile time
    pub fn from_env_vars(base_url: Option<&str>, user_id: Option<&str>) -> Self {
        let mut config = Self::default();

        if let Some(url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(raw) = user_id {
            match raw.trim().parse() {
                Ok(id) => config.user_id = id,
                Err(e) => tracing::warn!(
                    "Ignoring invalid user id {:?} ({}), using {}",
                    raw,
                    e,
                    config.user_id
                ),
            }
        }

        config
    }

    pub fn error_timeout(&self) -> Duration {
        Duration::from_millis(self.error_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn todos_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    pub fn todo_url(&self, id: u32) -> String {
        format!("{}/todos/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::default();
        assert_eq!(config.user_id, 2504);
        assert_eq!(config.error_timeout(), Duration::from_secs(3));
        assert_eq!(config.todos_url(), "https://mate.academy/students-api/todos");
    }

    #[test]
    fn test_overrides() {
        let config = ApiConfig::from_env_vars(Some("http://localhost:8080/api/"), Some(" 42 "));
        assert_eq!(config.base_url, "http://localhost:8080/api");
        assert_eq!(config.user_id, 42);
        assert_eq!(config.todo_url(5), "http://localhost:8080/api/todos/5");
    }

    #[test]
    fn test_invalid_user_id_falls_back() {
        let config = ApiConfig::from_env_vars(None, Some("abc"));
        assert_eq!(config.user_id, DEFAULT_USER_ID);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ApiConfig = serde_json::from_str(r#"{ "user_id": 9 }"#).unwrap();
        assert_eq!(config.user_id, 9);
        assert_eq!(config.error_timeout_ms, 3_000);
    }
}
