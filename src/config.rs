//! Frontend Configuration
//!
//! Values are baked in at build time; a WASM bundle has no process environment.

use std::sync::OnceLock;

/// Backend origin used when `RECIPE_API_URL` is not set at build time
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of the recipe backend, without trailing slash
    pub api_base_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_value(option_env!("RECIPE_API_URL"))
    }

    fn from_value(value: Option<&str>) -> Self {
        let api_base_url = match value.map(str::trim).filter(|v| !v.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                log::info!("RECIPE_API_URL not set, using default: {}", DEFAULT_API_URL);
                DEFAULT_API_URL.to_string()
            }
        };
        Self { api_base_url }
    }

    /// Config resolved once for the lifetime of the page
    pub fn get() -> &'static AppConfig {
        static CONFIG: OnceLock<AppConfig> = OnceLock::new();
        CONFIG.get_or_init(AppConfig::load)
    }

    /// Absolute URL for an API path such as `/api/recipe`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_when_unset_or_blank() {
        assert_eq!(AppConfig::from_value(None).api_base_url, DEFAULT_API_URL);
        assert_eq!(AppConfig::from_value(Some("  ")).api_base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_endpoint_joins_single_slash() {
        let config = AppConfig::from_value(Some("https://recipes.example.com/"));
        assert_eq!(config.endpoint("/api/recipe"), "https://recipes.example.com/api/recipe");
        assert_eq!(config.endpoint("api/logout"), "https://recipes.example.com/api/logout");
    }
}
