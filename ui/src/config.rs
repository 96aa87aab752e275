//! API endpoint configuration

/// Server used when `STUDYHUB_API_BASE` is not set at build time
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

/// Path of the categories listing on the server
pub const CATEGORIES_API: &str = "/api/v1/course/showAllCategories";

/// Where the UI talks to the StudyHub server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Read the base URL baked in at build time
    pub fn from_env() -> Self {
        Self::new(option_env!("STUDYHUB_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn categories_url(&self) -> String {
        format!("{}{}", self.base_url, CATEGORIES_API)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_url() {
        let config = ApiConfig::new("https://api.studyhub.dev/");
        assert_eq!(
            config.categories_url(),
            "https://api.studyhub.dev/api/v1/course/showAllCategories"
        );
    }

    #[test]
    fn test_default_base() {
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_BASE);
    }
}
