use url::Url;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Model used for every generation.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiApiConfig {
    /// API base URL.
    pub api_url: Url,
    /// Model identifier appended to the generateContent path.
    pub model: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeminiApiConfig {
    fn default() -> Self {
        Self {
            api_url: Url::parse("https://generativelanguage.googleapis.com")
                .expect("Default API URL must be valid"),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_targets_production_endpoint() {
        let config = GeminiApiConfig::default();
        assert_eq!(config.api_url.as_str(), "https://generativelanguage.googleapis.com/");
        assert_eq!(config.model, "gemini-2.5-flash");
    }
}
