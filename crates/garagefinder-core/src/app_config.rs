use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Google Maps Platform key (Places, Place Photos, Geocoding).
    /// Endpoints that need it answer with a 500 when it is absent.
    pub google_maps_api_key: Option<String>,
    /// Gemini key. When absent, generative features fall back to static content.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub places_base_url: String,
    pub gemini_base_url: String,
    pub news_feed_urls: Vec<String>,
    /// Optional YAML file replacing the built-in region catalog.
    pub regions_path: Option<PathBuf>,
    pub http_timeout_secs: u64,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field(
                "google_maps_api_key",
                &self.google_maps_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("places_base_url", &self.places_base_url)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("news_feed_urls", &self.news_feed_urls)
            .field("regions_path", &self.regions_path)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
