use std::env;

const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // AI provider
    pub anthropic_api_key: String,
    pub model: String,

    // Content-addressed storage. Absent key means publication fails closed
    // at request time rather than at boot.
    pub lighthouse_api_key: Option<String>,

    // Web server
    pub web_host: String,
    pub web_port: u16,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            anthropic_api_key: required_env("ANTHROPIC_API_KEY"),
            model: env::var("CASEFILE_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            lighthouse_api_key: env::var("LIGHTHOUSE_API_KEY").ok(),
            web_host: env::var("WEB_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            web_port: env::var("WEB_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("WEB_PORT must be a number"),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}
