use secrecy::{ExposeSecret, SecretString};
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub openai_api_key: SecretString,
    pub openai_model: String,
    pub quiz_use_mock: bool,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY")
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
            ),
            openai_model: env::var("OPENAI_MODEL")
                .map(|m| m.trim().to_string())
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            quiz_use_mock: env::var("QUIZ_USE_MOCK")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
        }
    }

    pub fn has_api_key(&self) -> bool {
        !self.openai_api_key.expose_secret().is_empty()
    }

    /// Mock mode is explicit opt-in, but also the fallback when no API key
    /// is configured so the service stays usable without credentials.
    pub fn should_use_mock(&self) -> bool {
        self.quiz_use_mock || !self.has_api_key()
    }

    pub fn mode(&self) -> &'static str {
        if self.should_use_mock() {
            "mock"
        } else {
            "ai"
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            openai_api_key: SecretString::from("test_api_key".to_string()),
            openai_model: "gpt-4o-mini".to_string(),
            quiz_use_mock: false,
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
        }
    }
}
