use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::{
    config::Config,
    errors::{AppError, AppResult},
};

const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const TEMPERATURE: f32 = 0.4;

/// Opaque chat-completion seam: `(system prompt, user prompt) -> raw text`.
/// The pipeline never looks past this boundary; tests stub it out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn chat_completion(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String>;
}

#[derive(Clone)]
pub struct OpenAiModelClient {
    http: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl OpenAiModelClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.openai_api_key.clone(),
            base_url: OPENAI_API_BASE.to_string(),
            model: config.openai_model.clone(),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionReply {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl ModelClient for OpenAiModelClient {
    async fn chat_completion(&self, system_prompt: &str, user_prompt: &str) -> AppResult<String> {
        if self.api_key.expose_secret().is_empty() {
            return Err(AppError::Configuration("OPENAI_API_KEY not set.".into()));
        }

        // response_format=json_object cuts down on fenced or prose replies.
        let body = json!({
            "model": self.model,
            "temperature": TEMPERATURE,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt }
            ]
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AppError::Configuration(
                "OpenAI rejected the API key.".into(),
            ));
        }
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::Transport(format!(
                "OpenAI request failed ({status}): {text}"
            )));
        }

        let reply: ChatCompletionReply = response
            .json()
            .await
            .map_err(|e| AppError::Transport(format!("OpenAI reply unreadable: {e}")))?;

        reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| AppError::Transport("OpenAI reply contained no choices.".into()))
    }
}
