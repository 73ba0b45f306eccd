use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{ModelClient, OpenAiModelClient},
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Wires the service against a live OpenAI-backed client.
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiModelClient::new(&config));
        Self::with_client(config, client)
    }

    /// Wires the service against an arbitrary model client. Integration
    /// tests use this to inject a stub.
    pub fn with_client(config: Config, client: Arc<dyn ModelClient>) -> Self {
        let config = Arc::new(config);
        let quiz_service = Arc::new(QuizService::new(client, Arc::clone(&config)));
        Self {
            quiz_service,
            config,
        }
    }
}
