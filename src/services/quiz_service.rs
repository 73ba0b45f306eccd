use std::sync::Arc;

use crate::{
    config::Config,
    constants::prompts::{build_user_prompt, SYSTEM_PROMPT},
    errors::AppResult,
    models::quiz::{Difficulty, QuizResponse},
    services::{
        mock_quiz::generate_mock_quiz, model_service::ModelClient,
        reply_validator::validate_model_reply, shuffle::shuffle_question_options,
    },
};

/// Orchestrates quiz generation: prompt -> model -> validate -> shuffle.
/// Holds no per-request state; every call is independent.
pub struct QuizService {
    client: Arc<dyn ModelClient>,
    config: Arc<Config>,
}

impl QuizService {
    pub fn new(client: Arc<dyn ModelClient>, config: Arc<Config>) -> Self {
        Self { client, config }
    }

    pub fn mock_enabled(&self) -> bool {
        self.config.should_use_mock()
    }

    pub async fn generate_quiz(
        &self,
        topic: &str,
        difficulty: Difficulty,
        count: u8,
    ) -> AppResult<QuizResponse> {
        if self.mock_enabled() {
            log::info!("generating mock quiz: topic={topic} difficulty={difficulty} count={count}");
            return Ok(generate_mock_quiz(topic, difficulty, count));
        }

        log::info!("generating AI quiz: topic={topic} difficulty={difficulty} count={count}");
        let user_prompt = build_user_prompt(topic, difficulty, count);
        let raw = self.client.chat_completion(SYSTEM_PROMPT, &user_prompt).await?;

        let quiz = validate_model_reply(&raw, count as usize)?;

        // Reshuffle every question so the model's positional bias cannot
        // leak into the response.
        let mut rng = rand::thread_rng();
        let questions = quiz
            .questions
            .iter()
            .map(|q| shuffle_question_options(&mut rng, q))
            .collect();

        Ok(QuizResponse {
            topic: quiz.topic,
            difficulty: quiz.difficulty,
            questions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::services::model_service::MockModelClient;
    use crate::test_utils::fixtures::sample_quiz_json;

    fn service_with_reply(reply: String) -> QuizService {
        let mut client = MockModelClient::new();
        client
            .expect_chat_completion()
            .returning(move |_, _| Ok(reply.clone()));
        QuizService::new(Arc::new(client), Arc::new(Config::test_config()))
    }

    #[actix_web::test]
    async fn test_generate_quiz_happy_path() {
        let service = service_with_reply(sample_quiz_json("algebra", "easy", 3));

        let quiz = service
            .generate_quiz("algebra", Difficulty::Easy, 3)
            .await
            .expect("generation should succeed");

        assert_eq!(quiz.topic, "algebra");
        assert_eq!(quiz.difficulty, Difficulty::Easy);
        assert_eq!(quiz.questions.len(), 3);
        for question in &quiz.questions {
            assert_eq!(question.options.len(), 4);
            assert!(question.answer_index <= 3);
        }
    }

    #[actix_web::test]
    async fn test_shuffle_preserves_correct_option_content() {
        let service = service_with_reply(sample_quiz_json("algebra", "easy", 3));

        let quiz = service
            .generate_quiz("algebra", Difficulty::Easy, 3)
            .await
            .unwrap();

        // Fixture questions mark "Correct answer N" as the right option.
        for (i, question) in quiz.questions.iter().enumerate() {
            assert_eq!(
                question.options[question.answer_index as usize],
                format!("Correct answer {}", i + 1)
            );
        }
    }

    #[actix_web::test]
    async fn test_garbage_reply_surfaces_malformed_json() {
        let service = service_with_reply("the model had a bad day".to_string());

        let err = service
            .generate_quiz("algebra", Difficulty::Easy, 3)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::MalformedJson(_)));
    }

    #[actix_web::test]
    async fn test_undercount_reply_surfaces_count_mismatch() {
        let service = service_with_reply(sample_quiz_json("algebra", "easy", 3));

        let err = service
            .generate_quiz("algebra", Difficulty::Easy, 5)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::CountMismatch {
                expected: 5,
                actual: 3
            }
        ));
    }

    #[actix_web::test]
    async fn test_transport_error_propagates() {
        let mut client = MockModelClient::new();
        client
            .expect_chat_completion()
            .returning(|_, _| Err(AppError::Transport("connection reset".into())));
        let service = QuizService::new(Arc::new(client), Arc::new(Config::test_config()));

        let err = service
            .generate_quiz("algebra", Difficulty::Easy, 3)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Transport(_)));
    }

    #[actix_web::test]
    async fn test_mock_mode_skips_model_client() {
        let mut client = MockModelClient::new();
        client.expect_chat_completion().never();

        let config = Config {
            quiz_use_mock: true,
            ..Config::test_config()
        };
        let service = QuizService::new(Arc::new(client), Arc::new(config));

        assert!(service.mock_enabled());
        let quiz = service
            .generate_quiz("rust", Difficulty::Hard, 4)
            .await
            .unwrap();

        assert_eq!(quiz.questions.len(), 4);
    }
}
