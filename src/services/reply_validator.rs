use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::quiz::QuizResponse,
};

/// Validates a raw model reply against the quiz schema.
///
/// The reply is untrusted: models emit markdown fences, truncated output,
/// missing fields, and the wrong number of questions. Each stage fails with
/// its own error kind so callers (and tests) can tell the failure modes
/// apart:
///
/// 1. JSON parse          -> [`AppError::MalformedJson`]
/// 2. schema + constraints -> [`AppError::SchemaViolation`]
/// 3. question count       -> [`AppError::CountMismatch`]
/// 4. per-question options -> [`AppError::OptionCountMismatch`]
///
/// Validation never coerces; a reply that does not match the contract
/// exactly is rejected.
pub fn validate_model_reply(raw: &str, expected_count: usize) -> AppResult<QuizResponse> {
    let value: serde_json::Value = serde_json::from_str(raw.trim())
        .map_err(|e| AppError::MalformedJson(e.to_string()))?;

    let quiz: QuizResponse = serde_json::from_value(value)
        .map_err(|e| AppError::SchemaViolation(e.to_string()))?;

    quiz.validate()
        .map_err(|e| AppError::SchemaViolation(e.to_string()))?;

    if quiz.questions.len() != expected_count {
        return Err(AppError::CountMismatch {
            expected: expected_count,
            actual: quiz.questions.len(),
        });
    }

    // The schema stage already pins options to 4; re-checked here so a
    // malformed question is named by its 1-based position.
    for (i, question) in quiz.questions.iter().enumerate() {
        if question.options.len() != 4 {
            return Err(AppError::OptionCountMismatch {
                index: i + 1,
                actual: question.options.len(),
            });
        }
    }

    Ok(quiz)
}
