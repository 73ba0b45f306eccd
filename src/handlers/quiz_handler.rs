use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{app_state::AppState, errors::AppError, models::request::QuizRequest};

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "mock": state.config.should_use_mock(),
        "model": state.config.openai_model,
        "mode": state.config.mode(),
    }))
}

#[post("/generate-quiz")]
async fn generate_quiz(
    state: web::Data<AppState>,
    request: web::Json<QuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    let topic = request.topic.trim();
    if topic.is_empty() {
        return Err(AppError::InvalidInput("Topic cannot be empty.".into()));
    }
    request.validate()?;

    let quiz = state
        .quiz_service
        .generate_quiz(topic, request.difficulty, request.count)
        .await?;

    Ok(HttpResponse::Ok().json(quiz))
}
