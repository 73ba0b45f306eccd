use serde::Deserialize;
use validator::Validate;

use crate::models::quiz::Difficulty;

/// Inbound body for `POST /generate-quiz`. Constructed once per call.
#[derive(Clone, Debug, Deserialize, Validate)]
pub struct QuizRequest {
    #[validate(length(min = 2, max = 80))]
    pub topic: String,

    pub difficulty: Difficulty,

    #[validate(range(min = 1, max = 15))]
    pub count: u8,
}
