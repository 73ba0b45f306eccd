use serde::{Deserialize, Serialize};
use validator::Validate;

/// Difficulty level used to steer question generation. Serialized in its
/// lowercase wire form; unknown levels are deserialization errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// A single 4-option multiple-choice question. `answer_index` must index the
/// correct option for the current `options` ordering; reordering must keep
/// that invariant.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuizQuestion {
    #[validate(length(min = 5))]
    pub question: String,

    #[validate(length(min = 4, max = 4))]
    pub options: Vec<String>,

    #[validate(range(min = 0, max = 3))]
    pub answer_index: u8,

    #[validate(length(min = 3))]
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct QuizResponse {
    pub topic: String,
    pub difficulty: Difficulty,

    #[validate(nested)]
    pub questions: Vec<QuizQuestion>,
}
