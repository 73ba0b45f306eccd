use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::models::quiz::{Difficulty, QuizQuestion, QuizResponse};

const QUESTION_TEMPLATES: [&str; 5] = [
    "Which statement about {topic} is correct?",
    "What is a key idea in {topic}?",
    "Choose the best answer about {topic}.",
    "Which option best matches {topic}?",
    "What would be an example of {topic}?",
];

fn seeded_rng(topic: &str, difficulty: Difficulty, count: u8) -> StdRng {
    let mut hasher = Sha256::new();
    hasher.update(format!("{topic}-{difficulty}-{count}").as_bytes());
    StdRng::from_seed(hasher.finalize().into())
}

/// Builds a placeholder quiz without any AI call. The RNG is seeded from the
/// request fields, so the same `(topic, difficulty, count)` always yields
/// the same quiz.
pub fn generate_mock_quiz(topic: &str, difficulty: Difficulty, count: u8) -> QuizResponse {
    let mut rng = seeded_rng(topic, difficulty, count);

    let questions = (0..count as usize)
        .map(|i| {
            let template = QUESTION_TEMPLATES[i % QUESTION_TEMPLATES.len()];
            let question = format!("{} (Q{})", template.replace("{topic}", topic), i + 1);
            let options = ["A", "B", "C", "D"]
                .iter()
                .map(|label| format!("{topic} option {label} ({difficulty})"))
                .collect();
            let answer_index = rng.gen_range(0..4u8);

            QuizQuestion {
                question,
                options,
                answer_index,
                explanation: format!(
                    "Mock mode: option {} is marked correct so the app can work without AI.",
                    answer_index + 1
                ),
            }
        })
        .collect();

    QuizResponse {
        topic: topic.to_string(),
        difficulty,
        questions,
    }
}
