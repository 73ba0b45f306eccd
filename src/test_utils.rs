#[cfg(test)]
pub mod fixtures {
    use serde_json::json;

    /// Renders a well-formed model reply with `count` questions. Question
    /// `i` (1-based) marks "Correct answer i" at rotating positions so
    /// shuffle tests can find the right option by content.
    pub fn sample_quiz_json(topic: &str, difficulty: &str, count: usize) -> String {
        let questions: Vec<_> = (1..=count)
            .map(|i| {
                let answer_index = (i - 1) % 4;
                let options: Vec<String> = (0..4)
                    .map(|slot| {
                        if slot == answer_index {
                            format!("Correct answer {i}")
                        } else {
                            format!("Distractor {i}.{slot}")
                        }
                    })
                    .collect();
                json!({
                    "question": format!("Sample question {i} about {topic}?"),
                    "options": options,
                    "answer_index": answer_index,
                    "explanation": format!("Sample explanation {i}.")
                })
            })
            .collect();

        json!({
            "topic": topic,
            "difficulty": difficulty,
            "questions": questions
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::quiz::QuizResponse;
    use validator::Validate;

    #[test]
    fn test_sample_quiz_json_matches_schema() {
        let raw = sample_quiz_json("algebra", "easy", 4);

        let quiz: QuizResponse = serde_json::from_str(&raw).unwrap();
        assert!(quiz.validate().is_ok());
        assert_eq!(quiz.questions.len(), 4);
    }

    #[test]
    fn test_sample_quiz_json_rotates_answer_slots() {
        let raw = sample_quiz_json("algebra", "easy", 4);
        let quiz: QuizResponse = serde_json::from_str(&raw).unwrap();

        let slots: Vec<u8> = quiz.questions.iter().map(|q| q.answer_index).collect();
        assert_eq!(slots, vec![0, 1, 2, 3]);
        for (i, q) in quiz.questions.iter().enumerate() {
            assert_eq!(
                q.options[q.answer_index as usize],
                format!("Correct answer {}", i + 1)
            );
        }
    }
}
