use crate::models::quiz::Difficulty;

pub const SYSTEM_PROMPT: &str = "You are a strict quiz generator. \
Return ONLY valid JSON. \
No markdown. No code fences. No extra text.";

/// Renders the user prompt for a quiz request. Deterministic for identical
/// inputs. The embedded example avoids literal "A/B/C/D" option text so the
/// model does not echo the letters, and spells out that the correct answer
/// must not be pinned to the first slot.
pub fn build_user_prompt(topic: &str, difficulty: Difficulty, count: u8) -> String {
    format!(
        r#"Create a multiple-choice quiz.

Constraints:
- Topic: {topic}
- Difficulty: {difficulty}
- Number of questions: {count}
- Each question must have exactly 4 options.
- Exactly one correct option.
- Avoid trick questions.
- Explanations must explain WHY in 1-2 sentences.
- The correct answer must not always be the first option; randomly place the right option somewhere among the four choices.
- answer_index must vary across 0-3 so every slot can host the correct answer.

Return JSON with this exact shape:
{{
  "topic": "{topic}",
  "difficulty": "{difficulty}",
  "questions": [
    {{
      "question": "string",
      "options": ["option 1", "option 2", "option 3", "option 4"],
      "answer_index": 0,
      "explanation": "short explanation"
    }}
  ]
}}

Rules:
- answer_index must be 0,1,2, or 3 and should be distributed so the correct option is not stuck at index 0.
- options must be 4 short strings
- Keep questions unambiguous"#
    )
}
