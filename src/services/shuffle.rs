use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::quiz::QuizQuestion;

/// Randomly permutes a question's options while keeping track of which one
/// is correct.
///
/// Models tend to park the correct answer in the first slot; this reshuffle
/// makes the distribution of `answer_index` uniform regardless of what the
/// model did. The permutation comes from `SliceRandom::shuffle`, so every
/// ordering of the four options is equally likely.
///
/// Takes the RNG as a parameter so tests can pass a seeded generator;
/// production uses `rand::thread_rng()`.
///
/// An out-of-range `answer_index` is clamped to 0 before shuffling. That is
/// a defensive fallback for unvalidated input, not a data fix: it silently
/// picks option 0 as correct. Validated questions never hit it.
pub fn shuffle_question_options<R: Rng + ?Sized>(
    rng: &mut R,
    question: &QuizQuestion,
) -> QuizQuestion {
    let mut indices: Vec<usize> = (0..question.options.len()).collect();
    indices.shuffle(rng);

    let target_index = if (question.answer_index as usize) < question.options.len() {
        question.answer_index as usize
    } else {
        0
    };

    let reordered_options: Vec<String> = indices
        .iter()
        .map(|&i| question.options[i].clone())
        .collect();

    let new_answer_index = indices
        .iter()
        .position(|&i| i == target_index)
        .unwrap_or(0) as u8;

    QuizQuestion {
        question: question.question.clone(),
        options: reordered_options,
        answer_index: new_answer_index,
        explanation: question.explanation.clone(),
    }
}
