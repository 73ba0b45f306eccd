pub mod quiz;
pub mod request;

pub use quiz::{Difficulty, QuizQuestion, QuizResponse};
pub use request::QuizRequest;
