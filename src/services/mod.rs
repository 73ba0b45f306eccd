pub mod mock_quiz;
pub mod model_service;
pub mod quiz_service;
pub mod reply_validator;
pub mod shuffle;
