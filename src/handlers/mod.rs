pub mod auth_handler;
pub mod quiz_handler;
pub mod response_handler;

pub use auth_handler::{login, signup};
pub use quiz_handler::{create_quiz, get_quiz, list_owned_quizzes, update_quiz};
pub use response_handler::{
    health_check, health_check_live, health_check_ready, list_responses, submit_response,
};
