pub mod account;
pub mod quiz;
pub mod response;

pub use account::Account;
pub use quiz::{Question, QuestionKind, Quiz};
pub use response::QuizResponse;
