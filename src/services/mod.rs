pub mod auth_service;
pub mod quiz_service;
pub mod response_service;

pub use auth_service::AuthService;
pub use quiz_service::QuizService;
pub use response_service::ResponseService;
