pub mod account_repository;
pub mod quiz_repository;
pub mod response_repository;

pub use account_repository::{AccountRepository, MongoAccountRepository};
pub use quiz_repository::{MongoQuizRepository, QuizRepository};
pub use response_repository::{MongoResponseRepository, ResponseRepository};

use mongodb::error::{Error, ErrorKind, WriteFailure};

/// True when the driver error is a unique-index violation (E11000).
/// The repositories translate these into the domain conflict error for
/// the collection in question.
pub(crate) fn is_duplicate_key_error(err: &Error) -> bool {
    match *err.kind {
        ErrorKind::Write(WriteFailure::WriteError(ref write_error)) => write_error.code == 11000,
        _ => false,
    }
}
