use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::{response::normalized_identity, QuizResponse},
        dto::{request::SubmitResponseRequest, response::ResponseView},
    },
    repositories::ResponseRepository,
};

pub struct ResponseService {
    repository: Arc<dyn ResponseRepository>,
}

impl ResponseService {
    pub fn new(repository: Arc<dyn ResponseRepository>) -> Self {
        Self { repository }
    }

    /// Record a submission, at most once per (quiz, normalized
    /// respondent). The pre-insert lookup gives the common duplicate a
    /// fast answer; the unique index behind `insert` catches the
    /// concurrent case. Quiz existence is deliberately not checked, so
    /// a submission against an unknown quiz id is stored as-is.
    pub async fn submit(&self, quiz_id: &str, request: SubmitResponseRequest) -> AppResult<String> {
        request.validate()?;

        let (name_key, email_key) = normalized_identity(&request.name, &request.email);

        if self
            .repository
            .find_duplicate(quiz_id, &name_key, &email_key)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateSubmission);
        }

        let response = QuizResponse::new(
            quiz_id,
            &request.name,
            &request.email,
            &request.phone,
            request.answers,
        );
        let response = self.repository.insert(response).await?;

        log::info!("Recorded response {} for quiz {}", response.id, quiz_id);
        Ok(response.id)
    }

    /// Review listing for a quiz, newest-first. Empty when the quiz id
    /// is unknown (no existence check here either).
    pub async fn list(&self, quiz_id: &str) -> AppResult<Vec<ResponseView>> {
        let responses = self.repository.list_by_quiz(quiz_id).await?;
        Ok(responses.into_iter().map(ResponseView::from).collect())
    }
}
