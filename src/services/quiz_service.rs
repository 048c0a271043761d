use std::sync::Arc;
use validator::Validate;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{
            request::{CreateQuizRequest, UpdateQuizRequest},
            response::{QuizSummary, QuizView},
        },
    },
    repositories::QuizRepository,
};

pub struct QuizService {
    repository: Arc<dyn QuizRepository>,
    /// When set, `update_quiz` reproduces the legacy open-write
    /// behavior: no token, no ownership check. When clear, only the
    /// owner may update.
    open_updates: bool,
}

impl QuizService {
    pub fn new(repository: Arc<dyn QuizRepository>, open_updates: bool) -> Self {
        Self {
            repository,
            open_updates,
        }
    }

    pub async fn create_quiz(&self, owner_id: &str, request: CreateQuizRequest) -> AppResult<String> {
        request.validate()?;

        let quiz = Quiz::new(&request.title, owner_id, request.questions);
        let quiz = self.repository.create(quiz).await?;

        log::info!("Account {} created quiz {}", owner_id, quiz.id);
        Ok(quiz.id)
    }

    /// Public lookup. The returned projection never carries the owner
    /// reference.
    pub async fn get_quiz(&self, id: &str) -> AppResult<QuizView> {
        let quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        Ok(quiz.into())
    }

    /// Replace title and the full question sequence. Ownership is only
    /// enforced when legacy open updates are disabled.
    pub async fn update_quiz(
        &self,
        caller: Option<&str>,
        id: &str,
        request: UpdateQuizRequest,
    ) -> AppResult<QuizView> {
        let mut quiz = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", id)))?;

        if !self.open_updates {
            let caller = caller.ok_or_else(|| {
                AppError::Unauthorized("Authentication required".to_string())
            })?;
            if caller != quiz.owner_id {
                return Err(AppError::Unauthorized(
                    "You can only edit your own quizzes".to_string(),
                ));
            }
        }

        quiz.replace_content(&request.title, request.questions);
        let quiz = self.repository.replace(quiz).await?;

        Ok(quiz.into())
    }

    /// Dashboard listing, newest-created-first.
    pub async fn list_owned(&self, owner_id: &str) -> AppResult<Vec<QuizSummary>> {
        let quizzes = self.repository.list_by_owner(owner_id).await?;
        Ok(quizzes.into_iter().map(QuizSummary::from).collect())
    }

    /// Used by the response-listing handler when the legacy open
    /// listing is disabled.
    pub async fn assert_owner(&self, quiz_id: &str, account_id: &str) -> AppResult<()> {
        let quiz = self
            .repository
            .find_by_id(quiz_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        if quiz.owner_id != account_id {
            return Err(AppError::Unauthorized(
                "You can only view responses to your own quizzes".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::quiz_repository::MockQuizRepository;
    use crate::test_utils::fixtures::{test_quiz, two_questions};

    #[tokio::test]
    async fn create_quiz_rejects_fewer_than_two_questions() {
        let service = QuizService::new(Arc::new(MockQuizRepository::new()), true);

        let result = service
            .create_quiz(
                "owner-1",
                CreateQuizRequest {
                    title: "Trivia".to_string(),
                    questions: vec![two_questions().remove(0)],
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn create_quiz_rejects_empty_title() {
        let service = QuizService::new(Arc::new(MockQuizRepository::new()), true);

        let result = service
            .create_quiz(
                "owner-1",
                CreateQuizRequest {
                    title: "".to_string(),
                    questions: two_questions(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn create_quiz_assigns_fresh_ids() {
        let mut repository = MockQuizRepository::new();
        repository.expect_create().returning(|quiz| Ok(quiz));
        let service = QuizService::new(Arc::new(repository), true);

        let request = CreateQuizRequest {
            title: "Trivia".to_string(),
            questions: two_questions(),
        };
        let first = service.create_quiz("owner-1", request.clone()).await.unwrap();
        let second = service.create_quiz("owner-1", request).await.unwrap();

        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn get_quiz_not_found() {
        let mut repository = MockQuizRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        let service = QuizService::new(Arc::new(repository), true);

        let result = service.get_quiz("missing").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn open_update_accepts_anonymous_caller() {
        let quiz = test_quiz("owner-1");
        let quiz_id = quiz.id.clone();

        let mut repository = MockQuizRepository::new();
        let stored = quiz.clone();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repository.expect_replace().returning(|quiz| Ok(quiz));

        let service = QuizService::new(Arc::new(repository), true);
        let updated = service
            .update_quiz(
                None,
                &quiz_id,
                UpdateQuizRequest {
                    title: "Renamed".to_string(),
                    questions: two_questions(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed");
    }

    #[tokio::test]
    async fn gated_update_rejects_anonymous_and_non_owner_callers() {
        let quiz = test_quiz("owner-1");
        let quiz_id = quiz.id.clone();

        let mut repository = MockQuizRepository::new();
        let stored = quiz.clone();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));

        let service = QuizService::new(Arc::new(repository), false);
        let request = UpdateQuizRequest {
            title: "Renamed".to_string(),
            questions: two_questions(),
        };

        let anonymous = service
            .update_quiz(None, &quiz_id, request.clone())
            .await
            .unwrap_err();
        assert!(matches!(anonymous, AppError::Unauthorized(_)));

        let stranger = service
            .update_quiz(Some("owner-2"), &quiz_id, request)
            .await
            .unwrap_err();
        assert!(matches!(stranger, AppError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn gated_update_accepts_the_owner() {
        let quiz = test_quiz("owner-1");
        let quiz_id = quiz.id.clone();

        let mut repository = MockQuizRepository::new();
        let stored = quiz.clone();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repository.expect_replace().returning(|quiz| Ok(quiz));

        let service = QuizService::new(Arc::new(repository), false);
        let updated = service
            .update_quiz(
                Some("owner-1"),
                &quiz_id,
                UpdateQuizRequest {
                    title: "Renamed".to_string(),
                    questions: two_questions(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "Renamed");
    }

    #[tokio::test]
    async fn update_quiz_not_found() {
        let mut repository = MockQuizRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        let service = QuizService::new(Arc::new(repository), true);

        let result = service
            .update_quiz(
                None,
                "missing",
                UpdateQuizRequest {
                    title: "Renamed".to_string(),
                    questions: two_questions(),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn list_owned_projects_to_summaries() {
        let mut repository = MockQuizRepository::new();
        repository.expect_list_by_owner().returning(|owner_id| {
            Ok(vec![
                Quiz::new("Second", owner_id, vec![]),
                Quiz::new("First", owner_id, vec![]),
            ])
        });

        let service = QuizService::new(Arc::new(repository), true);
        let summaries = service.list_owned("owner-1").await.unwrap();

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].title, "Second");
        assert!(summaries[0].created_at.is_some());
    }

    #[tokio::test]
    async fn assert_owner_rejects_strangers() {
        let quiz = test_quiz("owner-1");
        let quiz_id = quiz.id.clone();

        let mut repository = MockQuizRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(quiz.clone())));

        let service = QuizService::new(Arc::new(repository), true);
        assert!(service.assert_owner(&quiz_id, "owner-1").await.is_ok());
        assert!(matches!(
            service.assert_owner(&quiz_id, "owner-2").await,
            Err(AppError::Unauthorized(_))
        ));
    }
}
