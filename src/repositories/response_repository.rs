use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::doc,
    options::{FindOptions, IndexOptions},
    Collection, IndexModel,
};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::QuizResponse,
    repositories::is_duplicate_key_error,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ResponseRepository: Send + Sync {
    /// Insert a submission. A unique-index violation on
    /// (quiz_id, name_key, email_key) surfaces as `DuplicateSubmission`,
    /// which closes the check-then-insert race between two concurrent
    /// submissions with the same normalized identity.
    async fn insert(&self, response: QuizResponse) -> AppResult<QuizResponse>;
    async fn find_duplicate(
        &self,
        quiz_id: &str,
        name_key: &str,
        email_key: &str,
    ) -> AppResult<Option<QuizResponse>>;
    async fn list_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizResponse>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoResponseRepository {
    collection: Collection<QuizResponse>,
}

impl MongoResponseRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("responses");
        Self { collection }
    }
}

#[async_trait]
impl ResponseRepository for MongoResponseRepository {
    async fn insert(&self, response: QuizResponse) -> AppResult<QuizResponse> {
        self.collection.insert_one(&response).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::DuplicateSubmission
            } else {
                e.into()
            }
        })?;
        Ok(response)
    }

    async fn find_duplicate(
        &self,
        quiz_id: &str,
        name_key: &str,
        email_key: &str,
    ) -> AppResult<Option<QuizResponse>> {
        let existing = self
            .collection
            .find_one(doc! {
                "quiz_id": quiz_id,
                "name_key": name_key,
                "email_key": email_key,
            })
            .await?;
        Ok(existing)
    }

    async fn list_by_quiz(&self, quiz_id: &str) -> AppResult<Vec<QuizResponse>> {
        let find_options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let cursor = self
            .collection
            .find(doc! { "quiz_id": quiz_id })
            .with_options(find_options)
            .await?;
        let responses: Vec<QuizResponse> = cursor.try_collect().await?;

        Ok(responses)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for responses collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        // At most one response per quiz and normalized respondent.
        let respondent_index = IndexModel::builder()
            .keys(doc! { "quiz_id": 1, "name_key": 1, "email_key": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("quiz_respondent_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;
        self.collection.create_index(respondent_index).await?;

        log::info!("Successfully created indexes for responses collection");
        Ok(())
    }
}
