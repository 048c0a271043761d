use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

#[cfg(test)]
use mockall::automock;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::Account,
    repositories::is_duplicate_key_error,
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create(&self, account: Account) -> AppResult<Account>;
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
    async fn ensure_indexes(&self) -> AppResult<()>;
}

pub struct MongoAccountRepository {
    collection: Collection<Account>,
}

impl MongoAccountRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("accounts");
        Self { collection }
    }
}

#[async_trait]
impl AccountRepository for MongoAccountRepository {
    async fn create(&self, account: Account) -> AppResult<Account> {
        self.collection.insert_one(&account).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                AppError::AlreadyExists("An account with this email already exists".to_string())
            } else {
                e.into()
            }
        })?;
        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        // Exact-string match; no case folding for account emails.
        let account = self.collection.find_one(doc! { "email": email }).await?;
        Ok(account)
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for accounts collection");

        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(email_index).await?;

        log::info!("Successfully created indexes for accounts collection");
        Ok(())
    }
}
