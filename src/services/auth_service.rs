use std::sync::Arc;
use validator::Validate;

use crate::{
    auth::{password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::Account,
        dto::{
            request::{LoginRequest, SignupRequest},
            response::LoginResponse,
        },
    },
    repositories::AccountRepository,
};

pub struct AuthService {
    repository: Arc<dyn AccountRepository>,
    jwt_service: JwtService,
}

impl AuthService {
    pub fn new(repository: Arc<dyn AccountRepository>, jwt_service: JwtService) -> Self {
        Self {
            repository,
            jwt_service,
        }
    }

    /// Create an account. Does not log the caller in; the client is
    /// expected to follow up with `login`.
    pub async fn signup(&self, request: SignupRequest) -> AppResult<String> {
        request.validate()?;

        // Advisory pre-check for a friendly error; the unique email
        // index is the actual guarantee.
        if self
            .repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(AppError::AlreadyExists(
                "An account with this email already exists".to_string(),
            ));
        }

        let password = request.password.clone();
        let password_hash = tokio::task::spawn_blocking(move || password::hash_password(&password))
            .await
            .map_err(|e| AppError::InternalError(format!("Hashing task failed: {}", e)))??;

        let account = Account::new(&request.name, &request.email, &password_hash);
        let account = self.repository.create(account).await?;

        log::info!("Created account {}", account.id);
        Ok(account.id)
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let account = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password = request.password.clone();
        let stored_hash = account.password_hash.clone();
        let password_matches =
            tokio::task::spawn_blocking(move || password::verify_password(&password, &stored_hash))
                .await
                .map_err(|e| AppError::InternalError(format!("Hashing task failed: {}", e)))?;

        if !password_matches {
            return Err(AppError::InvalidCredentials);
        }

        let token = self.jwt_service.create_token(&account.id)?;

        Ok(LoginResponse {
            token,
            name: account.name,
        })
    }

    /// Resolve a bearer token to the account id it was issued for.
    pub fn verify(&self, token: &str) -> AppResult<String> {
        let claims = self.jwt_service.validate_token(token)?;
        Ok(claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::signup_request;
    use crate::{config::Config, repositories::account_repository::MockAccountRepository};
    use mockall::predicate::eq;

    fn service_with(repository: MockAccountRepository) -> AuthService {
        let config = Config::test_config();
        AuthService::new(
            Arc::new(repository),
            JwtService::new(&config.jwt_secret, config.jwt_expiration_hours),
        )
    }

    #[tokio::test]
    async fn signup_rejects_empty_fields_without_touching_the_store() {
        let repository = MockAccountRepository::new();
        let service = service_with(repository);

        let result = service.signup(signup_request("", "a@x.com", "secret1")).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[tokio::test]
    async fn signup_returns_a_fresh_account_id() {
        let mut repository = MockAccountRepository::new();
        repository
            .expect_find_by_email()
            .with(eq("a@x.com"))
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .times(1)
            .returning(|account| Ok(account));

        let service = service_with(repository);
        let account_id = service
            .signup(signup_request("Alice", "a@x.com", "secret1"))
            .await
            .unwrap();
        assert!(!account_id.is_empty());
    }

    #[tokio::test]
    async fn signup_conflicts_on_existing_email() {
        let mut repository = MockAccountRepository::new();
        repository.expect_find_by_email().returning(|_| {
            Ok(Some(Account::new("Someone", "a@x.com", "$argon2id$existing")))
        });

        let service = service_with(repository);
        let result = service
            .signup(signup_request("Alice", "a@x.com", "different"))
            .await;
        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn login_unknown_email_and_wrong_password_are_indistinguishable() {
        let stored = Account::new("Alice", "a@x.com", &password::hash_password("secret1").unwrap());

        let mut repository = MockAccountRepository::new();
        let stored_clone = stored.clone();
        repository.expect_find_by_email().returning(move |email| {
            if email == "a@x.com" {
                Ok(Some(stored_clone.clone()))
            } else {
                Ok(None)
            }
        });

        let service = service_with(repository);

        let unknown = service
            .login(LoginRequest {
                email: "nobody@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap_err();
        let wrong_password = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "wrong".to_string(),
            })
            .await
            .unwrap_err();

        assert_eq!(unknown.to_string(), wrong_password.to_string());
        assert!(matches!(unknown, AppError::InvalidCredentials));
        assert!(matches!(wrong_password, AppError::InvalidCredentials));
    }

    #[tokio::test]
    async fn login_returns_token_bound_to_account_id_and_display_name() {
        let stored = Account::new("Alice", "a@x.com", &password::hash_password("secret1").unwrap());
        let account_id = stored.id.clone();

        let mut repository = MockAccountRepository::new();
        repository
            .expect_find_by_email()
            .returning(move |_| Ok(Some(stored.clone())));

        let service = service_with(repository);
        let response = service
            .login(LoginRequest {
                email: "a@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.name, "Alice");
        assert_eq!(service.verify(&response.token).unwrap(), account_id);
    }

    #[tokio::test]
    async fn verify_rejects_garbage_tokens() {
        let service = service_with(MockAccountRepository::new());
        assert!(matches!(
            service.verify("not.a.jwt"),
            Err(AppError::Unauthorized(_))
        ));
    }
}
