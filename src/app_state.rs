use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        AccountRepository, MongoAccountRepository, MongoQuizRepository, MongoResponseRepository,
        QuizRepository, ResponseRepository,
    },
    services::{AuthService, QuizService, ResponseService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub quiz_service: Arc<QuizService>,
    pub response_service: Arc<ResponseService>,
    pub jwt_service: JwtService,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let jwt_service = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);

        let account_repository = Arc::new(MongoAccountRepository::new(&db));
        account_repository.ensure_indexes().await?;
        let auth_service = Arc::new(AuthService::new(
            account_repository,
            jwt_service.clone(),
        ));

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db));
        quiz_repository.ensure_indexes().await?;
        let quiz_service = Arc::new(QuizService::new(quiz_repository, config.open_quiz_updates));

        let response_repository = Arc::new(MongoResponseRepository::new(&db));
        response_repository.ensure_indexes().await?;
        let response_service = Arc::new(ResponseService::new(response_repository));

        Ok(Self {
            auth_service,
            quiz_service,
            response_service,
            jwt_service,
            db,
            config: Arc::new(config),
        })
    }
}
