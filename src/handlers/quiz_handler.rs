use std::sync::Arc;

use actix_web::{get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{AuthenticatedAccount, MaybeAuthenticated},
    errors::AppError,
    models::dto::{
        request::{CreateQuizRequest, UpdateQuizRequest},
        response::CreateQuizResponse,
    },
};

#[post("/api/quiz/create")]
pub async fn create_quiz(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedAccount,
    request: web::Json<CreateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz_id = state
        .quiz_service
        .create_quiz(auth.account_id(), request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(CreateQuizResponse { quiz_id }))
}

// Registered before the `{id}` routes so "user" is never read as an id.
#[get("/api/quiz/user")]
pub async fn list_owned_quizzes(
    state: web::Data<Arc<AppState>>,
    auth: AuthenticatedAccount,
) -> Result<HttpResponse, AppError> {
    let summaries = state.quiz_service.list_owned(auth.account_id()).await?;
    Ok(HttpResponse::Ok().json(summaries))
}

#[get("/api/quiz/{id}")]
pub async fn get_quiz(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.get_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[put("/api/quiz/{id}")]
pub async fn update_quiz(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: MaybeAuthenticated,
    request: web::Json<UpdateQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let quiz = state
        .quiz_service
        .update_quiz(auth.account_id(), &id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(quiz))
}
