use std::sync::Arc;

use actix_web::{post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, SignupRequest},
        response::SignupResponse,
    },
};

#[post("/api/auth/signup")]
pub async fn signup(
    state: web::Data<Arc<AppState>>,
    request: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    state.auth_service.signup(request.into_inner()).await?;

    Ok(HttpResponse::Ok().json(SignupResponse {
        message: "User created successfully".to_string(),
    }))
}

#[post("/api/auth/login")]
pub async fn login(
    state: web::Data<Arc<AppState>>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.login(request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}
