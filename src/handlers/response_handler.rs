use std::sync::Arc;

use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::MaybeAuthenticated,
    errors::AppError,
    models::dto::{request::SubmitResponseRequest, response::SubmitResponseResponse},
};

#[post("/api/quiz/{id}/response")]
pub async fn submit_response(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    request: web::Json<SubmitResponseRequest>,
) -> Result<HttpResponse, AppError> {
    state
        .response_service
        .submit(&id, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(SubmitResponseResponse {
        message: "Response submitted successfully".to_string(),
    }))
}

#[get("/api/quiz/{id}/response")]
pub async fn list_responses(
    state: web::Data<Arc<AppState>>,
    id: web::Path<String>,
    auth: MaybeAuthenticated,
) -> Result<HttpResponse, AppError> {
    if !state.config.open_response_listing {
        let caller = auth
            .account_id()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))?;
        state.quiz_service.assert_owner(&id, caller).await?;
    }

    let responses = state.response_service.list(&id).await?;
    Ok(HttpResponse::Ok().json(responses))
}

#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
pub async fn health_check_ready(state: web::Data<Arc<AppState>>) -> HttpResponse {
    let db_health = state.db.health_check().await;

    let status = if db_health.is_ok() {
        "ready"
    } else {
        "not_ready"
    };

    let response = serde_json::json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": if db_health.is_ok() { "ok" } else { "error" }
        }
    });

    if db_health.is_ok() {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}

#[get("/health/live")]
pub async fn health_check_live() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "alive",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
