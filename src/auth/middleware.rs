use std::future::{ready, Ready};

use actix_web::{http::header::AUTHORIZATION, FromRequest, HttpRequest};

use crate::{auth::Claims, errors::AppError};

fn claims_from_request(req: &HttpRequest) -> Result<Claims, AppError> {
    let jwt_service = req
        .app_data::<actix_web::web::Data<crate::auth::JwtService>>()
        .ok_or_else(|| AppError::InternalError("JWT service not configured".to_string()))?;

    let auth_header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization header format".to_string()))?;

    jwt_service.validate_token(token)
}

/// Extractor for owner-scoped handlers. Rejects the request with
/// `Unauthorized` before the handler body runs when the bearer token is
/// missing, malformed, expired, or badly signed. Identity is re-derived
/// from the token on every request; nothing is remembered across calls.
pub struct AuthenticatedAccount(pub Claims);

impl AuthenticatedAccount {
    pub fn account_id(&self) -> &str {
        &self.0.sub
    }
}

impl FromRequest for AuthenticatedAccount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(claims_from_request(req).map(AuthenticatedAccount))
    }
}

/// Extractor for routes that are public in the legacy behavior but
/// owner-gated when the corresponding config flag is disabled. Carries
/// claims when a valid bearer token is present, `None` otherwise; a
/// present-but-invalid token counts as no token.
pub struct MaybeAuthenticated(pub Option<Claims>);

impl MaybeAuthenticated {
    pub fn account_id(&self) -> Option<&str> {
        self.0.as_ref().map(|claims| claims.sub.as_str())
    }
}

impl FromRequest for MaybeAuthenticated {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        ready(Ok(MaybeAuthenticated(claims_from_request(req).ok())))
    }
}
