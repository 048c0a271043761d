use serde::Deserialize;
use std::collections::BTreeMap;
use validator::Validate;

use crate::models::domain::Question;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(length(min = 1, message = "Name, email, and password are required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Name, email, and password are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Name, email, and password are required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email and password required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Email and password required"))]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, message = "Title and at least 2 questions required"))]
    pub title: String,

    #[validate(length(min = 2, message = "Title and at least 2 questions required"))]
    pub questions: Vec<Question>,
}

/// Update payload. Unlike creation, updates are not re-validated; the
/// reference behavior accepts whatever title and question list the
/// editor sends and replaces the document wholesale.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuizRequest {
    pub title: String,

    pub questions: Vec<Question>,
}

/// A respondent submission. Name, email and phone must be non-empty;
/// the answers map must be present but may be empty (a respondent can
/// skip every question).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitResponseRequest {
    #[validate(length(min = 1, message = "All fields are required"))]
    pub name: String,

    #[validate(length(min = 1, message = "All fields are required"))]
    pub email: String,

    #[validate(length(min = 1, message = "All fields are required"))]
    pub phone: String,

    pub answers: BTreeMap<String, String>,
}
