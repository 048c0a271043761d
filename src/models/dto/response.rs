use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::domain::{Question, Quiz, QuizResponse};

#[derive(Debug, Clone, Serialize)]
pub struct SignupResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreateQuizResponse {
    #[serde(rename = "quizId")]
    pub quiz_id: String,
}

/// Public projection of a quiz. Deliberately omits the owner reference;
/// respondents only ever see title and questions.
#[derive(Debug, Clone, Serialize)]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub questions: Vec<Question>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizView {
    fn from(quiz: Quiz) -> Self {
        QuizView {
            id: quiz.id,
            title: quiz.title,
            questions: quiz.questions,
            created_at: quiz.created_at,
            updated_at: quiz.updated_at,
        }
    }
}

/// Dashboard listing entry for an author's own quizzes.
#[derive(Debug, Clone, Serialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Quiz> for QuizSummary {
    fn from(quiz: Quiz) -> Self {
        QuizSummary {
            id: quiz.id,
            title: quiz.title,
            created_at: quiz.created_at,
        }
    }
}

/// Review projection of a submission. The normalized dedup keys are an
/// internal detail and never leave the store layer.
#[derive(Debug, Clone, Serialize)]
pub struct ResponseView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub answers: BTreeMap<String, String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<QuizResponse> for ResponseView {
    fn from(response: QuizResponse) -> Self {
        ResponseView {
            name: response.name,
            email: response.email,
            phone: response.phone,
            answers: response.answers,
            created_at: response.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SubmitResponseResponse {
    pub message: String,
}
