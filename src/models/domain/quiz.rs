use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub owner_id: String,
    pub questions: Vec<Question>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A single quiz question. `options` is only meaningful for
/// single-choice questions; short-text questions leave it empty. The
/// store does not validate option shape, the authoring UI does.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Question {
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Copy)]
pub enum QuestionKind {
    #[serde(rename = "single-choice")]
    SingleChoice,
    #[serde(rename = "short-text")]
    ShortText,
}

impl Quiz {
    pub fn new(title: &str, owner_id: &str, questions: Vec<Question>) -> Self {
        Quiz {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            owner_id: owner_id.to_string(),
            questions,
            created_at: Some(Utc::now()),
            updated_at: Some(Utc::now()),
        }
    }

    /// Full replace of title and question list. There is no field-level
    /// merge; the caller always supplies the complete new sequence.
    pub fn replace_content(&mut self, title: &str, questions: Vec<Question>) {
        self.title = title.to_string();
        self.questions = questions;
        self.updated_at = Some(Utc::now());
    }
}
