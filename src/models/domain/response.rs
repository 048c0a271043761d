use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// One respondent submission. `name` and `email` keep the respondent's
/// original spelling; `name_key`/`email_key` hold the normalized
/// identity used for deduplication and carry the unique compound index
/// together with `quiz_id`.
///
/// Answers are keyed by the question's position in the quiz at
/// submission time, as a decimal string. The map is sparse; skipped
/// questions simply have no entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizResponse {
    pub id: String,
    pub quiz_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub name_key: String,
    pub email_key: String,
    pub answers: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

impl QuizResponse {
    pub fn new(
        quiz_id: &str,
        name: &str,
        email: &str,
        phone: &str,
        answers: BTreeMap<String, String>,
    ) -> Self {
        let (name_key, email_key) = normalized_identity(name, email);
        QuizResponse {
            id: Uuid::new_v4().to_string(),
            quiz_id: quiz_id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            name_key,
            email_key,
            answers,
            created_at: Utc::now(),
        }
    }
}

/// Deduplication key: both halves trimmed and lower-cased, so a
/// respondent cannot dodge the at-most-once rule with case or
/// whitespace variants. Note the asymmetry with account emails, which
/// are compared exactly as provided; the two policies are intentionally
/// kept apart.
pub fn normalized_identity(name: &str, email: &str) -> (String, String) {
    (name.trim().to_lowercase(), email.trim().to_lowercase())
}
