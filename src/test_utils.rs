use std::collections::BTreeMap;

use crate::models::{
    domain::{Question, QuestionKind, Quiz},
    dto::request::{SignupRequest, SubmitResponseRequest},
};

pub mod fixtures {
    use super::*;

    /// Two valid questions, the creation minimum.
    pub fn two_questions() -> Vec<Question> {
        vec![
            Question {
                kind: QuestionKind::ShortText,
                question: "What is your favourite colour?".to_string(),
                options: vec![],
            },
            Question {
                kind: QuestionKind::SingleChoice,
                question: "Pick a number".to_string(),
                options: vec!["one".to_string(), "two".to_string()],
            },
        ]
    }

    pub fn test_quiz(owner_id: &str) -> Quiz {
        Quiz::new("Trivia", owner_id, two_questions())
    }

    pub fn signup_request(name: &str, email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    pub fn submit_request(name: &str, email: &str) -> SubmitResponseRequest {
        let mut answers = BTreeMap::new();
        answers.insert("0".to_string(), "answer".to_string());
        SubmitResponseRequest {
            name: name.to_string(),
            email: email.to_string(),
            phone: "555-0100".to_string(),
            answers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixture_quiz_meets_creation_invariant() {
        let quiz = test_quiz("owner-1");
        assert!(quiz.questions.len() >= 2);
        assert!(!quiz.title.is_empty());
    }

    #[test]
    fn test_fixture_submit_request_is_complete() {
        let request = submit_request("Bob", "b@x.com");
        assert!(!request.name.is_empty());
        assert!(!request.phone.is_empty());
        assert_eq!(request.answers.len(), 1);
    }
}
