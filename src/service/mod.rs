//! Exam generation.
//!
//! The [`ExamGenerator`] trait is the seam between the form and the
//! generation endpoint. [`GeminiClient`] is the production implementation;
//! tests substitute fakes.

mod gemini;
mod prompt;

use futures_util::future::BoxFuture;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::models::{Exam, QuestionAnswer};

pub use gemini::GeminiClient;
pub use prompt::{build_prompt, exam_schema};

/// The pending result of one generation request.
pub type GenerationFuture<'a> = BoxFuture<'a, Result<Exam, GenerationError>>;

/// Produces an exam for a topic. Implementations hold no per-call state.
pub trait ExamGenerator: Send + Sync {
    fn generate_exam<'a>(&'a self, topic: &'a str, count: usize) -> GenerationFuture<'a>;
}

/// User-facing generation failure. The underlying cause is logged, not shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("AI returned an invalid or empty exam format.")]
    InvalidFormat,
    #[error(
        "Failed to generate the exam. The AI model might be unavailable or the request was malformed."
    )]
    Unavailable,
}

/// What actually went wrong during a generation request.
#[derive(Debug, Error)]
pub enum FailureCause {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("endpoint returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("response contained no text")]
    MissingText,
    #[error("response text is not valid JSON: {0}")]
    Json(#[source] serde_json::Error),
    #[error("response is not an array")]
    NotAnArray,
    #[error("response array is empty")]
    EmptyArray,
    #[error("item {index} does not match the exam schema: {source}")]
    Schema {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl FailureCause {
    /// Collapse the cause into one of the two messages shown to the user.
    pub fn user_error(&self) -> GenerationError {
        match self {
            Self::NotAnArray | Self::EmptyArray => GenerationError::InvalidFormat,
            _ => GenerationError::Unavailable,
        }
    }
}

/// Parse the endpoint's JSON text into an exam of at most `count` questions.
///
/// The endpoint does not always honour the requested count, so any excess
/// is dropped from the tail.
pub fn parse_exam(text: &str, count: usize) -> Result<Exam, FailureCause> {
    let value: Value = serde_json::from_str(text.trim()).map_err(FailureCause::Json)?;

    let Value::Array(items) = value else {
        return Err(FailureCause::NotAnArray);
    };
    if items.is_empty() {
        return Err(FailureCause::EmptyArray);
    }

    let returned = items.len();
    if returned > count {
        warn!(returned, requested = count, "truncating oversized exam");
    }

    let questions = items
        .into_iter()
        .take(count)
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<QuestionAnswer>(item)
                .map_err(|source| FailureCause::Schema { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Exam::new(questions).ok_or(FailureCause::EmptyArray)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs_json(n: usize) -> String {
        let items: Vec<Value> = (1..=n)
            .map(|i| {
                serde_json::json!({
                    "question": format!("Question {}", i),
                    "answer": format!("Answer {}", i),
                })
            })
            .collect();
        Value::Array(items).to_string()
    }

    #[test]
    fn test_truncates_from_the_tail() {
        let exam = parse_exam(&pairs_json(5), 3).unwrap();
        let questions: Vec<&str> = exam.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(questions, ["Question 1", "Question 2", "Question 3"]);
    }

    #[test]
    fn test_length_is_min_of_returned_and_requested() {
        for (returned, requested) in [(1, 1), (2, 5), (5, 5), (20, 1), (7, 20)] {
            let exam = parse_exam(&pairs_json(returned), requested).unwrap();
            assert_eq!(exam.len(), returned.min(requested));
        }
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let text = format!("\n   {}  \n", pairs_json(2));
        assert_eq!(parse_exam(&text, 5).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_array_is_invalid_format() {
        let err = parse_exam("[]", 5).unwrap_err();
        assert!(matches!(err, FailureCause::EmptyArray));
        assert_eq!(err.user_error(), GenerationError::InvalidFormat);
    }

    #[test]
    fn test_non_array_is_invalid_format() {
        for text in [r#"{"question":"q","answer":"a"}"#, "\"text\"", "42", "null"] {
            let err = parse_exam(text, 5).unwrap_err();
            assert!(matches!(err, FailureCause::NotAnArray), "{}", text);
            assert_eq!(err.user_error(), GenerationError::InvalidFormat);
        }
    }

    #[test]
    fn test_malformed_json_is_unavailable() {
        let err = parse_exam("Here is your exam: [", 5).unwrap_err();
        assert!(matches!(err, FailureCause::Json(_)));
        assert_eq!(err.user_error(), GenerationError::Unavailable);
    }

    #[test]
    fn test_schema_violation_is_unavailable() {
        let err = parse_exam(r#"[{"question":"What is 2+2?"}]"#, 5).unwrap_err();
        assert!(matches!(err, FailureCause::Schema { index: 0, .. }));
        assert_eq!(err.user_error(), GenerationError::Unavailable);
    }

    #[test]
    fn test_items_past_the_count_are_not_checked() {
        let text = r#"[{"question":"q1","answer":"a1"},{"oops":true}]"#;
        assert_eq!(parse_exam(text, 1).unwrap().len(), 1);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            GenerationError::InvalidFormat.to_string(),
            "AI returned an invalid or empty exam format."
        );
        assert_eq!(
            GenerationError::Unavailable.to_string(),
            "Failed to generate the exam. The AI model might be unavailable or the request was malformed."
        );
    }
}
