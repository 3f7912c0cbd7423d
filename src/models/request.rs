//! Local validation of the form inputs.

use thiserror::Error;

pub const MIN_QUESTIONS: usize = 1;
pub const MAX_QUESTIONS: usize = 20;

/// Why the form inputs were rejected before any request was made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a math topic.")]
    EmptyTopic,
    #[error("Please enter a valid number of questions (1-20).")]
    InvalidCount,
}

/// Validated parameters for one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamRequest {
    pub topic: String,
    pub question_count: usize,
}

impl ExamRequest {
    /// Validate raw form input. The topic is checked before the count.
    pub fn parse(topic: &str, question_count: &str) -> Result<Self, ValidationError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ValidationError::EmptyTopic);
        }

        let question_count = question_count
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|n| usize::try_from(n).ok())
            .filter(|n| (MIN_QUESTIONS..=MAX_QUESTIONS).contains(n))
            .ok_or(ValidationError::InvalidCount)?;

        Ok(Self {
            topic: topic.to_string(),
            question_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_valid_input() {
        let request = ExamRequest::parse("Fractions", "3").unwrap();
        assert_eq!(request.topic, "Fractions");
        assert_eq!(request.question_count, 3);

        assert!(ExamRequest::parse("Calculus", "1").is_ok());
        assert!(ExamRequest::parse("Calculus", "20").is_ok());
        assert_eq!(
            ExamRequest::parse("  Geometry ", " 7 ").unwrap(),
            ExamRequest {
                topic: "Geometry".to_string(),
                question_count: 7,
            }
        );
    }

    #[test]
    fn test_parse_rejects_blank_topic() {
        for topic in ["", "   ", "\t\n"] {
            assert_eq!(
                ExamRequest::parse(topic, "5"),
                Err(ValidationError::EmptyTopic)
            );
        }
        // topic is reported even when the count is also bad
        assert_eq!(
            ExamRequest::parse(" ", "abc"),
            Err(ValidationError::EmptyTopic)
        );
    }

    #[test]
    fn test_parse_rejects_bad_counts() {
        for count in ["0", "21", "-1", "abc", "", "3.5", "1e2", "99999999999999999999"] {
            assert_eq!(
                ExamRequest::parse("Algebra", count),
                Err(ValidationError::InvalidCount),
                "count {:?} should be rejected",
                count
            );
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::EmptyTopic.to_string(),
            "Please enter a math topic."
        );
        assert_eq!(
            ValidationError::InvalidCount.to_string(),
            "Please enter a valid number of questions (1-20)."
        );
    }
}
