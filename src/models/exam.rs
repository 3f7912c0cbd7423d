use serde::{Deserialize, Serialize};

/// A single generated question with its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

impl QuestionAnswer {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// An ordered, non-empty list of question/answer pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    items: Vec<QuestionAnswer>,
}

impl Exam {
    /// Returns `None` for an empty list; an exam always has at least one question.
    pub fn new(items: Vec<QuestionAnswer>) -> Option<Self> {
        if items.is_empty() {
            None
        } else {
            Some(Self { items })
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept alongside `len`.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QuestionAnswer> {
        self.items.get(index)
    }

    pub fn questions(&self) -> &[QuestionAnswer] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionAnswer> {
        self.items.iter()
    }
}
