mod exam;
mod request;
mod reveal;

pub use exam::{Exam, QuestionAnswer};
pub use request::{ExamRequest, ValidationError, MAX_QUESTIONS, MIN_QUESTIONS};
pub use reveal::RevealState;
