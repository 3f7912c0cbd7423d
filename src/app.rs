//! Form controller: owns the form inputs and the generation state machine.

use tracing::debug;

use crate::models::{Exam, ExamRequest, RevealState};
use crate::service::GenerationError;

pub const DEFAULT_TOPIC: &str = "Algebra";
pub const DEFAULT_QUESTION_COUNT: &str = "5";

/// Shown when a generation attempt ends without an error message.
pub const UNKNOWN_ERROR: &str = "An unknown error occurred. Please try again.";

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Where the form currently stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormStatus {
    /// Nothing submitted yet.
    Idle,
    /// Waiting on the generation endpoint.
    Loading,
    /// Last request produced an exam.
    Success(Exam),
    /// Last submission was rejected or failed.
    Failure(String),
}

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Topic,
    Count,
    Exam,
}

pub struct App {
    topic: String,
    question_count: String,
    status: FormStatus,
    focus: Focus,
    revealed: RevealState,
    selected_question: usize,
    spinner_tick: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self::with_inputs(DEFAULT_TOPIC, DEFAULT_QUESTION_COUNT)
    }

    pub fn with_inputs(topic: impl Into<String>, question_count: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            question_count: question_count.into(),
            status: FormStatus::Idle,
            focus: Focus::Topic,
            revealed: RevealState::new(),
            selected_question: 0,
            spinner_tick: 0,
            should_quit: false,
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn question_count(&self) -> &str {
        &self.question_count
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, FormStatus::Loading)
    }

    pub fn exam(&self) -> Option<&Exam> {
        match &self.status {
            FormStatus::Success(exam) => Some(exam),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FormStatus::Failure(message) => Some(message),
            _ => None,
        }
    }

    pub fn selected_question(&self) -> usize {
        self.selected_question
    }

    pub fn is_answer_shown(&self, index: usize) -> bool {
        self.revealed.is_shown(index)
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()]
    }

    /// Advance the loading spinner.
    pub fn tick(&mut self) {
        if self.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    /// Type a character into the focused input field.
    pub fn input_push(&mut self, c: char) {
        match self.focus {
            Focus::Topic => self.topic.push(c),
            Focus::Count => self.question_count.push(c),
            Focus::Exam => {}
        }
    }

    /// Delete the last character of the focused input field.
    pub fn input_pop(&mut self) {
        match self.focus {
            Focus::Topic => {
                self.topic.pop();
            }
            Focus::Count => {
                self.question_count.pop();
            }
            Focus::Exam => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Topic => Focus::Count,
            Focus::Count if self.exam().is_some() => Focus::Exam,
            Focus::Count | Focus::Exam => Focus::Topic,
        };
    }

    pub fn focus_previous(&mut self) {
        self.focus = match self.focus {
            Focus::Topic if self.exam().is_some() => Focus::Exam,
            Focus::Topic | Focus::Exam => Focus::Count,
            Focus::Count => Focus::Topic,
        };
    }

    /// Validate the form and, if valid, enter `Loading`.
    ///
    /// Returns the request to dispatch. Returns `None` while a request is
    /// already in flight or when validation fails; in the latter case the
    /// status becomes `Failure` with the validation message.
    pub fn submit(&mut self) -> Option<ExamRequest> {
        if self.is_loading() {
            return None;
        }

        match ExamRequest::parse(&self.topic, &self.question_count) {
            Ok(request) => {
                self.status = FormStatus::Loading;
                self.revealed.clear();
                self.selected_question = 0;
                self.spinner_tick = 0;
                if self.focus == Focus::Exam {
                    self.focus = Focus::Topic;
                }
                Some(request)
            }
            Err(err) => {
                debug!(%err, "form rejected");
                self.status = FormStatus::Failure(err.to_string());
                if self.focus == Focus::Exam {
                    self.focus = Focus::Topic;
                }
                None
            }
        }
    }

    /// Apply the outcome of the in-flight request.
    pub fn complete(&mut self, result: Result<Exam, GenerationError>) {
        match result {
            Ok(exam) => {
                self.revealed.clear();
                self.selected_question = 0;
                self.status = FormStatus::Success(exam);
            }
            Err(err) => self.fail(Some(err.to_string())),
        }
    }

    /// Enter `Failure`, falling back to a generic message.
    pub fn fail(&mut self, message: Option<String>) {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        self.status = FormStatus::Failure(message);
        if self.focus == Focus::Exam {
            self.focus = Focus::Topic;
        }
    }

    pub fn select_next_question(&mut self) {
        if let Some(exam) = self.exam() {
            let last = exam.len().saturating_sub(1);
            self.selected_question = (self.selected_question + 1).min(last);
        }
    }

    pub fn select_previous_question(&mut self) {
        self.selected_question = self.selected_question.saturating_sub(1);
    }

    /// Show or hide the answer of the selected question.
    pub fn toggle_selected_answer(&mut self) {
        self.toggle_answer(self.selected_question);
    }

    pub fn toggle_answer(&mut self, index: usize) {
        if self.exam().is_some_and(|exam| index < exam.len()) {
            self.revealed.toggle(index);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
