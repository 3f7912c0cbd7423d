//! Keyboard handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Focus};
use crate::models::ExamRequest;

/// Apply a key press to the app.
///
/// Returns a request when the key submitted a valid form.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<ExamRequest> {
    if key.code == KeyCode::Esc
        || (key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c'))
    {
        app.should_quit = true;
        return None;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus_next();
            None
        }
        KeyCode::BackTab => {
            app.focus_previous();
            None
        }
        _ => match app.focus() {
            Focus::Topic | Focus::Count => handle_form_input(app, key.code),
            Focus::Exam => {
                handle_exam_input(app, key.code);
                None
            }
        },
    }
}

fn handle_form_input(app: &mut App, key: KeyCode) -> Option<ExamRequest> {
    match key {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => {
            app.input_pop();
            None
        }
        KeyCode::Down => {
            app.focus_next();
            None
        }
        KeyCode::Up => {
            app.focus_previous();
            None
        }
        KeyCode::Char(c) => {
            app.input_push(c);
            None
        }
        _ => None,
    }
}

fn handle_exam_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Down | KeyCode::Char('j') => app.select_next_question(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_question(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected_answer(),
        _ => {}
    }
}
