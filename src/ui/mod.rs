//! Screen rendering.

mod exam;
mod form;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let banner_height = if app.error().is_some() { 3 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(form::HEIGHT),
        Constraint::Length(banner_height),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_header(frame, chunks[0]);
    form::render(frame, chunks[1], app);
    if let Some(message) = app.error() {
        form::render_error(frame, chunks[2], message);
    }
    // A stale exam is never drawn next to the spinner.
    if !app.is_loading() {
        if let Some(exam) = app.exam() {
            exam::render(frame, chunks[3], app, exam);
        }
    }
    render_controls(frame, chunks[4], app);
}

fn render_header(frame: &mut Frame, area: Rect) {
    let content = vec![
        Line::from(Span::styled(
            "Math Exam Generator",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Create custom math quizzes with the power of AI.".fg(Color::DarkGray)),
    ];

    frame.render_widget(
        Paragraph::new(content).alignment(Alignment::Center),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect, app: &App) {
    let hint = if app.exam().is_some() {
        "tab switch  ·  enter generate / toggle  ·  j/k move  ·  esc quit"
    } else {
        "tab switch  ·  enter generate  ·  esc quit"
    };

    let widget = Paragraph::new(hint)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}

