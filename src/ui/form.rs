use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::app::{App, Focus};

pub const HEIGHT: u16 = 7;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .split(area);

    render_field(
        frame,
        chunks[0],
        "Math Topic",
        app.topic(),
        "e.g., 'Fractions', 'Calculus'",
        app.focus() == Focus::Topic,
    );
    render_field(
        frame,
        chunks[1],
        "Number of Questions (1-20)",
        app.question_count(),
        "",
        app.focus() == Focus::Count,
    );
    render_button(frame, chunks[2], app);
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    placeholder: &str,
    focused: bool,
) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };

    let mut spans = if value.is_empty() {
        vec![Span::styled(placeholder, Style::default().fg(Color::DarkGray))]
    } else {
        vec![Span::styled(value, Style::default().fg(Color::White))]
    };
    if focused {
        spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(label, Style::default().fg(Color::Gray))),
    );
    frame.render_widget(widget, area);
}

fn render_button(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.is_loading() {
        Line::from(vec![
            Span::styled(
                format!("{} ", app.spinner()),
                Style::default().fg(Color::Yellow).bold(),
            ),
            Span::styled("Generating...", Style::default().fg(Color::DarkGray)),
        ])
    } else {
        Line::from(Span::styled(
            "[ Generate Exam ]",
            Style::default().fg(Color::Green).bold(),
        ))
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

/// Error banner; cleared by the next submission.
pub fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let line = Line::from(vec![
        Span::styled("Error: ", Style::default().fg(Color::Red).bold()),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Red),
        );
    frame.render_widget(widget, area);
}
