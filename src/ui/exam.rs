use std::ops::Range;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Focus};
use crate::models::Exam;

pub fn render(frame: &mut Frame, area: Rect, app: &App, exam: &Exam) {
    let focused = app.focus() == Focus::Exam;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(if focused { Color::Cyan } else { Color::DarkGray })
        .title(Span::styled(
            " Generated Exam ",
            Style::default().fg(Color::Cyan).bold(),
        ))
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1));

    let mut lines: Vec<Line> = Vec::new();
    let mut selected_lines = 0..0;

    for (index, item) in exam.iter().enumerate() {
        let is_selected = focused && index == app.selected_question();
        let first_line = lines.len();
        let marker = if is_selected { "> " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan).bold()),
            Span::styled(
                format!("Q{}: ", index + 1),
                Style::default().fg(Color::Cyan).bold(),
            ),
            Span::styled(item.question.as_str(), Style::default().fg(Color::White)),
        ]));

        let shown = app.is_answer_shown(index);
        let toggle_style = if is_selected {
            Style::default().fg(Color::Cyan).underlined()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            if shown { "    Hide Answer" } else { "    Show Answer" },
            toggle_style,
        )));

        if shown {
            lines.push(Line::from(vec![
                Span::styled("    Answer: ", Style::default().fg(Color::Green).bold()),
                Span::styled(item.answer.as_str(), Style::default().fg(Color::Gray)),
            ]));
        }
        if is_selected {
            selected_lines = first_line..lines.len();
        }
        lines.push(Line::from(""));
    }

    let inner = block.inner(area);
    let scroll = scroll_to(&lines, selected_lines, inner.width, inner.height);

    let widget = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(widget, area);
}

/// Rows to scroll so the selected question, measured after wrapping, is on screen.
fn scroll_to(lines: &[Line], selected: Range<usize>, width: u16, height: u16) -> u16 {
    let rows = |range: Range<usize>| {
        Paragraph::new(lines[range].to_vec())
            .wrap(Wrap { trim: false })
            .line_count(width)
    };

    let top = rows(0..selected.start);
    let bottom = top + rows(selected);
    let scroll = bottom.saturating_sub(height as usize).min(top);
    u16::try_from(scroll).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::models::QuestionAnswer;

    fn long_exam(n: usize) -> Exam {
        Exam::new(
            (1..=n)
                .map(|i| {
                    QuestionAnswer::new(
                        format!(
                            "A train leaves station {} at noon travelling at a steady speed of sixty miles per hour; how far has it gone by three?",
                            i
                        ),
                        format!("answer-{}", i),
                    )
                })
                .collect(),
        )
        .unwrap()
    }

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, app, app.exam().unwrap());
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..height {
            for x in 0..width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn focused_app(exam: Exam) -> App {
        let mut app = App::new();
        app.submit();
        app.complete(Ok(exam));
        app.focus_previous();
        assert_eq!(app.focus(), Focus::Exam);
        app
    }

    #[test]
    fn test_wrapped_selection_stays_on_screen() {
        let mut app = focused_app(long_exam(10));
        for _ in 0..8 {
            app.select_next_question();
        }
        app.toggle_selected_answer();

        let text = screen_text(&app, 40, 20);
        assert!(text.contains("> Q9:"), "selected question not on screen:\n{}", text);
        assert!(text.contains("Hide Answer"));
        assert!(text.contains("answer-9"));
    }

    #[test]
    fn test_last_question_reachable() {
        let mut app = focused_app(long_exam(10));
        for _ in 0..9 {
            app.select_next_question();
        }

        let text = screen_text(&app, 40, 20);
        assert!(text.contains("> Q10:"), "last question not on screen:\n{}", text);
    }

    #[test]
    fn test_first_question_without_scroll() {
        let app = focused_app(long_exam(3));
        let text = screen_text(&app, 40, 20);
        assert!(text.contains("Generated Exam"));
        assert!(text.contains("> Q1:"));
    }
}
