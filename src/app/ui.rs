use chrono::Local;
use ratatui::{
    layout::Margin,
    prelude::*,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::Viewer;
use crate::format::status_text;
use crate::task::{Priority, Status, Todo};

const FOOTER: &str = "Arrow Up/Down to scroll, q to quit";

pub fn draw(frame: &mut Frame, viewer: &mut Viewer) {
    let size = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Min(1),    // list
                Constraint::Length(1), // footer
            ]
            .as_ref(),
        )
        .split(size);

    // borders take two rows
    viewer.set_viewport(chunks[0].height.saturating_sub(2) as usize);

    let scroll = u16::try_from(viewer.scroll).unwrap_or(u16::MAX);
    let body = Paragraph::new(viewer.lines.clone())
        .block(Block::default().borders(Borders::ALL).title("TODO List"))
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .scroll((scroll, 0));
    frame.render_widget(body, chunks[0]);

    let mut scrollbar = ScrollbarState::new(viewer.max_scroll()).position(viewer.scroll);
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(None)
            .end_symbol(None)
            .thumb_style(Style::default().bg(Color::Red)),
        chunks[0].inner(Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut scrollbar,
    );

    let footer =
        Paragraph::new(FOOTER).style(Style::default().fg(Color::White).bg(Color::DarkGray));
    frame.render_widget(footer, chunks[1]);
}

/// Three lines per todo: a blank spacer, the numbered title, then status and
/// priority.
pub fn todo_lines(todos: &[&Todo]) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(todos.len() * 3);
    for (i, todo) in todos.iter().enumerate() {
        lines.push(Line::default());

        let mut title = vec![Span::styled(
            format!("{}. {}", i + 1, todo.title),
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if let Some(created_at) = todo.created_at {
            title.push(Span::styled(
                format!(
                    " ({})",
                    created_at.with_timezone(&Local).format("%Y-%m-%d %H:%M")
                ),
                Style::default().fg(Color::DarkGray),
            ));
        }
        lines.push(Line::from(title));

        lines.push(Line::from(vec![
            Span::raw("Status: "),
            Span::styled(
                status_text(todo.status),
                Style::default().fg(status_color(todo.status)),
            ),
            Span::raw(" Priority: "),
            Span::styled(
                todo.priority.as_str(),
                Style::default().fg(priority_color(todo.priority)),
            ),
        ]));
    }
    lines
}

fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => Color::White,
        Status::InProgress => Color::Yellow,
        Status::Done => Color::Green,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::LightBlue,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::LightRed,
        Priority::Urgent => Color::Red,
    }
}
