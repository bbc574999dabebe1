use ratatui::{prelude::*, widgets::Paragraph};

use crate::view::PaginationStatus;

pub fn render_header(frame: &mut Frame, area: Rect, pagination: Option<&PaginationStatus>) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let title = Paragraph::new("QUIZ").fg(Color::Cyan).bold();
    frame.render_widget(title, chunks[0]);

    if let Some(status) = pagination {
        let progress = Paragraph::new(status.label.as_str())
            .alignment(Alignment::Right)
            .fg(Color::DarkGray);
        frame.render_widget(progress, chunks[1]);
    }
}

/// Page info between the previous and next controls, plus key hints.
pub fn render(frame: &mut Frame, area: Rect, pagination: Option<&PaginationStatus>) {
    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).split(area);

    let (label, previous_enabled, next_enabled) = match pagination {
        Some(status) => (
            status.label.as_str(),
            status.previous_enabled,
            status.next_enabled,
        ),
        None => ("", false, false),
    };

    let controls = Line::from(vec![
        Span::styled("◀ prev", control_style(previous_enabled)),
        Span::raw("   "),
        Span::styled(label, Style::default().fg(Color::White).bold()),
        Span::raw("   "),
        Span::styled("next ▶", control_style(next_enabled)),
    ]);
    frame.render_widget(
        Paragraph::new(controls).alignment(Alignment::Center),
        chunks[0],
    );

    let hints = Paragraph::new(
        "j/k option  ·  tab question  ·  enter select  ·  h/l page  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(hints, chunks[1]);
}

fn control_style(enabled: bool) -> Style {
    if enabled {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    }
}
