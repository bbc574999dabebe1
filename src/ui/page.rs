use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::messages::Locale;
use crate::view::{Mark, OptionLine, PageView, QuestionBlock, ResultView};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    page: &PageView,
    focus: usize,
    highlighted: usize,
    locale: Locale,
) {
    if page.questions.is_empty() {
        let widget = Paragraph::new(locale.empty_page())
            .alignment(Alignment::Center)
            .fg(Color::DarkGray);
        frame.render_widget(widget, area);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut focus_start = 0;
    let mut focus_len = 0;

    for (index, block) in page.questions.iter().enumerate() {
        let is_focused = index == focus;
        let start = lines.len();
        if is_focused {
            focus_start = start;
        }

        push_block(&mut lines, block, is_focused.then_some(highlighted));

        if is_focused {
            focus_len = lines.len() - start;
        }
        lines.push(Line::from(""));
    }

    let scroll = scroll_offset(focus_start, focus_len, area.height as usize);
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        )
        .scroll((scroll as u16, 0));
    frame.render_widget(widget, area);
}

/// Smallest scroll that keeps the focused block in view, favouring its top.
fn scroll_offset(focus_start: usize, focus_len: usize, height: usize) -> usize {
    let visible = height.saturating_sub(1);
    if focus_start + focus_len <= visible {
        0
    } else if focus_len >= visible {
        focus_start
    } else {
        focus_start + focus_len - visible
    }
}

fn push_block<'a>(lines: &mut Vec<Line<'a>>, block: &'a QuestionBlock, highlighted: Option<usize>) {
    let heading_style = if highlighted.is_some() {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::White).bold()
    };
    let bar = if highlighted.is_some() { "▌ " } else { "  " };
    lines.push(Line::from(vec![
        Span::styled(bar, Style::default().fg(Color::Cyan)),
        Span::styled(block.heading.as_str(), heading_style),
    ]));

    if let Some(url) = &block.image_url {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(format!("[image] {}", url), Style::default().fg(Color::DarkGray)),
        ]));
    }

    for (index, option) in block.options.iter().enumerate() {
        lines.push(option_line(option, highlighted == Some(index)));
    }

    if let Some(result) = &block.result {
        push_result(lines, result);
    }
}

fn option_line(option: &OptionLine, is_highlighted: bool) -> Line<'static> {
    let (symbol, style) = match option.mark {
        Some(Mark::Correct) => ("✔", Style::default().fg(Color::Green).bold()),
        Some(Mark::Incorrect) => ("✘", Style::default().fg(Color::Red).bold()),
        None if !option.enabled => (" ", Style::default().fg(Color::DarkGray)),
        None if is_highlighted => (" ", Style::default().fg(Color::Yellow).bold()),
        None => (" ", Style::default().fg(Color::Gray)),
    };
    let marker = if is_highlighted { ">" } else { " " };

    Line::from(vec![
        Span::styled(format!("  {} ", marker), Style::default().fg(Color::Yellow)),
        Span::styled(format!("{} ", symbol), style),
        Span::styled(option.caption(), style),
    ])
}

fn push_result<'a>(lines: &mut Vec<Line<'a>>, result: &'a ResultView) {
    let color = if result.correct {
        Color::Green
    } else {
        Color::Red
    };
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(result.message.as_str(), Style::default().fg(color).bold()),
    ]));
    lines.push(Line::from(vec![
        Span::raw("    "),
        Span::styled(
            result.explanation_heading.as_str(),
            Style::default().fg(Color::White).bold(),
        ),
        Span::raw(" "),
        Span::styled(result.explanation.as_str(), Style::default().fg(Color::Gray)),
    ]));
}
