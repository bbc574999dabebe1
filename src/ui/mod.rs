//! Terminal rendering of the quiz.
//!
//! [`TerminalView`] is the terminal's stand-in for the host page: it keeps
//! whatever the controller last rendered plus the keyboard cursor, and
//! [`render`] draws it with ratatui.

mod footer;
mod page;
mod status;

use ratatui::{prelude::*, widgets::Block};

use crate::messages::Locale;
use crate::models::QuestionId;
use crate::view::{PageView, PaginationStatus, QuestionBlock, QuizView};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Failed { message: String },
    Page(PageView),
}

pub struct TerminalView {
    locale: Locale,
    screen: Screen,
    pagination: Option<PaginationStatus>,
    focus: usize,
    highlighted: usize,
}

impl TerminalView {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            screen: Screen::Loading,
            pagination: None,
            focus: 0,
            highlighted: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn pagination(&self) -> Option<&PaginationStatus> {
        self.pagination.as_ref()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    fn blocks(&self) -> &[QuestionBlock] {
        match &self.screen {
            Screen::Page(page) => &page.questions,
            _ => &[],
        }
    }

    fn focused_block(&self) -> Option<&QuestionBlock> {
        self.blocks().get(self.focus)
    }

    pub fn focus_next_question(&mut self) {
        if self.focus + 1 < self.blocks().len() {
            self.focus += 1;
            self.highlighted = 0;
        }
    }

    pub fn focus_previous_question(&mut self) {
        if self.focus > 0 {
            self.focus -= 1;
            self.highlighted = 0;
        }
    }

    pub fn highlight_next_option(&mut self) {
        let count = self.focused_block().map_or(0, |block| block.options.len());
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous_option(&mut self) {
        let count = self.focused_block().map_or(0, |block| block.options.len());
        if count > 0 {
            self.highlighted = (self.highlighted + count - 1) % count;
        }
    }

    /// The change event for the focused question: its id and the option
    /// currently picked, if it has any options at all.
    pub fn selection(&self) -> Option<(QuestionId, Option<String>)> {
        let block = self.focused_block()?;
        let label = block
            .options
            .get(self.highlighted)
            .map(|option| option.label.clone());
        Some((block.id.clone(), label))
    }
}

impl QuizView for TerminalView {
    fn render_page(&mut self, page: PageView) {
        self.screen = Screen::Page(page);
        self.focus = 0;
        self.highlighted = 0;
    }

    fn update_question(&mut self, block: QuestionBlock) {
        if let Screen::Page(page) = &mut self.screen {
            if let Some(slot) = page.questions.iter_mut().find(|q| q.id == block.id) {
                *slot = block;
            }
        }
    }

    fn update_pagination(&mut self, status: PaginationStatus) {
        self.pagination = Some(status);
    }

    fn show_load_error(&mut self, message: &str) {
        self.screen = Screen::Failed {
            message: message.to_string(),
        };
    }
}

pub fn render(frame: &mut Frame, view: &TerminalView) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match &view.screen {
        Screen::Loading => status::render_loading(frame, area, view.locale.loading()),
        Screen::Failed { message } => status::render_failed(frame, area, message),
        Screen::Page(page) => {
            let chunks = Layout::vertical([
                Constraint::Length(1),
                Constraint::Fill(1),
                Constraint::Length(2),
            ])
            .margin(1)
            .split(area);

            footer::render_header(frame, chunks[0], view.pagination.as_ref());
            page::render(
                frame,
                chunks[1],
                page,
                view.focus,
                view.highlighted,
                view.locale,
            );
            footer::render(frame, chunks[2], view.pagination.as_ref());
        }
    }
}
