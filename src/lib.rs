//! # paged-quiz
//!
//! A paginated multiple-choice quiz for the terminal.
//!
//! Questions are loaded once from a JSON file or URL and shown a fixed
//! number per page. Each question takes one answer, immediately reveals
//! whether it was right along with an explanation, and then locks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use paged_quiz::{Quiz, QuizConfig, QuizError, QuizSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let source = QuizSource::parse("data.json");
//!     let quiz = Quiz::new(source, QuizConfig::default())?;
//!
//!     quiz.run().await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! The pagination and answer logic lives in [`QuizController`], which
//! drives any [`QuizView`]. The terminal UI is one such view.

mod config;
mod controller;
mod data;
pub mod logging;
mod messages;
mod models;
pub mod terminal;
mod ui;
mod view;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::debug;
use thiserror::Error;
use tokio::sync::oneshot;

pub use config::{
    ConfigError, PageCount, QuizConfig, DEFAULT_QUESTIONS_PER_PAGE, DEFAULT_TOTAL_PAGES,
};
pub use controller::QuizController;
pub use data::{
    load_questions, load_questions_with, parse_questions, LoadError, QuizSource, DEFAULT_SOURCE,
};
pub use messages::Locale;
pub use models::{AnswerState, LoadState, Options, QuestionId, QuestionRecord};
pub use ui::{Screen, TerminalView};
pub use view::{Mark, OptionLine, PageView, PaginationStatus, QuestionBlock, QuizView, ResultView};

/// Error type for quiz operations.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Failed to load questions: {0}")]
    Load(#[from] LoadError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to set up logging: {0}")]
    Logger(#[from] log::SetLoggerError),
}

type LoadResult = Result<Vec<QuestionRecord>, LoadError>;

/// A quiz ready to be run in the terminal.
pub struct Quiz {
    source: QuizSource,
    controller: QuizController,
}

impl Quiz {
    pub fn new(source: QuizSource, config: QuizConfig) -> Result<Self, QuizError> {
        config.validate()?;
        Ok(Self {
            source,
            controller: QuizController::new(config),
        })
    }

    pub fn controller(&self) -> &QuizController {
        &self.controller
    }

    /// Run the quiz in the terminal.
    ///
    /// The question set is fetched in the background while the loading
    /// screen is up. Returns when the user quits.
    pub async fn run(self) -> Result<(), QuizError> {
        let Quiz {
            source,
            mut controller,
        } = self;
        let mut view = TerminalView::new(controller.config().locale);

        let (tx, rx) = oneshot::channel::<LoadResult>();
        tokio::spawn(async move {
            let _ = tx.send(load_questions(&source).await);
        });

        let mut session = terminal::TerminalSession::enter()?;
        run_event_loop(session.terminal(), &mut controller, &mut view, rx)
    }
}

fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    controller: &mut QuizController,
    view: &mut TerminalView,
    mut pending: oneshot::Receiver<LoadResult>,
) -> Result<(), QuizError> {
    let mut loading = true;

    loop {
        if loading {
            loading = !poll_load(&mut pending, controller, view);
        }

        terminal.draw(|frame| ui::render(frame, view))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if handle_input(controller, view, key.code) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Hands the load outcome to the controller once it is available. Returns
/// true when the load has settled, including when the load task died
/// without sending anything.
fn poll_load<V: QuizView>(
    pending: &mut oneshot::Receiver<LoadResult>,
    controller: &mut QuizController,
    view: &mut V,
) -> bool {
    match pending.try_recv() {
        Ok(result) => controller.finish_load(result, view),
        Err(oneshot::error::TryRecvError::Empty) => return false,
        Err(oneshot::error::TryRecvError::Closed) => {
            debug!("Load task ended without a result");
            controller.finish_load(Err(LoadError::Aborted), view);
        }
    }
    true
}

/// Returns true if the quiz should exit.
fn handle_input(controller: &mut QuizController, view: &mut TerminalView, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        KeyCode::Down | KeyCode::Char('j') => view.highlight_next_option(),
        KeyCode::Up | KeyCode::Char('k') => view.highlight_previous_option(),
        KeyCode::Tab => view.focus_next_question(),
        KeyCode::BackTab => view.focus_previous_question(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Some((id, label)) = view.selection() {
                controller.check_answer(&id, label.as_deref(), view);
            }
        }
        KeyCode::Left | KeyCode::Char('h') => controller.previous_page(view),
        KeyCode::Right | KeyCode::Char('l') => controller.next_page(view),
        _ => {}
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> (QuizController, TerminalView) {
        let json = r#"[
            {"id": 1, "question": "One?", "options": {"A": "a", "B": "b"},
             "correct_answer": "B", "explanation": "b it is"},
            {"id": 2, "question": "Two?", "options": {"A": "a", "B": "b"},
             "correct_answer": "A", "explanation": "a it is"}
        ]"#;
        let config = QuizConfig {
            questions_per_page: 1,
            page_count: PageCount::Derived,
            ..QuizConfig::default()
        };
        let mut controller = QuizController::new(config);
        let mut view = TerminalView::new(Locale::En);
        controller.finish_load(parse_questions(json), &mut view);
        (controller, view)
    }

    fn rendered(view: &TerminalView) -> &PageView {
        match view.screen() {
            Screen::Page(page) => page,
            other => panic!("expected a page, got {:?}", other),
        }
    }

    #[test]
    fn test_enter_answers_highlighted_option() {
        let (mut controller, mut view) = loaded();

        assert!(!handle_input(&mut controller, &mut view, KeyCode::Char('j')));
        handle_input(&mut controller, &mut view, KeyCode::Enter);

        let block = &rendered(&view).questions[0];
        assert_eq!(block.mark_of("B"), Some(Mark::Correct));
        assert!(block.is_locked());
        assert!(controller.answer_state(&QuestionId::Number(1)).is_answered());
    }

    #[test]
    fn test_page_keys_navigate() {
        let (mut controller, mut view) = loaded();

        handle_input(&mut controller, &mut view, KeyCode::Char('l'));
        assert_eq!(controller.current_page(), 2);
        assert_eq!(rendered(&view).questions[0].id, QuestionId::Number(2));

        handle_input(&mut controller, &mut view, KeyCode::Right);
        assert_eq!(controller.current_page(), 2);

        handle_input(&mut controller, &mut view, KeyCode::Left);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(view.pagination().unwrap().label, "Page 1 / 2");
    }

    #[test]
    fn test_poll_load_waits_then_renders() {
        let (tx, mut rx) = oneshot::channel::<LoadResult>();
        let mut controller = QuizController::new(QuizConfig::default());
        let mut view = TerminalView::new(Locale::En);

        assert!(!poll_load(&mut rx, &mut controller, &mut view));
        assert_eq!(view.screen(), &Screen::Loading);
        assert_eq!(controller.load_state(), LoadState::Pending);

        tx.send(parse_questions("[]")).unwrap();
        assert!(poll_load(&mut rx, &mut controller, &mut view));
        assert_eq!(controller.load_state(), LoadState::Loaded);
        assert!(rendered(&view).questions.is_empty());
    }

    #[test]
    fn test_poll_load_reports_dropped_load_task() {
        let (tx, mut rx) = oneshot::channel::<LoadResult>();
        let mut controller = QuizController::new(QuizConfig::default());
        let mut view = TerminalView::new(Locale::En);
        drop(tx);

        assert!(poll_load(&mut rx, &mut controller, &mut view));
        assert_eq!(controller.load_state(), LoadState::Failed);
        assert!(controller.questions().is_empty());
        assert_eq!(
            view.screen(),
            &Screen::Failed {
                message: Locale::En.load_error().to_string()
            }
        );
    }

    #[test]
    fn test_quit_keys() {
        let (mut controller, mut view) = loaded();
        assert!(handle_input(&mut controller, &mut view, KeyCode::Char('q')));
        assert!(handle_input(&mut controller, &mut view, KeyCode::Esc));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = QuizConfig {
            questions_per_page: 0,
            ..QuizConfig::default()
        };
        let err = Quiz::new(QuizSource::default(), config).err().unwrap();
        assert!(matches!(err, QuizError::Config(ConfigError::ZeroQuestionsPerPage)));
    }
}
