//! Rendering capability driven by [`QuizController`](crate::QuizController).
//!
//! The controller owns all quiz state and hands the view plain values
//! describing what to show. A view never decides correctness or pagination.

use crate::messages::Locale;
use crate::models::{AnswerState, QuestionId, QuestionRecord};

/// Marker on an option once its question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionLine {
    pub label: String,
    pub text: String,
    pub mark: Option<Mark>,
    pub enabled: bool,
}

impl OptionLine {
    /// Caption shown next to the input, `"<label>. <text>"`.
    pub fn caption(&self) -> String {
        format!("{}. {}", self.label, self.text)
    }
}

/// Contents of a question's result area after it has been answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    pub correct: bool,
    pub message: String,
    pub explanation_heading: String,
    pub explanation: String,
}

/// One rendered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    pub id: QuestionId,
    pub heading: String,
    pub image_url: Option<String>,
    pub options: Vec<OptionLine>,
    /// `None` is the empty result placeholder of an unanswered question.
    pub result: Option<ResultView>,
}

impl QuestionBlock {
    /// Builds the block for `record` as its answer state dictates.
    ///
    /// Returns the block and whether the correct answer could be located
    /// among the options. It can only be missing for answered questions
    /// whose data is broken.
    pub(crate) fn build(
        record: &QuestionRecord,
        state: &AnswerState,
        locale: Locale,
    ) -> (Self, bool) {
        let selected = state.selected();
        let answered = state.is_answered();
        let is_correct = selected == Some(record.correct_answer.as_str());

        let mut correct_found = !answered;
        let options = record
            .options
            .iter()
            .map(|(label, text)| {
                let mark = match selected {
                    Some(choice) if label == choice => Some(if is_correct {
                        Mark::Correct
                    } else {
                        Mark::Incorrect
                    }),
                    Some(_) if label == record.correct_answer => Some(Mark::Correct),
                    _ => None,
                };
                if answered && label == record.correct_answer {
                    correct_found = true;
                }
                OptionLine {
                    label: label.to_string(),
                    text: text.to_string(),
                    mark,
                    enabled: !answered,
                }
            })
            .collect();

        let message = if is_correct {
            locale.correct()
        } else {
            locale.incorrect()
        };
        let result = answered.then(|| ResultView {
            correct: is_correct,
            message: message.to_string(),
            explanation_heading: locale.explanation_heading().to_string(),
            explanation: record.explanation.clone(),
        });

        let block = Self {
            id: record.id.clone(),
            heading: record.question.clone(),
            image_url: record.image().map(str::to_string),
            options,
            result,
        };
        (block, correct_found)
    }

    pub fn is_locked(&self) -> bool {
        self.options.iter().all(|option| !option.enabled) && self.result.is_some()
    }

    pub fn mark_of(&self, label: &str) -> Option<Mark> {
        self.options
            .iter()
            .find(|option| option.label == label)
            .and_then(|option| option.mark)
    }
}

/// The question set of one page, in dataset order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: usize,
    pub questions: Vec<QuestionBlock>,
}

/// State of the page-info display and the previous/next controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationStatus {
    pub current_page: usize,
    pub total_pages: usize,
    pub label: String,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

pub trait QuizView {
    /// Replaces everything in the quiz area with `page`.
    fn render_page(&mut self, page: PageView);

    /// Replaces the rendered block with the same id.
    fn update_question(&mut self, block: QuestionBlock);

    fn update_pagination(&mut self, status: PaginationStatus);

    /// Replaces the quiz area with an error message.
    fn show_load_error(&mut self, message: &str);
}
