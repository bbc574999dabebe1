/// Interaction state of one question.
///
/// A question with no recorded state is unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered { selected: String },
}

impl AnswerState {
    pub fn is_answered(&self) -> bool {
        matches!(self, AnswerState::Answered { .. })
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            AnswerState::Answered { selected } => Some(selected),
            AnswerState::Unanswered => None,
        }
    }
}

/// Outcome of the single startup load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Loaded,
    Failed,
}
