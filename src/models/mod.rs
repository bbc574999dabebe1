mod question;
mod state;

pub use question::{Options, QuestionId, QuestionRecord};
pub use state::{AnswerState, LoadState};
