mod loader;

pub use loader::{
    load_questions, load_questions_with, parse_questions, LoadError, QuizSource, DEFAULT_SOURCE,
};
