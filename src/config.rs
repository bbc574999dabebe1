//! Quiz configuration.

use thiserror::Error;

use crate::messages::Locale;

pub const DEFAULT_QUESTIONS_PER_PAGE: usize = 5;
pub const DEFAULT_TOTAL_PAGES: usize = 10;

/// How the number of pages is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCount {
    /// A fixed page count, whatever the dataset size. Trailing pages may be
    /// empty and records past the last page are unreachable.
    Fixed(usize),
    /// `ceil(N / questions_per_page)`, never less than one page.
    Derived,
}

impl Default for PageCount {
    fn default() -> Self {
        PageCount::Fixed(DEFAULT_TOTAL_PAGES)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("questions per page must be at least 1")]
    ZeroQuestionsPerPage,

    #[error("total pages must be at least 1")]
    ZeroTotalPages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub questions_per_page: usize,
    pub page_count: PageCount,
    pub locale: Locale,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_per_page: DEFAULT_QUESTIONS_PER_PAGE,
            page_count: PageCount::default(),
            locale: Locale::default(),
        }
    }
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.questions_per_page == 0 {
            return Err(ConfigError::ZeroQuestionsPerPage);
        }
        if self.page_count == PageCount::Fixed(0) {
            return Err(ConfigError::ZeroTotalPages);
        }
        Ok(())
    }

    /// Number of pages for a dataset of `question_count` records.
    pub fn total_pages(&self, question_count: usize) -> usize {
        match self.page_count {
            PageCount::Fixed(pages) => pages,
            PageCount::Derived => question_count
                .div_ceil(self.questions_per_page.max(1))
                .max(1),
        }
    }
}
