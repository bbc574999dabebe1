//! User-facing strings.

use clap::ValueEnum;

/// Language of every message the quiz shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Locale {
    #[default]
    En,
    Vi,
}

impl Locale {
    pub fn correct(self) -> &'static str {
        match self {
            Locale::En => "✅ Correct!",
            Locale::Vi => "✅ Chính xác!",
        }
    }

    pub fn incorrect(self) -> &'static str {
        match self {
            Locale::En => "❌ Incorrect.",
            Locale::Vi => "❌ Sai rồi.",
        }
    }

    pub fn explanation_heading(self) -> &'static str {
        match self {
            Locale::En => "Explanation:",
            Locale::Vi => "Giải thích:",
        }
    }

    pub fn load_error(self) -> &'static str {
        match self {
            Locale::En => concat!(
                "Error: could not load the questions. ",
                "Make sure the data source is reachable."
            ),
            Locale::Vi => concat!(
                "Lỗi: Không thể tải câu hỏi. ",
                "Hãy đảm bảo file data.json nằm đúng vị trí."
            ),
        }
    }

    pub fn loading(self) -> &'static str {
        match self {
            Locale::En => "Loading questions...",
            Locale::Vi => "Đang tải câu hỏi...",
        }
    }

    pub fn empty_page(self) -> &'static str {
        match self {
            Locale::En => "No questions on this page.",
            Locale::Vi => "Trang này không có câu hỏi.",
        }
    }

    pub fn page_info(self, current: usize, total: usize) -> String {
        match self {
            Locale::En => format!("Page {} / {}", current, total),
            Locale::Vi => format!("Trang {} / {}", current, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_info() {
        assert_eq!(Locale::En.page_info(2, 10), "Page 2 / 10");
        assert_eq!(Locale::Vi.page_info(1, 3), "Trang 1 / 3");
    }

    #[test]
    fn test_locale_parses_from_cli_value() {
        assert_eq!(Locale::from_str("vi", true), Ok(Locale::Vi));
        assert!(Locale::from_str("fr", true).is_err());
    }
}
