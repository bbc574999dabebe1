use std::collections::HashMap;

use log::{debug, error, info, warn};

use crate::config::QuizConfig;
use crate::data::{load_questions, LoadError, QuizSource};
use crate::models::{AnswerState, LoadState, QuestionId, QuestionRecord};
use crate::view::{PageView, PaginationStatus, QuestionBlock, QuizView};

/// Owns the question list, the pagination state and every question's
/// answer state, and tells a [`QuizView`] what to show.
pub struct QuizController {
    config: QuizConfig,
    questions: Vec<QuestionRecord>,
    load_state: LoadState,
    current_page: usize,
    answers: HashMap<QuestionId, AnswerState>,
}

impl QuizController {
    pub fn new(config: QuizConfig) -> Self {
        Self {
            config,
            questions: Vec::new(),
            load_state: LoadState::Pending,
            current_page: 1,
            answers: HashMap::new(),
        }
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.config.total_pages(self.questions.len())
    }

    pub fn answer_state(&self, id: &QuestionId) -> AnswerState {
        self.answers.get(id).cloned().unwrap_or_default()
    }

    /// Fetches the question set and shows the first page, or the load error.
    pub async fn load_quiz_data<V: QuizView>(&mut self, source: &QuizSource, view: &mut V) {
        let result = load_questions(source).await;
        self.finish_load(result, view);
    }

    /// Applies the outcome of the startup load. Only the first outcome counts.
    pub fn finish_load<V: QuizView>(
        &mut self,
        result: Result<Vec<QuestionRecord>, LoadError>,
        view: &mut V,
    ) {
        if self.load_state != LoadState::Pending {
            warn!(
                "Ignoring load outcome, quiz data was already {:?}",
                self.load_state
            );
            return;
        }

        match result {
            Ok(questions) => {
                info!("Loaded {} questions", questions.len());
                self.questions = questions;
                self.load_state = LoadState::Loaded;
                self.load_page(1, view);
            }
            Err(err) => {
                error!("Could not load quiz data: {}", err);
                self.load_state = LoadState::Failed;
                view.show_load_error(self.config.locale.load_error());
            }
        }
    }

    /// Questions shown on `page`, in dataset order. Pages past the end of the
    /// data are empty.
    pub fn page_questions(&self, page: usize) -> &[QuestionRecord] {
        let per_page = self.config.questions_per_page;
        let start = page.saturating_sub(1).saturating_mul(per_page);
        if start >= self.questions.len() {
            return &[];
        }
        let end = start.saturating_add(per_page).min(self.questions.len());
        &self.questions[start..end]
    }

    /// Renders `page` from scratch. Callers keep `page` within
    /// `1..=total_pages`; the value is not clamped.
    pub fn load_page<V: QuizView>(&mut self, page: usize, view: &mut V) {
        debug_assert!(page >= 1, "pages are 1-indexed");

        self.current_page = page;
        self.answers.clear();

        let locale = self.config.locale;
        let questions: Vec<QuestionBlock> = self
            .page_questions(page)
            .iter()
            .map(|record| QuestionBlock::build(record, &AnswerState::Unanswered, locale).0)
            .collect();
        debug!("Rendering page {} with {} questions", page, questions.len());

        view.render_page(PageView { page, questions });
        self.update_pagination_buttons(view);
    }

    /// Handles a change event on a question's options. `selected` is the
    /// checked label, if any.
    pub fn check_answer<V: QuizView>(
        &mut self,
        question_id: &QuestionId,
        selected: Option<&str>,
        view: &mut V,
    ) {
        let Some(record) = self.questions.iter().find(|q| &q.id == question_id) else {
            debug!("Answer for unknown question {}", question_id);
            return;
        };

        let Some(selected) = selected else {
            return;
        };

        if self
            .answers
            .get(question_id)
            .is_some_and(AnswerState::is_answered)
        {
            debug!("Question {} is already answered", question_id);
            return;
        }

        if !record.options.contains(selected) {
            warn!(
                "Question {} has no option labelled {:?}",
                question_id, selected
            );
            return;
        }

        let state = AnswerState::Answered {
            selected: selected.to_string(),
        };
        let (block, correct_found) = QuestionBlock::build(record, &state, self.config.locale);
        if !correct_found {
            error!(
                "Question {} has correct answer {:?} which is not among its options",
                question_id, record.correct_answer
            );
        }
        debug!(
            "Question {} answered {:?}, correct answer {:?}",
            question_id, selected, record.correct_answer
        );

        self.answers.insert(question_id.clone(), state);
        view.update_question(block);
    }

    pub fn update_pagination_buttons<V: QuizView>(&self, view: &mut V) {
        let total_pages = self.total_pages();
        view.update_pagination(PaginationStatus {
            current_page: self.current_page,
            total_pages,
            label: self.config.locale.page_info(self.current_page, total_pages),
            previous_enabled: self.current_page > 1,
            next_enabled: self.current_page < total_pages,
        });
    }

    pub fn previous_page<V: QuizView>(&mut self, view: &mut V) {
        if self.load_state == LoadState::Loaded && self.current_page > 1 {
            self.load_page(self.current_page - 1, view);
        }
    }

    pub fn next_page<V: QuizView>(&mut self, view: &mut V) {
        if self.load_state == LoadState::Loaded && self.current_page < self.total_pages() {
            self.load_page(self.current_page + 1, view);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageCount;
    use crate::messages::Locale;
    use crate::models::Options;
    use crate::view::Mark;

    #[derive(Default)]
    struct RecordingView {
        page: Option<PageView>,
        pagination: Option<PaginationStatus>,
        error: Option<String>,
        calls: usize,
    }

    impl QuizView for RecordingView {
        fn render_page(&mut self, page: PageView) {
            self.calls += 1;
            self.page = Some(page);
        }

        fn update_question(&mut self, block: QuestionBlock) {
            self.calls += 1;
            if let Some(page) = self.page.as_mut() {
                if let Some(slot) = page.questions.iter_mut().find(|q| q.id == block.id) {
                    *slot = block;
                }
            }
        }

        fn update_pagination(&mut self, status: PaginationStatus) {
            self.calls += 1;
            self.pagination = Some(status);
        }

        fn show_load_error(&mut self, message: &str) {
            self.calls += 1;
            self.error = Some(message.to_string());
        }
    }

    impl RecordingView {
        fn block(&self, id: i64) -> &QuestionBlock {
            let page = self.page.as_ref().unwrap();
            page.questions
                .iter()
                .find(|q| q.id == QuestionId::Number(id))
                .unwrap()
        }

        fn rendered_ids(&self) -> Vec<QuestionId> {
            self.page
                .as_ref()
                .map(|page| page.questions.iter().map(|q| q.id.clone()).collect())
                .unwrap_or_default()
        }
    }

    fn record(id: i64) -> QuestionRecord {
        QuestionRecord {
            id: QuestionId::Number(id),
            question: format!("Question {}", id),
            image_url: None,
            options: Options::from_iter([("A", "x"), ("B", "y")]),
            correct_answer: "B".to_string(),
            explanation: format!("Explanation {}", id),
        }
    }

    fn dataset(n: i64) -> Vec<QuestionRecord> {
        (1..=n).map(record).collect()
    }

    fn loaded(n: i64, config: QuizConfig) -> (QuizController, RecordingView) {
        let mut controller = QuizController::new(config);
        let mut view = RecordingView::default();
        controller.finish_load(Ok(dataset(n)), &mut view);
        (controller, view)
    }

    fn ids(range: std::ops::RangeInclusive<i64>) -> Vec<QuestionId> {
        range.map(QuestionId::Number).collect()
    }

    #[test]
    fn test_load_renders_first_page() {
        let (controller, view) = loaded(12, QuizConfig::default());
        assert_eq!(controller.load_state(), LoadState::Loaded);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(view.rendered_ids(), ids(1..=5));

        let pagination = view.pagination.unwrap();
        assert_eq!(pagination.label, "Page 1 / 10");
        assert!(!pagination.previous_enabled);
        assert!(pagination.next_enabled);
    }

    #[test]
    fn test_page_slices_follow_dataset_order() {
        let (mut controller, mut view) = loaded(12, QuizConfig::default());
        let n = 12usize;
        for page in 1..=controller.total_pages() {
            controller.load_page(page, &mut view);
            let expected = 5usize.min(n.saturating_sub((page - 1) * 5));
            let rendered = view.rendered_ids();
            assert_eq!(rendered.len(), expected, "page {}", page);
            let first = ((page - 1) * 5 + 1) as i64;
            for (offset, id) in rendered.iter().enumerate() {
                assert_eq!(*id, QuestionId::Number(first + offset as i64));
            }
        }
    }

    #[test]
    fn test_reloading_a_page_clears_answers() {
        let (mut controller, mut view) = loaded(12, QuizConfig::default());
        let id = QuestionId::Number(2);
        controller.check_answer(&id, Some("A"), &mut view);
        assert!(controller.answer_state(&id).is_answered());

        controller.load_page(1, &mut view);
        let first = view.page.clone();
        controller.load_page(1, &mut view);
        assert_eq!(view.page, first);
        assert_eq!(controller.answer_state(&id), AnswerState::Unanswered);
        assert!(view.block(2).result.is_none());
        assert!(view.block(2).options.iter().all(|o| o.enabled));
    }

    #[test]
    fn test_navigating_away_and_back_forgets_answer() {
        let (mut controller, mut view) = loaded(12, QuizConfig::default());
        let id = QuestionId::Number(1);
        controller.check_answer(&id, Some("B"), &mut view);

        controller.next_page(&mut view);
        controller.previous_page(&mut view);
        assert_eq!(controller.current_page(), 1);
        assert_eq!(controller.answer_state(&id), AnswerState::Unanswered);
        assert!(view.block(1).result.is_none());
    }

    #[test]
    fn test_wrong_answer_marks_both_options() {
        let (mut controller, mut view) = loaded(3, QuizConfig::default());
        controller.check_answer(&QuestionId::Number(1), Some("A"), &mut view);

        let block = view.block(1);
        assert_eq!(block.mark_of("A"), Some(Mark::Incorrect));
        assert_eq!(block.mark_of("B"), Some(Mark::Correct));
        let result = block.result.as_ref().unwrap();
        assert_eq!(result.message, Locale::En.incorrect());
        assert_eq!(result.explanation, "Explanation 1");
        assert!(block.options.iter().all(|o| !o.enabled));
    }

    #[test]
    fn test_right_answer_marks_only_selection() {
        let (mut controller, mut view) = loaded(3, QuizConfig::default());
        controller.check_answer(&QuestionId::Number(2), Some("B"), &mut view);

        let block = view.block(2);
        assert_eq!(block.mark_of("A"), None);
        assert_eq!(block.mark_of("B"), Some(Mark::Correct));
        let result = block.result.as_ref().unwrap();
        assert_eq!(result.message, Locale::En.correct());
        assert_eq!(result.explanation, "Explanation 2");
    }

    #[test]
    fn test_answer_is_one_way() {
        let (mut controller, mut view) = loaded(3, QuizConfig::default());
        let id = QuestionId::Number(1);
        controller.check_answer(&id, Some("A"), &mut view);
        let locked = view.block(1).clone();
        let calls = view.calls;

        controller.check_answer(&id, Some("B"), &mut view);
        assert_eq!(view.calls, calls);
        assert_eq!(view.block(1), &locked);
        assert_eq!(
            controller.answer_state(&id),
            AnswerState::Answered {
                selected: "A".to_string()
            }
        );
    }

    #[test]
    fn test_ignored_answer_events() {
        let (mut controller, mut view) = loaded(3, QuizConfig::default());
        let calls = view.calls;

        controller.check_answer(&QuestionId::Number(99), Some("A"), &mut view);
        controller.check_answer(&QuestionId::Number(1), None, &mut view);
        controller.check_answer(&QuestionId::Number(1), Some("Q"), &mut view);

        assert_eq!(view.calls, calls);
        assert_eq!(
            controller.answer_state(&QuestionId::Number(1)),
            AnswerState::Unanswered
        );
    }

    #[test]
    fn test_correct_answer_missing_from_options_still_locks() {
        let mut broken = record(1);
        broken.correct_answer = "E".to_string();
        let mut controller = QuizController::new(QuizConfig::default());
        let mut view = RecordingView::default();
        controller.finish_load(Ok(vec![broken]), &mut view);

        controller.check_answer(&QuestionId::Number(1), Some("A"), &mut view);
        let block = view.block(1);
        assert_eq!(block.mark_of("A"), Some(Mark::Incorrect));
        assert_eq!(block.mark_of("B"), None);
        assert!(block.is_locked());
    }

    #[test]
    fn test_pagination_bounds() {
        let (mut controller, mut view) = loaded(12, QuizConfig::default());

        controller.load_page(4, &mut view);
        let interior = view.pagination.clone().unwrap();
        assert!(interior.previous_enabled && interior.next_enabled);

        controller.load_page(10, &mut view);
        let last = view.pagination.clone().unwrap();
        assert!(last.previous_enabled);
        assert!(!last.next_enabled);

        controller.next_page(&mut view);
        assert_eq!(controller.current_page(), 10);

        controller.load_page(1, &mut view);
        controller.previous_page(&mut view);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_derived_page_count() {
        let config = QuizConfig {
            page_count: PageCount::Derived,
            ..QuizConfig::default()
        };
        let (mut controller, mut view) = loaded(12, config);
        assert_eq!(controller.total_pages(), 3);

        controller.next_page(&mut view);
        controller.next_page(&mut view);
        controller.next_page(&mut view);
        assert_eq!(controller.current_page(), 3);
        assert_eq!(view.rendered_ids(), ids(11..=12));
        assert!(!view.pagination.unwrap().next_enabled);
    }

    #[test]
    fn test_load_failure_shows_error_and_disables_navigation() {
        let mut controller = QuizController::new(QuizConfig::default());
        let mut view = RecordingView::default();
        let err = LoadError::Status { status: 500 };
        controller.finish_load(Err(err), &mut view);

        assert_eq!(controller.load_state(), LoadState::Failed);
        assert!(controller.questions().is_empty());
        assert_eq!(view.error.as_deref(), Some(Locale::En.load_error()));
        assert_eq!(view.calls, 1);

        controller.next_page(&mut view);
        controller.previous_page(&mut view);
        assert_eq!(view.calls, 1);
        assert_eq!(controller.current_page(), 1);
    }

    #[test]
    fn test_only_first_load_outcome_counts() {
        let (mut controller, mut view) = loaded(3, QuizConfig::default());
        let calls = view.calls;

        controller.finish_load(Ok(dataset(12)), &mut view);
        controller.finish_load(Err(LoadError::Status { status: 404 }), &mut view);

        assert_eq!(view.calls, calls);
        assert_eq!(controller.questions().len(), 3);
        assert!(view.error.is_none());
    }

    #[test]
    fn test_navigation_before_load_is_ignored() {
        let mut controller = QuizController::new(QuizConfig::default());
        let mut view = RecordingView::default();
        controller.next_page(&mut view);
        assert_eq!(view.calls, 0);
        assert_eq!(controller.load_state(), LoadState::Pending);
    }

    #[tokio::test]
    async fn test_load_quiz_data_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = QuizSource::Path(dir.path().join("data.json"));
        let mut controller = QuizController::new(QuizConfig {
            locale: Locale::Vi,
            ..QuizConfig::default()
        });
        let mut view = RecordingView::default();

        controller.load_quiz_data(&source, &mut view).await;
        assert_eq!(view.error.as_deref(), Some(Locale::Vi.load_error()));
        assert!(view.page.is_none());
    }
}
