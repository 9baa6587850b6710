//! The study-session state machine.
//!
//! `Session` owns the catalog, the lesson selection, the field choice
//! and the deck, and is the only place any of them change. The UI layer
//! translates key presses into `Action`s, feeds them to [`Session::apply`]
//! once per frame, and reads back whatever the current page needs.

use rand::Rng;

use crate::catalog::Catalog;
use crate::deck::SessionDeck;
use crate::models::{Field, FieldSet, Flashcard};

/// The five pages of the study flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    LessonSelection,
    FieldSelection,
    Studying,
    Revealing,
    Results,
}

/// A discrete user action reported by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ToggleLesson(usize),
    ToggleField(Field),
    Confirm,
    Return,
    Previous,
    Flip,
    Next,
    MarkCorrect,
    MarkIncorrect,
    Restart,
    BackToMenu,
}

pub struct Session {
    catalog: Catalog,
    page: Page,
    selected: Vec<bool>,
    fields: FieldSet,
    deck: SessionDeck,
}

impl Session {
    pub fn new(catalog: Catalog) -> Self {
        let selected = vec![false; catalog.len()];
        Self {
            catalog,
            page: Page::LessonSelection,
            selected,
            fields: FieldSet::empty(),
            deck: SessionDeck::default(),
        }
    }

    // ══════════════════════════════════════════════════════════════════
    // Render accessors
    // ══════════════════════════════════════════════════════════════════

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn lesson_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn lesson_label(&self, index: usize) -> String {
        match self.catalog.lessons.get(index) {
            Some(lesson) => format!("Lesson {} ({} cards)", lesson.number, lesson.cards.len()),
            None => String::new(),
        }
    }

    pub fn is_lesson_selected(&self, index: usize) -> bool {
        self.selected.get(index).copied().unwrap_or(false)
    }

    pub fn fields(&self) -> FieldSet {
        self.fields
    }

    pub fn current_card(&self) -> Option<&Flashcard> {
        self.deck.current()
    }

    /// The current card's text filtered by the chosen fields, in
    /// display order. Empty when no card is up.
    pub fn visible_lines(&self) -> Vec<&str> {
        self.deck
            .current()
            .map(|card| self.fields.visible(card))
            .unwrap_or_default()
    }

    pub fn remaining(&self) -> usize {
        self.deck.remaining()
    }

    pub fn studied(&self) -> usize {
        self.deck.studied()
    }

    /// `(correct, total)` for the Results page. Recomputed per render.
    pub fn score(&self) -> (usize, usize) {
        self.deck.score()
    }

    // ══════════════════════════════════════════════════════════════════
    // Transitions
    // ══════════════════════════════════════════════════════════════════

    /// Apply one user action. Actions that make no sense on the current
    /// page, or whose guard fails, are silently ignored.
    pub fn apply<R: Rng>(&mut self, action: Action, rng: &mut R) {
        match (self.page, action) {
            (Page::LessonSelection, Action::ToggleLesson(i)) => {
                if let Some(slot) = self.selected.get_mut(i) {
                    *slot = !*slot;
                }
            }
            (Page::LessonSelection, Action::Confirm) => self.confirm_lessons(rng),

            (Page::FieldSelection, Action::ToggleField(field)) => self.fields.toggle(field),
            (Page::FieldSelection, Action::Confirm) => {
                if !self.fields.is_empty() {
                    self.page = Page::Studying;
                }
            }

            (Page::FieldSelection | Page::Studying | Page::Revealing, Action::Return) => {
                self.page = Page::LessonSelection;
            }

            (Page::Studying, Action::Previous) => self.deck.return_previous(),
            (Page::Studying, Action::Flip) => {
                if self.deck.current().is_some() {
                    self.page = Page::Revealing;
                }
            }
            (Page::Studying, Action::Next) | (Page::Revealing, Action::MarkCorrect) => {
                self.deck.mark_studied();
                self.advance();
            }
            (Page::Revealing, Action::MarkIncorrect) => {
                self.deck.requeue_incorrect(rng);
                self.advance();
            }

            (Page::Results, Action::Restart) => {
                self.deck.restart();
                self.page = Page::Studying;
            }
            (Page::Results, Action::BackToMenu) => self.page = Page::LessonSelection,

            _ => {}
        }
    }

    /// Build a fresh deck from the selected lessons. An empty selection
    /// stays on the selection page.
    fn confirm_lessons<R: Rng>(&mut self, rng: &mut R) {
        let cards: Vec<Flashcard> = self
            .catalog
            .lessons
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .flat_map(|(lesson, _)| lesson.cards.iter().cloned())
            .collect();

        if let Some(deck) = SessionDeck::build(cards, rng) {
            self.deck = deck;
            self.page = Page::FieldSelection;
        } else {
            log::debug!("selection holds no cards, staying on lesson selection");
        }
    }

    fn advance(&mut self) {
        self.page = if self.deck.is_complete() {
            Page::Results
        } else {
            Page::Studying
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CardStatus, Lesson};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn card(english: &str, pinyin: &str, chinese: &str) -> Flashcard {
        Flashcard::new(english.into(), pinyin.into(), chinese.into())
    }

    fn catalog() -> Catalog {
        Catalog {
            lessons: vec![
                Lesson {
                    number: 1,
                    cards: vec![card("hello", "nǐ hǎo", "你好")],
                },
                Lesson {
                    number: 2,
                    cards: vec![card("tea", "chá", "茶"), card("book", "shū", "书")],
                },
            ],
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(3)
    }

    /// Drive a session up to the Studying page with both lessons and
    /// every field selected.
    fn studying_session(rng: &mut StdRng) -> Session {
        let mut session = Session::new(catalog());
        session.apply(Action::ToggleLesson(0), rng);
        session.apply(Action::ToggleLesson(1), rng);
        session.apply(Action::Confirm, rng);
        for field in Field::ALL {
            session.apply(Action::ToggleField(field), rng);
        }
        session.apply(Action::Confirm, rng);
        assert_eq!(session.page(), Page::Studying);
        session
    }

    #[test]
    fn starts_on_lesson_selection() {
        let session = Session::new(catalog());
        assert_eq!(session.page(), Page::LessonSelection);
        assert_eq!(session.lesson_count(), 2);
        assert_eq!(session.lesson_label(1), "Lesson 2 (2 cards)");
    }

    #[test]
    fn empty_selection_stays_on_lesson_selection() {
        let mut session = Session::new(catalog());
        session.apply(Action::Confirm, &mut rng());
        assert_eq!(session.page(), Page::LessonSelection);
    }

    #[test]
    fn confirming_lessons_builds_deck_and_moves_on() {
        let mut r = rng();
        let mut session = Session::new(catalog());
        session.apply(Action::ToggleLesson(1), &mut r);
        session.apply(Action::Confirm, &mut r);
        assert_eq!(session.page(), Page::FieldSelection);
        assert_eq!(session.remaining(), 2);
        assert_eq!(session.studied(), 0);
    }

    #[test]
    fn empty_field_set_blocks_study() {
        let mut r = rng();
        let mut session = Session::new(catalog());
        session.apply(Action::ToggleLesson(0), &mut r);
        session.apply(Action::Confirm, &mut r);
        session.apply(Action::Confirm, &mut r);
        assert_eq!(session.page(), Page::FieldSelection);

        session.apply(Action::ToggleField(Field::Pinyin), &mut r);
        session.apply(Action::Confirm, &mut r);
        assert_eq!(session.page(), Page::Studying);
    }

    #[test]
    fn return_leads_back_to_lesson_selection() {
        let mut r = rng();

        let mut session = studying_session(&mut r);
        session.apply(Action::Return, &mut r);
        assert_eq!(session.page(), Page::LessonSelection);

        let mut session = studying_session(&mut r);
        session.apply(Action::Flip, &mut r);
        assert_eq!(session.page(), Page::Revealing);
        session.apply(Action::Return, &mut r);
        assert_eq!(session.page(), Page::LessonSelection);
    }

    #[test]
    fn chinese_only_selection_shows_only_chinese() {
        let mut r = rng();
        let mut session = Session::new(catalog());
        session.apply(Action::ToggleLesson(1), &mut r);
        session.apply(Action::Confirm, &mut r);
        session.apply(Action::ToggleField(Field::Chinese), &mut r);
        session.apply(Action::Confirm, &mut r);

        let lines = session.visible_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0] == "茶" || lines[0] == "书");

        // Still only the Chinese field after flipping to the answer.
        session.apply(Action::Flip, &mut r);
        assert_eq!(session.visible_lines().len(), 1);
    }

    #[test]
    fn full_session_scores_two_of_three() {
        let mut r = rng();
        let mut session = studying_session(&mut r);
        assert_eq!(session.remaining(), 3);

        // First two cards: flip and judge correct.
        for _ in 0..2 {
            session.apply(Action::Flip, &mut r);
            session.apply(Action::MarkCorrect, &mut r);
            assert_eq!(session.page(), Page::Studying);
        }

        // Third card: judged incorrect, requeued, then worked through.
        session.apply(Action::Flip, &mut r);
        session.apply(Action::MarkIncorrect, &mut r);
        assert_eq!(session.page(), Page::Studying);
        assert_eq!(session.remaining(), 1);

        session.apply(Action::Next, &mut r);
        assert_eq!(session.page(), Page::Results);
        assert_eq!(session.score(), (2, 3));
    }

    #[test]
    fn next_without_flipping_marks_correct() {
        let mut r = rng();
        let mut session = studying_session(&mut r);

        session.apply(Action::Next, &mut r);
        assert_eq!(session.studied(), 1);
        assert_eq!(session.score(), (1, 1));
    }

    #[test]
    fn previous_recalls_last_judged_card() {
        let mut r = rng();
        let mut session = studying_session(&mut r);

        session.apply(Action::Next, &mut r);
        assert_eq!(session.studied(), 1);

        session.apply(Action::Previous, &mut r);
        assert_eq!(session.studied(), 0);
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.current_card().unwrap().status, CardStatus::Undecided);
    }

    #[test]
    fn restart_replays_the_same_deck() {
        let mut r = rng();
        let mut session = studying_session(&mut r);
        let first = session.current_card().unwrap().english.clone();

        while session.page() != Page::Results {
            session.apply(Action::Next, &mut r);
        }

        session.apply(Action::Restart, &mut r);
        assert_eq!(session.page(), Page::Studying);
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.score(), (0, 0));
        assert_eq!(session.current_card().unwrap().english, first);
    }

    #[test]
    fn back_to_menu_from_results() {
        let mut r = rng();
        let mut session = studying_session(&mut r);
        while session.page() != Page::Results {
            session.apply(Action::Next, &mut r);
        }

        session.apply(Action::BackToMenu, &mut r);
        assert_eq!(session.page(), Page::LessonSelection);
    }

    #[test]
    fn out_of_place_actions_are_ignored() {
        let mut r = rng();

        let mut session = Session::new(catalog());
        session.apply(Action::Flip, &mut r);
        session.apply(Action::MarkCorrect, &mut r);
        session.apply(Action::Restart, &mut r);
        assert_eq!(session.page(), Page::LessonSelection);

        let mut session = studying_session(&mut r);
        session.apply(Action::MarkCorrect, &mut r);
        assert_eq!(session.studied(), 0);
        session.apply(Action::ToggleLesson(0), &mut r);
        assert_eq!(session.page(), Page::Studying);
    }
}
