//! Data models for flashcards and lessons.

/// Verdict recorded against a card during a study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardStatus {
    Correct,
    Incorrect,
    #[default]
    Undecided,
}

/// A single flashcard.
///
/// The three text fields are fixed at load time; only `status` changes
/// during a session, and only through the deck operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub english: String,
    pub pinyin: String,
    pub chinese: String,
    pub status: CardStatus,
}

impl Flashcard {
    pub fn new(english: String, pinyin: String, chinese: String) -> Self {
        Self {
            english,
            pinyin,
            chinese,
            status: CardStatus::Undecided,
        }
    }

    /// Mark the card correct. An earlier Incorrect verdict is sticky and
    /// is never overwritten.
    pub fn mark_correct(&mut self) {
        if self.status != CardStatus::Incorrect {
            self.status = CardStatus::Correct;
        }
    }
}

/// One numbered lesson file's worth of cards, immutable after load.
#[derive(Debug, Clone)]
pub struct Lesson {
    pub number: usize,
    pub cards: Vec<Flashcard>,
}

/// A displayable field of a flashcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    English,
    Pinyin,
    Chinese,
}

impl Field {
    /// Display order when several fields are shown together.
    pub const ALL: [Field; 3] = [Field::English, Field::Pinyin, Field::Chinese];

    pub fn name(&self) -> &'static str {
        match self {
            Field::English => "English",
            Field::Pinyin => "Pinyin",
            Field::Chinese => "Chinese",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Field::English => 0b001,
            Field::Pinyin => 0b010,
            Field::Chinese => 0b100,
        }
    }
}

/// Which card fields the user chose to study. Membership-only semantics;
/// the state machine requires at least one member before study begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldSet(u8);

impl FieldSet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0 & field.bit() != 0
    }

    pub fn toggle(&mut self, field: Field) {
        self.0 ^= field.bit();
    }

    /// The card's text filtered down to the chosen fields, in display
    /// order (English, Pinyin, Chinese).
    pub fn visible<'a>(&self, card: &'a Flashcard) -> Vec<&'a str> {
        Field::ALL
            .iter()
            .filter(|f| self.contains(**f))
            .map(|f| match f {
                Field::English => card.english.as_str(),
                Field::Pinyin => card.pinyin.as_str(),
                Field::Chinese => card.chinese.as_str(),
            })
            .collect()
    }
}
