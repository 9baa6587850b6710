//! The session deck: the active/inactive split of cards being studied.
//!
//! The active queue holds cards still to be judged, front first; the
//! inactive pile holds judged cards in completion order. Every card of
//! the session is in exactly one of the two at all times, and a verdict
//! is recorded and the card moved in a single operation.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{CardStatus, Flashcard};

/// An incorrectly-judged card is never reinserted within this many
/// positions of the front.
const REQUEUE_MIN_GAP: usize = 3;

#[derive(Debug, Clone, Default)]
pub struct SessionDeck {
    /// Cards still to be studied; the front is the next card shown.
    active: VecDeque<Flashcard>,
    /// Judged cards, in completion order.
    inactive: Vec<Flashcard>,
    /// The shuffled order the session started with, kept for restarts.
    order: Vec<Flashcard>,
}

impl SessionDeck {
    /// Build a deck from the cards of the selected lessons, already
    /// concatenated in catalog order. Statuses are reset and the order
    /// shuffled. Returns `None` when the selection holds no cards.
    pub fn build<R: Rng>(mut cards: Vec<Flashcard>, rng: &mut R) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }
        for card in &mut cards {
            card.status = CardStatus::Undecided;
        }
        cards.shuffle(rng);
        Some(Self {
            active: cards.iter().cloned().collect(),
            inactive: Vec::new(),
            order: cards,
        })
    }

    /// The card currently being studied.
    pub fn current(&self) -> Option<&Flashcard> {
        self.active.front()
    }

    /// Judge the front card and move it to the inactive pile. The card
    /// is marked correct unless an earlier pass already marked it
    /// incorrect; that verdict is sticky.
    pub fn mark_studied(&mut self) {
        if let Some(mut card) = self.active.pop_front() {
            card.mark_correct();
            self.inactive.push(card);
        }
    }

    /// Record an incorrect verdict on the front card and push it back
    /// into the active queue: to the end when three or fewer cards
    /// remain, otherwise to a random index at least `REQUEUE_MIN_GAP`
    /// from the front. The card is never immediately re-shown but always
    /// resurfaces within the same pass.
    pub fn requeue_incorrect<R: Rng>(&mut self, rng: &mut R) {
        if let Some(mut card) = self.active.pop_front() {
            card.status = CardStatus::Incorrect;
            if self.active.len() <= REQUEUE_MIN_GAP {
                self.active.push_back(card);
            } else {
                let index = rng.gen_range(REQUEUE_MIN_GAP..self.active.len());
                self.active.insert(index, card);
            }
        }
    }

    /// Take back the most recently judged card and put it in front of
    /// the active queue. A correct verdict is cleared back to undecided;
    /// an incorrect one is sticky. No-op when nothing has been judged.
    pub fn return_previous(&mut self) {
        if let Some(mut card) = self.inactive.pop() {
            if card.status == CardStatus::Correct {
                card.status = CardStatus::Undecided;
            }
            self.active.push_front(card);
        }
    }

    /// True once every card has been judged.
    pub fn is_complete(&self) -> bool {
        self.active.is_empty()
    }

    /// Cards not yet judged.
    pub fn remaining(&self) -> usize {
        self.active.len()
    }

    /// Cards already judged.
    pub fn studied(&self) -> usize {
        self.inactive.len()
    }

    /// `(correct, total)` over the judged pile.
    pub fn score(&self) -> (usize, usize) {
        let correct = self
            .inactive
            .iter()
            .filter(|c| c.status == CardStatus::Correct)
            .count();
        (correct, self.inactive.len())
    }

    /// Start the session over in the original shuffled order.
    pub fn restart(&mut self) {
        self.active = self.order.iter().cloned().collect();
        self.inactive.clear();
    }
}
