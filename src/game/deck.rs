//! The opportunity deck: a fixed pool of chance cards.

// Deck indices fit comfortably in every cast below
#![allow(clippy::cast_possible_truncation)]

use crate::rng::Rng;

/// Number of cards in the pool.
pub const DECK_SIZE: usize = 30;

/// Number of cards presented per draw.
pub const HAND_SIZE: usize = 3;

/// A single opportunity card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Task number, 1-based.
    pub task: u8,
    /// Flavor text shown to the player.
    pub text: String,
}

/// The fixed pool of opportunity cards.
///
/// Draws sample from the pool without removing anything, so the deck never
/// depletes and every draw sees all thirty cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Generate the standard thirty-card pool.
    #[must_use]
    pub fn generate() -> Self {
        let cards = (1..=DECK_SIZE)
            .map(|task| Card {
                task: task as u8,
                text: format!("Complete task {task} for bonus points"),
            })
            .collect();

        Self { cards }
    }

    /// Number of cards in the pool.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the pool is empty. Never true for a generated deck.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by 0-based pool index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Sample [`HAND_SIZE`] distinct cards uniformly from the pool.
    ///
    /// Partial Fisher-Yates over the card indices, so every three-card hand
    /// is equally likely. The pool itself is unchanged.
    #[must_use]
    pub fn draw(&self, rng: &mut Rng) -> [Card; HAND_SIZE] {
        let mut indices: [usize; DECK_SIZE] = std::array::from_fn(|i| i);

        for slot in 0..HAND_SIZE {
            let remaining = (DECK_SIZE - slot) as u32;
            let offset = rng.next_u32(remaining) as usize;
            indices.swap(slot, slot + offset);
        }

        std::array::from_fn(|slot| self.cards[indices[slot]].clone())
    }
}
