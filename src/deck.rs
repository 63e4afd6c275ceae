//! Deck construction, shuffling, and dealing.

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::event::{Event, EventSink};

/// An ordered deck of undealt cards.
///
/// A fresh deck holds all 52 suit and rank combinations. Dealing only ever
/// shrinks it; a depleted deck is replaced, never refilled.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Creates a full, unshuffled deck: suits in [`Suit::ALL`] order, ranks
    /// in [`Rank::ALL`] order within each suit.
    #[must_use]
    pub fn new() -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck from an explicit card sequence, front card first.
    ///
    /// Useful for stacking known deals.
    #[must_use]
    pub fn from_cards<I: IntoIterator<Item = Card>>(cards: I) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Shuffles the undealt cards into a uniformly random permutation.
    pub fn shuffle<R: Rng, S: EventSink>(&mut self, rng: &mut R, events: &mut S) {
        self.cards.make_contiguous().shuffle(rng);
        events.emit(Event::DeckShuffled);
    }

    /// Deals the front card.
    ///
    /// Returns `None` on an empty deck, after emitting a [`Event::DeckEmpty`]
    /// warning. Callers treat `None` as the end of the current draw sequence.
    pub fn deal<S: EventSink>(&mut self, events: &mut S) -> Option<Card> {
        let card = self.cards.pop_front();
        if card.is_none() {
            events.emit(Event::DeckEmpty);
        }
        card
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
