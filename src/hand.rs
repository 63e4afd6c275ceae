//! Hand totals, Ace adjustment, and display projection.

use core::fmt;

use crate::card::{Card, Rank};
use crate::event::{Event, EventSink};

/// One line of a hand's display projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandLine {
    /// A masked card (the dealer's hole card before the reveal).
    Hidden,
    /// A visible card.
    Card(Card),
    /// The hand's adjusted total.
    Total(u8),
}

impl fmt::Display for HandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str("Hidden Card"),
            Self::Card(card) => write!(f, "{card}"),
            Self::Total(total) => write!(f, "Total: {total}"),
        }
    }
}

/// A participant's hand of cards, in draw order.
///
/// Totals are always recomputed from the current cards; no adjusted state is
/// persisted. The same `Hand` value lives across rounds and is cleared with
/// [`Hand::reset`].
#[derive(Debug, Clone)]
pub struct Hand {
    cards: Vec<Card>,
    /// Whether Ace demotions emit narration events.
    narrated: bool,
}

impl Hand {
    /// Creates an empty hand with Ace-adjustment narration enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            narrated: true,
        }
    }

    /// Creates an empty hand that never narrates Ace adjustments.
    ///
    /// The dealer's hand is silent so its draw announcements stay terse.
    #[must_use]
    pub const fn silent() -> Self {
        Self {
            cards: Vec::new(),
            narrated: false,
        }
    }

    /// Adds a card and returns the freshly recomputed adjusted total.
    ///
    /// `None` is the no-card sentinel from a depleted deck: the hand is left
    /// untouched and the current adjusted total is returned. Each Ace
    /// demotion in effect after the add emits one [`Event::AceAdjusted`],
    /// unless this hand is silent.
    pub fn add_card<S: EventSink>(&mut self, card: Option<Card>, events: &mut S) -> u8 {
        let Some(card) = card else {
            return self.adjusted_total();
        };

        self.cards.push(card);

        let (total, demotions) = self.evaluate();
        if self.narrated {
            for _ in 0..demotions {
                events.emit(Event::AceAdjusted);
            }
        }
        total
    }

    /// Returns the raw total: the sum of card values with every Ace at 11.
    #[must_use]
    pub fn raw_total(&self) -> u8 {
        self.cards
            .iter()
            .fold(0u8, |total, card| total.saturating_add(card.value()))
    }

    /// Returns the adjusted total.
    ///
    /// Aces are demoted from 11 to 1 one at a time, only while the total
    /// exceeds 21 and an undemoted Ace remains. Recomputing without adding
    /// cards always yields the same value.
    #[must_use]
    pub fn adjusted_total(&self) -> u8 {
        self.evaluate().0
    }

    /// Computes the adjusted total and how many Aces were demoted to reach it.
    fn evaluate(&self) -> (u8, u8) {
        let mut total = self.raw_total();
        let mut aces = self
            .cards
            .iter()
            .filter(|card| card.rank == Rank::Ace)
            .count() as u8;
        let mut demotions = 0;

        while total > 21 && aces > 0 {
            total -= 10;
            aces -= 1;
            demotions += 1;
        }

        (total, demotions)
    }

    /// Projects the hand into display lines without mutating it.
    ///
    /// With `hide_first` the card in the hole position is replaced by
    /// [`HandLine::Hidden`]; with `show_total` a [`HandLine::Total`] carrying
    /// the adjusted total is appended.
    pub fn display(
        &self,
        hide_first: bool,
        show_total: bool,
    ) -> impl Iterator<Item = HandLine> + '_ {
        let cards = self.cards.iter().enumerate().map(move |(index, card)| {
            if index == 0 && hide_first {
                HandLine::Hidden
            } else {
                HandLine::Card(*card)
            }
        });
        let total = show_total
            .then(|| HandLine::Total(self.adjusted_total()))
            .into_iter();
        cards.chain(total)
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Clears the hand in place for the next round.
    pub fn reset(&mut self) {
        self.cards.clear();
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::new()
    }
}
