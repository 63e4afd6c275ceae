//! The automated dealer and its fixed drawing policy.

use crate::deck::Deck;
use crate::error::SessionError;
use crate::event::{Event, EventSink, Seat};
use crate::hand::Hand;
use crate::session::Input;

use super::participant::{Participant, TurnOutcome};

/// The dealer: a silent hand and the hit-until-17 house policy.
#[derive(Debug)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Creates a dealer with an empty hand.
    ///
    /// The hand is silent so Ace-adjustment narration never interrupts the
    /// dealer's draw announcements.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            hand: Hand::silent(),
        }
    }
}

impl Participant for Dealer {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Plays the dealer's turn.
    ///
    /// Draws while the adjusted total is below 17, then stands; a draw past
    /// 21 busts. An exhausted deck ends the turn as a stand after the
    /// warning. No choices are ever made, so the input channel is unused.
    fn play_turn<I: Input, S: EventSink>(
        &mut self,
        deck: &mut Deck,
        _input: &mut I,
        events: &mut S,
    ) -> Result<TurnOutcome, SessionError> {
        while self.hand.adjusted_total() < 17 {
            let Some(card) = deck.deal(events) else {
                events.emit(Event::NoMoreCards { seat: Seat::Dealer });
                return Ok(TurnOutcome::Stood);
            };
            events.emit(Event::CardDrawn {
                seat: Seat::Dealer,
                card,
            });
            let total = self.hand.add_card(Some(card), events);
            events.emit(Event::HandTotal {
                seat: Seat::Dealer,
                total,
            });
            if total > 21 {
                events.emit(Event::Busted {
                    seat: Seat::Dealer,
                    total,
                });
                return Ok(TurnOutcome::Busted);
            }
        }
        events.emit(Event::Stood { seat: Seat::Dealer });
        Ok(TurnOutcome::Stood)
    }
}

impl Default for Dealer {
    fn default() -> Self {
        Self::new()
    }
}
