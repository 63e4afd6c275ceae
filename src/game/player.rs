//! The interactive player: hand, bankroll, and turn behavior.

use crate::deck::Deck;
use crate::error::SessionError;
use crate::event::{Event, EventSink, Seat};
use crate::hand::Hand;
use crate::session::{Decision, Input};

use super::participant::{Participant, TurnOutcome};

/// The human player: a hand plus a bankroll and the current stake.
///
/// Money and bet persist across rounds and are mutated only through
/// [`Player::place_bet`] and [`Player::add_winnings`].
#[derive(Debug)]
pub struct Player {
    hand: Hand,
    money: u32,
    current_bet: u32,
}

impl Player {
    /// Creates a player with the given starting money and an empty hand.
    #[must_use]
    pub const fn new(starting_money: u32) -> Self {
        Self {
            hand: Hand::new(),
            money: starting_money,
            current_bet: 0,
        }
    }

    /// Returns the player's current money.
    #[must_use]
    pub const fn money(&self) -> u32 {
        self.money
    }

    /// Returns the stake for the current round.
    #[must_use]
    pub const fn current_bet(&self) -> u32 {
        self.current_bet
    }

    /// Stakes a bet, deducting it from the bankroll.
    ///
    /// A request above the available money is capped to the full balance
    /// rather than rejected; the emitted [`Event::BetPlaced`] records whether
    /// that happened.
    pub fn place_bet<S: EventSink>(&mut self, amount: u32, events: &mut S) {
        let capped = amount > self.money;
        self.current_bet = amount.min(self.money);
        self.money -= self.current_bet;
        events.emit(Event::BetPlaced {
            bet: self.current_bet,
            money: self.money,
            capped,
        });
    }

    /// Credits winnings to the bankroll, saturating at the maximum balance.
    pub fn add_winnings<S: EventSink>(&mut self, amount: u32, events: &mut S) {
        self.money = self.money.saturating_add(amount);
        events.emit(Event::WinningsPaid {
            amount,
            money: self.money,
        });
    }
}

impl Participant for Player {
    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    /// Plays the player's turn.
    ///
    /// While the adjusted total is below 21 the player is asked to hit or
    /// stay. A hit draws from the deck; an exhausted deck ends the turn as a
    /// stand after the warning. Reaching exactly 21 stands automatically
    /// without a further prompt.
    fn play_turn<I: Input, S: EventSink>(
        &mut self,
        deck: &mut Deck,
        input: &mut I,
        events: &mut S,
    ) -> Result<TurnOutcome, SessionError> {
        while self.hand.adjusted_total() < 21 {
            match input.hit_or_stay()? {
                Decision::Hit => {
                    let Some(card) = deck.deal(events) else {
                        events.emit(Event::NoMoreCards { seat: Seat::Player });
                        return Ok(TurnOutcome::Stood);
                    };
                    events.emit(Event::CardDrawn {
                        seat: Seat::Player,
                        card,
                    });
                    let total = self.hand.add_card(Some(card), events);
                    events.emit(Event::HandTotal {
                        seat: Seat::Player,
                        total,
                    });
                    if total > 21 {
                        events.emit(Event::Busted {
                            seat: Seat::Player,
                            total,
                        });
                        return Ok(TurnOutcome::Busted);
                    }
                }
                Decision::Stay => {
                    events.emit(Event::Stood { seat: Seat::Player });
                    return Ok(TurnOutcome::Stood);
                }
            }
        }
        Ok(TurnOutcome::Stood)
    }
}
