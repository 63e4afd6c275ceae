//! Structured display events emitted by the engine.
//!
//! The core never prints. Every observable line of play is an [`Event`]
//! pushed into an [`EventSink`]; the console front end renders them and
//! tests collect them into a `Vec` to assert on ordering and content.

use crate::card::Card;
use crate::game::Outcome;
use crate::hand::HandLine;

/// Which participant an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seat {
    /// The human player.
    Player,
    /// The automated dealer.
    Dealer,
}

/// A single display event.
///
/// Event order relative to state transitions is part of the observable
/// contract: the dealer's hole card appears in no event before the reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The deck was shuffled.
    DeckShuffled,
    /// A deal was attempted on an empty deck.
    DeckEmpty,
    /// A participant's turn was cut short by the empty deck.
    NoMoreCards {
        /// Whose turn was cut short.
        seat: Seat,
    },
    /// The deck dropped below the reshuffle threshold after a round.
    DeckLow {
        /// Undealt cards left.
        remaining: usize,
    },
    /// The player's balance at the top of a round.
    Bankroll {
        /// Current money.
        money: u32,
    },
    /// A bet was placed and deducted from the balance.
    BetPlaced {
        /// The bet actually staked, after any clamping.
        bet: u32,
        /// Money remaining after the deduction.
        money: u32,
        /// Whether the requested amount exceeded the balance and was capped.
        capped: bool,
    },
    /// A hand projection, one line per card plus an optional total.
    HandShown {
        /// Whose hand.
        seat: Seat,
        /// The projected lines, hole card already masked if applicable.
        lines: Vec<HandLine>,
    },
    /// A participant's turn began.
    TurnStarted {
        /// Whose turn.
        seat: Seat,
    },
    /// A participant drew a card.
    CardDrawn {
        /// Who drew.
        seat: Seat,
        /// The card drawn.
        card: Card,
    },
    /// A participant's adjusted total after a draw.
    HandTotal {
        /// Whose total.
        seat: Seat,
        /// The adjusted total.
        total: u8,
    },
    /// An Ace was demoted from 11 to 1 to avoid busting.
    AceAdjusted,
    /// A participant busted.
    Busted {
        /// Who busted.
        seat: Seat,
        /// The busting total.
        total: u8,
    },
    /// A participant stood.
    Stood {
        /// Who stood.
        seat: Seat,
    },
    /// The round was settled.
    RoundSettled {
        /// How the round ended.
        outcome: Outcome,
        /// The player's final adjusted total.
        player_total: u8,
        /// The dealer's final adjusted total.
        dealer_total: u8,
        /// The stake for the round.
        bet: u32,
        /// The amount returned to the player (stake included on a win or push).
        payout: u32,
    },
    /// Winnings were credited to the player's balance.
    WinningsPaid {
        /// Amount credited.
        amount: u32,
        /// Balance after the credit.
        money: u32,
    },
    /// The game loop ended.
    GameOver {
        /// The player's final balance.
        money: u32,
    },
}

/// Consumer of display events.
pub trait EventSink {
    /// Accepts one event.
    fn emit(&mut self, event: Event);
}

impl EventSink for Vec<Event> {
    fn emit(&mut self, event: Event) {
        self.push(event);
    }
}
