//! The turn-taking capability shared by player and dealer.

use crate::deck::Deck;
use crate::error::SessionError;
use crate::event::EventSink;
use crate::hand::Hand;
use crate::session::Input;

/// How a participant's turn ended.
///
/// Deck exhaustion mid-turn is not a third state: the turn ends as
/// [`TurnOutcome::Stood`] after the deck's warning event, and settlement
/// proceeds on whatever totals exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The participant stood, by choice, policy, or an exhausted deck.
    Stood,
    /// The participant's adjusted total exceeded 21.
    Busted,
}

/// A participant in the round: one owned hand and a turn-taking behavior.
pub trait Participant {
    /// Returns the participant's hand.
    fn hand(&self) -> &Hand;

    /// Returns the participant's hand mutably.
    fn hand_mut(&mut self) -> &mut Hand;

    /// Plays out the participant's turn against the deck.
    ///
    /// The round engine owns the input channel and lends it here; the dealer
    /// never consults it.
    ///
    /// # Errors
    ///
    /// Returns an error if a required decision cannot be read.
    fn play_turn<I: Input, S: EventSink>(
        &mut self,
        deck: &mut Deck,
        input: &mut I,
        events: &mut S,
    ) -> Result<TurnOutcome, SessionError>;
}
