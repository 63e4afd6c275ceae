//! The input collaborator the engine draws decisions from.

use crate::error::SessionError;

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// Keep the current hand.
    Stay,
}

/// Supplies validated tokens on demand.
///
/// Implementations own all input validation: malformed or out-of-range
/// tokens are re-prompted for until a valid one arrives, so the engine only
/// ever sees well-formed values. The console front end implements this over
/// stdin; tests script it.
pub trait Input {
    /// Returns the bet for the next round, a positive integer.
    ///
    /// The engine clamps over-bets itself; implementations only guarantee
    /// the value is positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the input channel is closed or unreadable.
    fn bet_amount(&mut self) -> Result<u32, SessionError>;

    /// Returns the player's hit-or-stay decision.
    ///
    /// # Errors
    ///
    /// Returns an error if the input channel is closed or unreadable.
    fn hit_or_stay(&mut self) -> Result<Decision, SessionError>;

    /// Returns whether the player wants another round.
    ///
    /// # Errors
    ///
    /// Returns an error if the input channel is closed or unreadable.
    fn another_round(&mut self) -> Result<bool, SessionError>;
}
