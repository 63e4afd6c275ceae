//! A single-player console blackjack game with betting.
//!
//! The crate provides a [`Game`] round engine that drives one betting round
//! at a time: bet placement, the initial deal, the player's and dealer's
//! turns, and payout settlement. All narration is emitted as structured
//! [`Event`]s through an [`EventSink`], and player decisions arrive through
//! an [`Input`] collaborator, so the whole engine runs and tests without a
//! console. The `twentyone` binary wires both to stdin and stdout.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::Game;
//!
//! let game = Game::new(100, 42);
//! let _ = game;
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::SessionError;
pub use event::{Event, EventSink, Seat};
pub use game::{Dealer, Game, Outcome, Participant, Player, RESHUFFLE_THRESHOLD, TurnOutcome};
pub use hand::{Hand, HandLine};
pub use session::{Decision, Input};
