//! The round engine: betting, dealing, turns, and settlement.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::SessionError;
use crate::event::{Event, EventSink, Seat};
use crate::session::Input;

mod dealer;
mod participant;
mod player;

pub use dealer::Dealer;
pub use participant::{Participant, TurnOutcome};
pub use player::Player;

/// Remaining-card count below which the deck is replaced between rounds.
pub const RESHUFFLE_THRESHOLD: usize = 10;

/// How a round was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player busted; the round ended before the dealer played.
    PlayerBust,
    /// The dealer busted; the player wins twice the stake.
    DealerBust,
    /// The player's total beat the dealer's; the player wins twice the stake.
    PlayerWin,
    /// The dealer's total beat the player's; the stake is lost.
    DealerWin,
    /// Equal totals; the stake is returned.
    Push,
}

/// A single-player blackjack game: one deck, one player, one dealer.
///
/// The engine drives the whole betting round and emits every observable
/// line of play as an [`Event`]. Decisions come from an [`Input`]
/// collaborator the engine owns for the duration of a call.
///
/// # Example
///
/// ```no_run
/// use twentyone::Game;
///
/// let game = Game::new(100, 42);
/// let _ = game;
/// ```
#[derive(Debug)]
pub struct Game {
    deck: Deck,
    player: Player,
    dealer: Dealer,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a game with a fresh deck and the given starting money.
    ///
    /// The seed fixes the shuffle order, which makes full games
    /// reproducible.
    #[must_use]
    pub fn new(starting_money: u32, seed: u64) -> Self {
        Self::with_deck(Deck::new(), starting_money, seed)
    }

    /// Creates a game from an explicit deck.
    ///
    /// Combined with [`Deck::from_cards`] and [`Game::play_round`] this
    /// allows playing out rounds with a stacked, unshuffled deck.
    #[must_use]
    pub fn with_deck(deck: Deck, starting_money: u32, seed: u64) -> Self {
        Self {
            deck,
            player: Player::new(starting_money),
            dealer: Dealer::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Runs the full game loop: shuffle, then rounds until the player
    /// declines another or the money runs out.
    ///
    /// After a round the player busted, the next round starts immediately;
    /// the continue prompt and the reshuffle check only follow settled
    /// rounds.
    ///
    /// # Errors
    ///
    /// Returns an error if the input channel dies mid-game.
    pub fn run<I: Input, S: EventSink>(
        &mut self,
        input: &mut I,
        events: &mut S,
    ) -> Result<(), SessionError> {
        self.deck.shuffle(&mut self.rng, events);

        while self.player.money() > 0 {
            let outcome = self.play_round(input, events)?;
            if outcome == Outcome::PlayerBust {
                continue;
            }
            if !input.another_round()? {
                break;
            }
            self.maybe_reshuffle(events);
        }

        events.emit(Event::GameOver {
            money: self.player.money(),
        });
        Ok(())
    }

    /// Plays one betting round to its settled outcome.
    ///
    /// Sequence: announce the bankroll, stake the bet (over-bets are capped
    /// to the balance), reset both hands, deal two cards each in
    /// player-dealer-player-dealer order, show the initial hands with the
    /// dealer's hole card masked, run the player's turn, and, unless the
    /// player busted, reveal the dealer's hand, run the dealer's turn, and
    /// settle.
    ///
    /// # Errors
    ///
    /// Returns an error if the input channel dies mid-round.
    pub fn play_round<I: Input, S: EventSink>(
        &mut self,
        input: &mut I,
        events: &mut S,
    ) -> Result<Outcome, SessionError> {
        events.emit(Event::Bankroll {
            money: self.player.money(),
        });
        let bet = input.bet_amount()?;
        self.player.place_bet(bet, events);

        self.player.hand_mut().reset();
        self.dealer.hand_mut().reset();
        for _ in 0..2 {
            let card = self.deck.deal(events);
            self.player.hand_mut().add_card(card, events);
            let card = self.deck.deal(events);
            self.dealer.hand_mut().add_card(card, events);
        }

        events.emit(Event::HandShown {
            seat: Seat::Player,
            lines: self.player.hand().display(false, true).collect(),
        });
        events.emit(Event::HandShown {
            seat: Seat::Dealer,
            lines: self.dealer.hand().display(true, false).collect(),
        });

        events.emit(Event::TurnStarted { seat: Seat::Player });
        if self.player.play_turn(&mut self.deck, input, events)? == TurnOutcome::Busted {
            let outcome = Outcome::PlayerBust;
            events.emit(Event::RoundSettled {
                outcome,
                player_total: self.player.hand().adjusted_total(),
                dealer_total: self.dealer.hand().adjusted_total(),
                bet: self.player.current_bet(),
                payout: 0,
            });
            return Ok(outcome);
        }

        events.emit(Event::TurnStarted { seat: Seat::Dealer });
        events.emit(Event::HandShown {
            seat: Seat::Dealer,
            lines: self.dealer.hand().display(false, true).collect(),
        });
        self.dealer.play_turn(&mut self.deck, input, events)?;

        Ok(self.settle(events))
    }

    /// Settles the round against the player's bankroll.
    ///
    /// Precedence: dealer bust pays twice the stake; then the higher total
    /// wins (twice the stake to the player, nothing on a loss); equal totals
    /// push and return the stake.
    fn settle<S: EventSink>(&mut self, events: &mut S) -> Outcome {
        let player_total = self.player.hand().adjusted_total();
        let dealer_total = self.dealer.hand().adjusted_total();
        let bet = self.player.current_bet();

        let (outcome, payout) = if dealer_total > 21 {
            (Outcome::DealerBust, bet.saturating_mul(2))
        } else if player_total > dealer_total {
            (Outcome::PlayerWin, bet.saturating_mul(2))
        } else if player_total < dealer_total {
            (Outcome::DealerWin, 0)
        } else {
            (Outcome::Push, bet)
        };

        events.emit(Event::RoundSettled {
            outcome,
            player_total,
            dealer_total,
            bet,
            payout,
        });
        if payout > 0 {
            self.player.add_winnings(payout, events);
        }
        outcome
    }

    /// Replaces a low deck with a fresh shuffled one.
    ///
    /// Runs once per settled round, after the continue prompt. Returns
    /// whether a replacement happened.
    pub fn maybe_reshuffle<S: EventSink>(&mut self, events: &mut S) -> bool {
        if self.deck.remaining() >= RESHUFFLE_THRESHOLD {
            return false;
        }
        events.emit(Event::DeckLow {
            remaining: self.deck.remaining(),
        });
        self.deck = Deck::new();
        self.deck.shuffle(&mut self.rng, events);
        true
    }
}
