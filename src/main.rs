//! Console front end: renders engine events and collects validated tokens.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{
    Decision, Event, EventSink, Game, Input, Outcome, Seat, SessionError,
};

fn main() {
    print_welcome();

    let mut input = ConsoleInput::new();
    let mut renderer = ConsoleRenderer;

    let starting_money = match input.prompt_positive("Enter your starting money: ") {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(starting_money, seed);

    if let Err(err) = game.run(&mut input, &mut renderer) {
        eprintln!("{err}");
    }
}

fn print_welcome() {
    println!("====================================");
    println!("       Welcome to Blackjack!");
    println!("====================================\n");
    println!("** How to Play Blackjack **");
    println!("1. The goal is to have a hand value as close to 21 as possible without exceeding it.");
    println!("2. Number cards are worth their face value.");
    println!("3. Face cards (King, Queen, Jack) are worth 10.");
    println!("4. Aces can be worth 1 or 11, whichever benefits your hand more.");
    println!("5. At the start, you and the dealer are dealt two cards each.");
    println!("   - One of the dealer's cards remains hidden.");
    println!("6. You can choose to 'Hit' to draw another card or 'Stay' to keep your current hand.");
    println!("7. After your turn, the dealer reveals the hidden card and plays.");
    println!("   - The dealer must hit until their total is at least 17.");
    println!("8. The player wins by having a higher total than the dealer without busting,");
    println!("   or if the dealer busts while the player does not.\n");
    println!("Enjoy the game!\n");
}

/// Line-based token source over stdin.
///
/// All validation happens here: malformed tokens re-prompt forever, so the
/// engine only sees valid values. EOF surfaces as [`SessionError::Closed`].
struct ConsoleInput {
    stdin: io::Stdin,
}

impl ConsoleInput {
    fn new() -> Self {
        Self { stdin: io::stdin() }
    }

    fn read_token(&mut self, prompt: &str) -> Result<String, SessionError> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut line = String::new();
        if self.stdin.read_line(&mut line)? == 0 {
            return Err(SessionError::Closed);
        }
        Ok(line.trim().to_lowercase())
    }

    fn prompt_positive(&mut self, prompt: &str) -> Result<u32, SessionError> {
        let mut next_prompt = prompt;
        loop {
            match self.read_token(next_prompt)?.parse::<u32>() {
                Ok(value) if value > 0 => return Ok(value),
                Ok(_) => next_prompt = "Please enter a positive integer: ",
                Err(_) => next_prompt = "Invalid input. Please enter a valid integer: ",
            }
        }
    }
}

impl Input for ConsoleInput {
    fn bet_amount(&mut self) -> Result<u32, SessionError> {
        self.prompt_positive("Enter your bet: ")
    }

    fn hit_or_stay(&mut self) -> Result<Decision, SessionError> {
        loop {
            match self.read_token("Do you want to hit or stay? (h/s): ")?.as_str() {
                "h" => return Ok(Decision::Hit),
                "s" => return Ok(Decision::Stay),
                _ => println!("Invalid input. Please enter 'h' to hit or 's' to stay."),
            }
        }
    }

    fn another_round(&mut self) -> Result<bool, SessionError> {
        loop {
            match self
                .read_token("\nDo you want to play another round? (y/n): ")?
                .as_str()
            {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => println!("Invalid input. Please enter 'y' to continue or 'n' to quit."),
            }
        }
    }
}

/// Renders each engine event as its console line(s).
struct ConsoleRenderer;

impl EventSink for ConsoleRenderer {
    fn emit(&mut self, event: Event) {
        match event {
            Event::DeckShuffled => println!("The deck has been shuffled."),
            Event::DeckEmpty => println!("The deck is empty. No more cards to deal."),
            Event::NoMoreCards { .. } => println!("No more cards in the deck."),
            Event::DeckLow { .. } => {
                println!("\nThe deck is running low on cards.");
                println!("Reshuffling the deck...");
            }
            Event::Bankroll { money } => println!("\nYou have ${money}"),
            Event::BetPlaced { bet, money, capped } => {
                if capped {
                    println!("Insufficient funds. Placing maximum bet of ${bet}.");
                }
                println!("Current Bet: ${bet}, Remaining Money: ${money}.");
            }
            Event::HandShown { seat, lines } => {
                match seat {
                    Seat::Player => println!("\nYour hand:"),
                    Seat::Dealer => println!("\nDealer's hand:"),
                }
                for line in lines {
                    println!("{line}");
                }
            }
            Event::TurnStarted { seat } => match seat {
                Seat::Player => println!("\n--- Player's Turn ---"),
                Seat::Dealer => println!("\n--- Dealer's Turn ---"),
            },
            Event::CardDrawn { seat, card } => match seat {
                Seat::Player => println!("You drew: {card}"),
                Seat::Dealer => println!("Dealer draws: {card}"),
            },
            Event::HandTotal { seat, total } => match seat {
                Seat::Player => println!("Total: {total}"),
                Seat::Dealer => println!("Dealer's total: {total}"),
            },
            Event::AceAdjusted => {
                println!("Adjusting Ace value from 11 to 1 to prevent bust.");
            }
            Event::Busted { seat, .. } => match seat {
                Seat::Player => println!("You busted!"),
                Seat::Dealer => println!("Dealer busted!"),
            },
            Event::Stood { seat } => match seat {
                Seat::Player => println!("You chose to stay."),
                Seat::Dealer => println!("Dealer stays."),
            },
            Event::RoundSettled {
                outcome,
                player_total,
                dealer_total,
                bet,
                ..
            } => render_settlement(outcome, player_total, dealer_total, bet),
            Event::WinningsPaid { amount, money } => {
                println!("Added winnings: ${amount}, New Money Total: ${money}.");
            }
            Event::GameOver { money } => println!("\nGame over! You leave with ${money}."),
        }
    }
}

fn render_settlement(outcome: Outcome, player_total: u8, dealer_total: u8, bet: u32) {
    if outcome == Outcome::PlayerBust {
        println!("You lose this round.");
        return;
    }

    println!("\n--- Determining Winner ---");
    println!("Your total: {player_total}");
    println!("Dealer's total: {dealer_total}");
    match outcome {
        Outcome::DealerBust => println!("Dealer busted! You win ${bet}."),
        Outcome::PlayerWin => println!("You win! You gain ${bet}."),
        Outcome::DealerWin => println!("Dealer wins! You lose ${bet}."),
        Outcome::Push => println!("It's a tie! Your bet is returned."),
        Outcome::PlayerBust => {}
    }
}
