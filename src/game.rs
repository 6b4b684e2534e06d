use std::io::{self, Write};

use anyhow::{ensure, Result};

use crate::hand::Hand;
use crate::Deck;

/// Totals at or above this end a turn
pub const TARGET_TOTAL: u32 = 21;

/// What the player can ask for at the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Hit,
    Stand,
    Exit,
}

impl Choice {
    /// Case-insensitive parse of one menu line; `None` means re-prompt
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "hit" => Some(Choice::Hit),
            "stand" => Some(Choice::Stand),
            "exit" => Some(Choice::Exit),
            _ => None,
        }
    }
}

/// How the player's turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Hand play over to the dealer
    Stand,
    /// Terminate the whole game, skipping outcome resolution
    Quit,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    Finished(Outcome),
    Quit,
}

/// Result of comparing the final totals.
///
/// The two win predicates do not cover every combination; ties and the
/// orderings they miss resolve to `Standoff` and stay silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    DealerWins,
    Standoff,
}

impl Outcome {
    /// The player's predicate is tested first, so a simultaneous bust goes
    /// to the player.
    pub fn from_totals(player: u32, dealer: u32) -> Self {
        let player_won = (player == TARGET_TOTAL && player > dealer) || dealer > TARGET_TOTAL;
        let dealer_won = (dealer == TARGET_TOTAL && dealer > player) || player > TARGET_TOTAL;
        if player_won {
            Outcome::PlayerWins
        } else if dealer_won {
            Outcome::DealerWins
        } else {
            Outcome::Standoff
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::PlayerWins => Some("Congratulations! You won!"),
            Outcome::DealerWins => Some("Good luck next time..."),
            Outcome::Standoff => None,
        }
    }
}

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Dealer,
}

/// One round of play: a fresh deck and two fresh hands, nothing carries over
pub struct Round {
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub turn: Turn,
}

impl Round {
    pub fn new(deck: Deck) -> Self {
        Self {
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            turn: Turn::Player,
        }
    }

    /// Two cards to the player off the top of the shuffled deck, a
    /// reshuffle, then two to the dealer the same way
    pub fn deal(&mut self) -> Result<()> {
        self.player.push(self.deck.remove_at(0)?);
        self.player.push(self.deck.remove_at(1)?);
        self.deck.shuffle();
        self.dealer.push(self.deck.remove_at(0)?);
        self.dealer.push(self.deck.remove_at(1)?);
        log::debug!(
            "dealt: player {}, dealer {}",
            self.player.total(),
            self.dealer.total()
        );
        Ok(())
    }

    /// Alternate turns, player first, while both totals are below 21
    pub fn play(&mut self) -> Result<RoundEnd> {
        while self.player.total() < TARGET_TOTAL && self.dealer.total() < TARGET_TOTAL {
            match self.turn {
                Turn::Player => match self.player_turn()? {
                    Signal::Quit => return Ok(RoundEnd::Quit),
                    Signal::Stand => self.turn = Turn::Dealer,
                },
                Turn::Dealer => {
                    self.dealer_turn()?;
                    self.turn = Turn::Player;
                }
            }
        }
        Ok(RoundEnd::Finished(self.outcome()))
    }

    pub fn outcome(&self) -> Outcome {
        Outcome::from_totals(self.player.total(), self.dealer.total())
    }

    /// Menu loop until the player stands, reaches 21, or quits
    pub fn player_turn(&mut self) -> Result<Signal> {
        println!("\nPlayer's hand: {}", self.player);
        println!("Player's hand's value: {}\n", self.player.total());

        while self.player.total() < TARGET_TOTAL {
            let line = read_choice_line()?;
            let choice = match Choice::parse(&line) {
                Some(choice) => choice,
                None => {
                    println!(
                        "\nPlease enter 'hit', 'stand', or 'exit' (without the quotation marks)...\n"
                    );
                    continue;
                }
            };
            match choice {
                Choice::Hit => {
                    self.deck.shuffle();
                    let card = self.deck.draw_random()?;
                    self.player.push(card);
                    println!("\nPlayer's hand: {}", self.player);
                    println!("Player's hand's value: {}\n", self.player.total());
                }
                Choice::Stand => break,
                Choice::Exit => return Ok(Signal::Quit),
            }
        }
        Ok(Signal::Stand)
    }

    /// One reshuffle at entry, then draw while behind the player and
    /// below 21
    pub fn dealer_turn(&mut self) -> Result<()> {
        self.deck.shuffle();
        while self.dealer_draws() {
            let card = self.deck.draw_random()?;
            self.dealer.push(card);
            println!("\nDealer's hand: {}", self.dealer);
            println!("Dealer's hand's value: {}\n", self.dealer.total());
        }
        Ok(())
    }

    /// The dealer mimics the player's total rather than standing on a
    /// fixed 17
    pub fn dealer_draws(&self) -> bool {
        self.dealer.total() < TARGET_TOTAL && self.dealer.total() < self.player.total()
    }
}

/// Print the three-option menu and read one reply line
fn read_choice_line() -> Result<String> {
    print!("Would you like to:\n1.) Hit\n2.) Stand\n3.) Exit\n\nYour input: ");
    io::stdout().flush()?;
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    ensure!(bytes > 0, "stdin closed while waiting for input");
    Ok(line)
}

/// Rematch gate: only an exact yes continues
pub fn play_again(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "yes" || answer == "y"
}
