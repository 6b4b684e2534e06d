use std::io;

use anyhow::Result;
use blackjack::game::{play_again, Round, RoundEnd};
use blackjack::Deck;

fn main() -> Result<()> {
    env_logger::init();
    println!("\n{:=^21}\n", "BLACKJACK");

    loop {
        let mut round = Round::new(Deck::new());
        round.deal()?;
        match round.play()? {
            RoundEnd::Quit => return Ok(()),
            RoundEnd::Finished(outcome) => {
                if let Some(message) = outcome.message() {
                    println!("\n{}\n", message);
                }
            }
        }

        println!("\nWould you like to play again?");
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !play_again(&answer) {
            break;
        }
    }
    Ok(())
}
