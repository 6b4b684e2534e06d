use anyhow::{ensure, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// One-glyph form used in short card names
    pub fn glyph(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Spades => '♠',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
            Suit::Clubs => "Clubs",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    King,
    Queen,
    Jack,
}

impl Rank {
    /// Points a card of this rank contributes to a hand. The Ace always
    /// counts 1, never 11.
    pub fn point_value(self) -> u32 {
        match self {
            Rank::Ace => 1,
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten => 10,
            Rank::King | Rank::Queen | Rank::Jack => 10,
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::King => "King",
            Rank::Queen => "Queen",
            Rank::Jack => "Jack",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    pub fn point_value(&self) -> u32 {
        self.rank.point_value()
    }

    /// Short form with the suit glyph, e.g. "Ace of ♥"
    pub fn short_name(&self) -> String {
        format!("{} of {}", self.rank, self.suit.glyph())
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit)
    }
}

/// The 13 ranks in deck-building order
pub const RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::King,
    Rank::Queen,
    Rank::Jack,
];

pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

/// The ordered remainder of a 52-card deck, shuffled on construction
pub struct Deck {
    cards: Vec<Card>,
    rng: SmallRng,
}

impl Deck {
    pub fn new() -> Self {
        Self::with_rng(SmallRng::from_entropy())
    }

    /// Deterministic deck for tests
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        let mut cards = Vec::with_capacity(52);
        for &suit in &SUITS {
            for &rank in &RANKS {
                cards.push(Card::new(suit, rank));
            }
        }
        let mut deck = Self { cards, rng };
        deck.shuffle();
        deck
    }

    /// Shuffle the remaining cards in place. Called again before most draws
    /// to re-randomize the remaining order.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
        log::debug!("shuffled {} remaining cards", self.cards.len());
    }

    /// Remove and return the card at `index`, shrinking the deck by one
    pub fn remove_at(&mut self, index: usize) -> Result<Card> {
        ensure!(
            index < self.cards.len(),
            "card index {} out of range for a deck of {}",
            index,
            self.cards.len()
        );
        Ok(self.cards.remove(index))
    }

    /// Remove and return a card at a uniformly random position
    pub fn draw_random(&mut self) -> Result<Card> {
        ensure!(!self.cards.is_empty(), "cannot draw from an empty deck");
        let index = self.rng.gen_range(0..self.cards.len());
        let card = self.cards.remove(index);
        log::debug!("drew {} ({} cards left)", card, self.cards.len());
        Ok(card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}


pub mod game;
pub mod hand;
