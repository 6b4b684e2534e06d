use blackjack::game::{Outcome, Round, Turn};
use blackjack::hand::Hand;
use blackjack::{Card, Deck, Rank, Suit};

fn hand_of(cards: &[(Suit, Rank)]) -> Hand {
    let mut hand = Hand::new();
    for &(suit, rank) in cards {
        hand.push(Card::new(suit, rank));
    }
    hand
}

#[test]
fn dealing_gives_two_cards_each_and_leaves_48() {
    let mut round = Round::new(Deck::seeded(11));
    round.deal().unwrap();

    assert_eq!(round.player.len(), 2);
    assert_eq!(round.dealer.len(), 2);
    assert_eq!(round.deck.len(), 48);
    assert_eq!(round.turn, Turn::Player);

    // no card appears in two places
    let mut all: Vec<Card> = round.deck.cards().to_vec();
    all.extend_from_slice(round.player.cards());
    all.extend_from_slice(round.dealer.cards());
    let unique: std::collections::HashSet<Card> = all.iter().copied().collect();
    assert_eq!(all.len(), 52);
    assert_eq!(unique.len(), 52);
}

#[test]
fn dealer_turn_draws_nothing_when_already_ahead() {
    let mut round = Round::new(Deck::seeded(5));
    round.player = hand_of(&[(Suit::Hearts, Rank::Ten), (Suit::Clubs, Rank::Five)]);
    round.dealer = hand_of(&[(Suit::Spades, Rank::King), (Suit::Diamonds, Rank::Six)]);

    round.dealer_turn().unwrap();

    assert_eq!(round.dealer.len(), 2);
    assert_eq!(round.dealer.total(), 16);
    assert_eq!(round.deck.len(), 52);
}

#[test]
fn dealer_turn_draws_until_no_longer_behind() {
    let mut round = Round::new(Deck::seeded(5));
    round.player = hand_of(&[(Suit::Hearts, Rank::Ten), (Suit::Clubs, Rank::Nine)]);
    round.dealer = hand_of(&[(Suit::Spades, Rank::Two), (Suit::Diamonds, Rank::Three)]);

    round.dealer_turn().unwrap();

    assert!(round.dealer.len() > 2);
    assert!(!round.dealer_draws());
    assert!(round.dealer.total() >= round.player.total() || round.dealer.total() >= 21);
    assert_eq!(round.deck.len(), 52 - (round.dealer.len() - 2));
}

#[test]
fn dealer_turn_can_push_the_dealer_past_21() {
    // High player total forces the dealer to chase until it catches up or
    // busts; either way the loop must have stopped for a stated reason.
    let mut round = Round::new(Deck::seeded(23));
    round.player = hand_of(&[
        (Suit::Hearts, Rank::Ten),
        (Suit::Clubs, Rank::King),
        (Suit::Spades, Rank::Ace),
    ]);
    round.dealer = hand_of(&[(Suit::Spades, Rank::Two), (Suit::Diamonds, Rank::Two)]);
    assert_eq!(round.player.total(), 21);

    round.dealer_turn().unwrap();

    let dealer = round.dealer.total();
    assert!(dealer >= 21 || dealer >= round.player.total());
}

#[test]
fn finished_rounds_resolve_in_player_first_order() {
    let cases = [
        ((21u32, 19u32), Outcome::PlayerWins),
        ((25, 20), Outcome::DealerWins),
        ((20, 25), Outcome::PlayerWins),
        ((19, 21), Outcome::DealerWins),
        ((21, 21), Outcome::Standoff),
        ((19, 19), Outcome::Standoff),
        ((25, 25), Outcome::PlayerWins),
    ];
    for ((player, dealer), expected) in cases {
        assert_eq!(
            Outcome::from_totals(player, dealer),
            expected,
            "totals ({}, {})",
            player,
            dealer
        );
    }
}

#[test]
fn outcome_reads_the_current_hands() {
    let mut round = Round::new(Deck::seeded(2));
    round.player = hand_of(&[
        (Suit::Hearts, Rank::Ten),
        (Suit::Clubs, Rank::King),
        (Suit::Spades, Rank::Ace),
    ]);
    round.dealer = hand_of(&[(Suit::Spades, Rank::Ten), (Suit::Diamonds, Rank::Nine)]);
    assert_eq!(round.outcome(), Outcome::PlayerWins);

    round.dealer.push(Card::new(Suit::Hearts, Rank::Two));
    assert_eq!(round.dealer.total(), 21);
    assert_eq!(round.outcome(), Outcome::Standoff);
}
