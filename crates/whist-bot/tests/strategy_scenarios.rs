use whist_bot::{PlayPlanner, Policy, SimpleComputerPlayer, Tier};
use whist_core::model::card::Card;
use whist_core::model::deck::Deck;
use whist_core::model::hand::Hand;
use whist_core::model::player::{Seat, SeatedPlayer};
use whist_core::model::rank::Rank;
use whist_core::model::round::RoundState;
use whist_core::model::suit::Suit;
use whist_core::model::trick::Trick;

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn trick_with(lead: Seat, trumps: Option<Suit>, cards: &[Card]) -> Trick {
    let mut trick = Trick::new(lead, trumps);
    let mut seat = lead;
    for &played in cards {
        let mut player = SeatedPlayer::with_hand(seat, Hand::with_cards([played]));
        trick.play(&mut player, played).unwrap();
        seat = seat.next();
    }
    trick
}

#[test]
fn last_seat_wins_with_smallest_sufficient_spade() {
    let trick = trick_with(
        Seat::North,
        Some(Suit::Hearts),
        &[
            card(Rank::Four, Suit::Spades),
            card(Rank::Jack, Suit::Spades),
            card(Rank::Eight, Suit::Spades),
        ],
    );
    let west = SeatedPlayer::with_hand(
        Seat::West,
        Hand::with_cards([card(Rank::Two, Suit::Spades), card(Rank::Queen, Suit::Spades)]),
    );
    let policy = SimpleComputerPlayer::new(&west);
    assert_eq!(policy.choose_play(&trick), Some(card(Rank::Queen, Suit::Spades)));

    let stronger = SeatedPlayer::with_hand(
        Seat::West,
        Hand::with_cards([
            card(Rank::Two, Suit::Spades),
            card(Rank::Queen, Suit::Spades),
            card(Rank::Ace, Suit::Spades),
        ]),
    );
    let policy = SimpleComputerPlayer::new(&stronger);
    assert_eq!(policy.choose_play(&trick), Some(card(Rank::Queen, Suit::Spades)));
}

#[test]
fn void_hand_without_trumps_discards_lowest_card() {
    let trick = trick_with(
        Seat::South,
        Some(Suit::Diamonds),
        &[card(Rank::Three, Suit::Clubs), card(Rank::Ten, Suit::Clubs)],
    );
    let hand = Hand::with_cards([
        card(Rank::King, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Ace, Suit::Spades),
    ]);
    let decision = PlayPlanner::choose(&trick, &hand).unwrap();
    assert_eq!(decision.tier, Tier::Anything);
    assert!(!decision.can_win);
    assert_eq!(decision.card, card(Rank::Five, Suit::Spades));
}

#[test]
fn bots_only_ever_choose_legal_cards() {
    for seed in 0..25 {
        let deck = Deck::shuffled_with_seed(seed);
        let mut round = RoundState::deal(&deck, Seat::East, 13);
        while let Some(seat) = round.next_to_play() {
            let chosen = {
                let policy = SimpleComputerPlayer::new(round.player(seat));
                policy.choose_play(round.current_trick())
            };
            let chosen = chosen.expect("hand still holds cards");
            let legal = round.current_trick().legal_cards(round.hand(seat));
            assert!(legal.contains(&chosen), "seed {seed}: {chosen} not legal for {seat}");
            round.play_card(seat, chosen).unwrap();
        }
        assert_eq!(round.tricks_completed(), 13);
    }
}
