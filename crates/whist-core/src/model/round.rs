use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::player::{Partnership, Player, Seat, SeatedPlayer};
use crate::model::suit::Suit;
use crate::model::trick::{IllegalMove, Trick};
use std::array;
use thiserror::Error;
use tracing::{Level, event};

/// One dealt hand of whist: the four players, the trick in progress and the
/// tricks already taken.
#[derive(Debug, Clone)]
pub struct RoundState {
    players: [SeatedPlayer; 4],
    current_trick: Trick,
    trick_history: Vec<Trick>,
    tricks_won: [u8; 4],
    dealer: Seat,
    trumps: Option<Suit>,
    cards_per_seat: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted { winner: Seat },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error(transparent)]
    Illegal(#[from] IllegalMove),
    #[error("every trick of this hand has been played")]
    HandComplete,
}

impl RoundState {
    /// Deals `cards_per_seat` cards to each seat, one at a time, starting
    /// left of the dealer. The last card dealt fixes trumps and the seat
    /// left of the dealer leads.
    pub fn deal(deck: &Deck, dealer: Seat, cards_per_seat: u8) -> Self {
        let mut hands: [Hand; 4] = array::from_fn(|_| Hand::new());
        let dealt = (usize::from(cards_per_seat) * 4).min(deck.len());
        let mut seat = dealer.next();
        for card in &deck.cards()[..dealt] {
            hands[seat.index()].add(*card);
            seat = seat.next();
        }
        let trumps = deck.cards()[..dealt].last().map(|card| card.suit);
        let mut round = Self::from_hands(hands, dealer.next(), trumps);
        round.dealer = dealer;
        round
    }

    /// Builds a round from hands that are already known. The dealer is the
    /// seat before `lead`.
    pub fn from_hands(hands: [Hand; 4], lead: Seat, trumps: Option<Suit>) -> Self {
        let cards_per_seat = hands
            .iter()
            .map(Hand::len)
            .max()
            .and_then(|len| u8::try_from(len).ok())
            .unwrap_or(0);
        let [north, east, south, west] = hands;
        Self {
            players: [
                SeatedPlayer::with_hand(Seat::North, north),
                SeatedPlayer::with_hand(Seat::East, east),
                SeatedPlayer::with_hand(Seat::South, south),
                SeatedPlayer::with_hand(Seat::West, west),
            ],
            current_trick: Trick::new(lead, trumps),
            trick_history: Vec::new(),
            tricks_won: [0; 4],
            dealer: lead.advance(3),
            trumps,
            cards_per_seat,
        }
    }

    pub fn player(&self, seat: Seat) -> &SeatedPlayer {
        &self.players[seat.index()]
    }

    pub fn hand(&self, seat: Seat) -> &Hand {
        self.players[seat.index()].hand()
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn trumps(&self) -> Option<Suit> {
        self.trumps
    }

    pub fn cards_per_seat(&self) -> u8 {
        self.cards_per_seat
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[Trick] {
        &self.trick_history
    }

    pub fn tricks_completed(&self) -> usize {
        self.trick_history.len()
    }

    pub fn tricks_won(&self, seat: Seat) -> u8 {
        self.tricks_won[seat.index()]
    }

    pub fn partnership_tricks(&self) -> [u8; 2] {
        let mut totals = [0u8; 2];
        for seat in Seat::LOOP {
            totals[seat.partnership().index()] += self.tricks_won(seat);
        }
        totals
    }

    pub fn tricks_for(&self, side: Partnership) -> u8 {
        self.partnership_tricks()[side.index()]
    }

    pub fn is_complete(&self) -> bool {
        self.tricks_completed() >= usize::from(self.cards_per_seat)
    }

    pub fn next_to_play(&self) -> Option<Seat> {
        if self.is_complete() {
            return None;
        }
        self.current_trick.next_to_play()
    }

    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<PlayOutcome, RoundError> {
        if self.is_complete() {
            return Err(RoundError::HandComplete);
        }

        let player = &mut self.players[seat.index()];
        self.current_trick.play(player, card)?;
        event!(Level::TRACE, %seat, %card, "card played");

        if !self.current_trick.is_complete() {
            return Ok(PlayOutcome::Played);
        }

        match self.current_trick.winner() {
            Some(winner) => {
                self.complete_trick(winner);
                Ok(PlayOutcome::TrickCompleted { winner })
            }
            None => Ok(PlayOutcome::Played),
        }
    }

    fn complete_trick(&mut self, winner: Seat) {
        self.tricks_won[winner.index()] += 1;
        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner, self.trumps));
        event!(
            Level::DEBUG,
            %winner,
            trick = self.trick_history.len() + 1,
            cards = ?finished.cards_played(),
            "trick won"
        );
        self.trick_history.push(finished);
    }
}
