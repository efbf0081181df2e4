use crate::model::card::Card;
use crate::model::hand::Hand;
use crate::model::player::{Player, Seat};
use crate::model::suit::Suit;
use thiserror::Error;

/// Reason a play was refused by [`Trick::play`]. Checks run in declaration
/// order and the first failing one is reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("player and card must not be null")]
    MissingInput,
    #[error("player hand does not contain {0}")]
    CardNotInHand(Card),
    #[error("{actual} is not the next to play (expected {expected})")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("{actual} is not the next to play; the trick is complete")]
    TrickComplete { actual: Seat },
    #[error("{card} doesn't follow suit; {lead} was led")]
    MustFollowSuit { lead: Suit, card: Card },
}

impl IllegalMove {
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

/// A single trick: up to four cards filled clockwise from the lead seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trick {
    cards: [Option<Card>; 4],
    lead: Seat,
    trumps: Option<Suit>,
}

impl Trick {
    pub fn new(lead: Seat, trumps: Option<Suit>) -> Self {
        Self {
            cards: [None; 4],
            lead,
            trumps,
        }
    }

    pub fn lead(&self) -> Seat {
        self.lead
    }

    pub fn trumps(&self) -> Option<Suit> {
        self.trumps
    }

    pub fn lead_card(&self) -> Option<Card> {
        self.cards[0]
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.lead_card().map(|card| card.suit)
    }

    pub fn len(&self) -> usize {
        self.cards.iter().take_while(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cards[0].is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.len() == 4
    }

    /// Seats paired with the cards they played, lead first.
    pub fn plays(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        self.cards
            .iter()
            .map_while(|slot| *slot)
            .enumerate()
            .map(move |(offset, card)| (self.lead.advance(offset), card))
    }

    /// Cards in the order they were played.
    pub fn cards_played(&self) -> Vec<Card> {
        self.cards.iter().map_while(|slot| *slot).collect()
    }

    pub fn card_played(&self, seat: Seat) -> Option<Card> {
        self.plays()
            .find(|(played_by, _)| *played_by == seat)
            .map(|(_, card)| card)
    }

    pub fn next_to_play(&self) -> Option<Seat> {
        let played = self.len();
        (played < 4).then(|| self.lead.advance(played))
    }

    /// Seat currently holding the trick. A card takes over when it is the
    /// same suit as the current best and not lower, or when it is a trump
    /// and the current best is not. Works on partial tricks; `None` when
    /// nothing has been played.
    pub fn winner(&self) -> Option<Seat> {
        let mut plays = self.plays();
        let (mut winning_seat, mut winning_card) = plays.next()?;
        for (seat, card) in plays {
            let beats_in_suit = card.suit == winning_card.suit && card >= winning_card;
            let trumps_in = card.is_suit(self.trumps) && !winning_card.is_suit(self.trumps);
            if beats_in_suit || trumps_in {
                winning_seat = seat;
                winning_card = card;
            }
        }
        Some(winning_seat)
    }

    pub fn contains_suit(&self, suit: Option<Suit>) -> bool {
        self.cards.iter().flatten().any(|card| card.is_suit(suit))
    }

    pub fn match_cards_played(&self, suit: Option<Suit>) -> Vec<Card> {
        self.cards
            .iter()
            .flatten()
            .copied()
            .filter(|card| card.is_suit(suit))
            .collect()
    }

    /// Cards in `hand` that may legally be played next: the lead suit when
    /// the hand holds any, otherwise the whole hand.
    pub fn legal_cards(&self, hand: &Hand) -> Vec<Card> {
        let following: Vec<Card> = hand.matches(self.lead_suit()).into_iter().collect();
        if following.is_empty() {
            hand.iter().copied().collect()
        } else {
            following
        }
    }

    /// Plays `card` from `player`'s hand into the next open slot.
    pub fn play<P>(&mut self, player: &mut P, card: Card) -> Result<(), IllegalMove>
    where
        P: Player + ?Sized,
    {
        self.submit(Some(player), Some(card))
    }

    /// Like [`Trick::play`] but accepts input that may be missing, as
    /// gathered from an interactive surface. Nothing changes on error.
    pub fn submit<P>(
        &mut self,
        player: Option<&mut P>,
        card: Option<Card>,
    ) -> Result<(), IllegalMove>
    where
        P: Player + ?Sized,
    {
        let (player, card) = match (player, card) {
            (Some(player), Some(card)) => (player, card),
            _ => return Err(IllegalMove::MissingInput),
        };
        self.validate(&*player, card)?;

        let slot = self.len();
        self.cards[slot] = Some(card);
        player.hand_mut().remove(card);
        Ok(())
    }

    fn validate<P>(&self, player: &P, card: Card) -> Result<(), IllegalMove>
    where
        P: Player + ?Sized,
    {
        if !player.hand().contains(card) {
            return Err(IllegalMove::CardNotInHand(card));
        }

        let actual = player.seat();
        match self.next_to_play() {
            Some(expected) if expected != actual => {
                return Err(IllegalMove::OutOfTurn { expected, actual });
            }
            Some(_) => {}
            None => return Err(IllegalMove::TrickComplete { actual }),
        }

        if let Some(lead) = self.lead_suit() {
            if card.suit != lead && player.hand().has_suit(Some(lead)) {
                return Err(IllegalMove::MustFollowSuit { lead, card });
            }
        }

        Ok(())
    }

    /// Independent snapshot of this trick.
    pub fn copy(&self) -> Trick {
        Trick {
            cards: self.cards,
            lead: self.lead,
            trumps: self.trumps,
        }
    }
}
