mod play;

pub use play::{Decision, PlayPlanner};

use core::fmt;
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::suit::Suit;
use whist_core::model::trick::Trick;

/// Which part of the hand a decision draws from. Earlier tiers take priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// A card has been led and the hand can follow it.
    FollowLead(Suit),
    /// The hand cannot follow but holds trumps.
    FollowTrump(Suit),
    /// Neither applies; the whole hand is available.
    Anything,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::FollowLead(suit) => write!(f, "follow_lead({suit})"),
            Tier::FollowTrump(suit) => write!(f, "follow_trump({suit})"),
            Tier::Anything => f.write_str("anything"),
        }
    }
}

/// Cards a decision may choose from, ascending by rank then suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub tier: Tier,
    pub cards: Vec<Card>,
}

impl Candidates {
    pub fn select(trick: &Trick, hand: &Hand) -> Self {
        if let Some(lead) = trick.lead_suit() {
            let following = hand.matches(Some(lead));
            if !following.is_empty() {
                return Self {
                    tier: Tier::FollowLead(lead),
                    cards: following.into_iter().collect(),
                };
            }
        }

        if let Some(trumps) = trick.trumps() {
            let trumping = hand.matches(Some(trumps));
            if !trumping.is_empty() {
                return Self {
                    tier: Tier::FollowTrump(trumps),
                    cards: trumping.into_iter().collect(),
                };
            }
        }

        Self {
            tier: Tier::Anything,
            cards: hand.iter().copied().collect(),
        }
    }

    pub fn lowest(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    pub fn highest(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }
}
