use super::{Candidates, Tier};
use core::cmp::Ordering;
use whist_core::model::card::Card;
use whist_core::model::hand::Hand;
use whist_core::model::trick::Trick;

/// The card picked for one turn, with the reasoning that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    pub card: Card,
    pub tier: Tier,
    pub can_win: bool,
    pub conservative: bool,
}

/// Plays the highest candidate while the trick can still be taken, the
/// lowest once it cannot, and the cheapest sufficient winner when playing
/// last.
pub struct PlayPlanner;

impl PlayPlanner {
    pub fn choose(trick: &Trick, hand: &Hand) -> Option<Decision> {
        let candidates = Candidates::select(trick, hand);
        let lowest = candidates.lowest()?;
        let can_win = can_win(trick, hand, &candidates);

        if !can_win {
            return Some(Decision {
                card: lowest,
                tier: candidates.tier,
                can_win,
                conservative: false,
            });
        }

        if trick.len() != 3 {
            let highest = candidates.highest()?;
            return Some(Decision {
                card: highest,
                tier: candidates.tier,
                can_win,
                conservative: false,
            });
        }

        let to_beat = highest_relevant(trick, candidates.tier);
        Some(Decision {
            card: cheapest_winner(&candidates, to_beat),
            tier: candidates.tier,
            can_win,
            conservative: true,
        })
    }
}

/// Whether playing from `candidates` could still take the trick.
pub(crate) fn can_win(trick: &Trick, hand: &Hand, candidates: &Candidates) -> bool {
    if let Some(trumps) = trick.trumps() {
        if trick.contains_suit(Some(trumps)) {
            let best_trump = trick.match_cards_played(Some(trumps)).into_iter().max();
            let our_best_trump = candidates
                .cards
                .iter()
                .copied()
                .filter(|card| card.suit == trumps)
                .max();
            return match (our_best_trump, best_trump) {
                (Some(ours), Some(theirs)) => ours > theirs,
                _ => false,
            };
        }
    }

    let played = trick.cards_played();
    let Some(highest_played) = played.iter().copied().max() else {
        return true;
    };
    if !hand.has_suit(trick.lead_suit()) {
        return false;
    }

    match candidates.highest() {
        Some(ours) => matches!(ours.cmp(&highest_played), Ordering::Greater),
        None => false,
    }
}

fn highest_relevant(trick: &Trick, tier: Tier) -> Option<Card> {
    match tier {
        Tier::FollowLead(suit) | Tier::FollowTrump(suit) => {
            trick.match_cards_played(Some(suit)).into_iter().max()
        }
        Tier::Anything => trick.cards_played().into_iter().max(),
    }
}

fn cheapest_winner(candidates: &Candidates, to_beat: Option<Card>) -> Card {
    candidates
        .cards
        .iter()
        .copied()
        .find(|card| to_beat.is_none_or(|best| *card > best))
        .unwrap_or_else(|| {
            unreachable!(
                "a winning candidate exists above {to_beat:?} whenever the trick can be won"
            )
        })
}
