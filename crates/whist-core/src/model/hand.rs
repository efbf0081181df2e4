use crate::model::card::Card;
use crate::model::suit::Suit;
use std::collections::BTreeSet;

/// Cards currently held by one player, kept in ascending card order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: BTreeSet<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self {
            cards: BTreeSet::new(),
        }
    }

    pub fn with_cards<I>(cards: I) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    pub fn add(&mut self, card: Card) {
        self.cards.insert(card);
    }

    /// Removing a card the hand does not hold leaves it untouched.
    pub fn remove(&mut self, card: Card) -> bool {
        self.cards.remove(&card)
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }

    /// Held cards of `suit`. Asking for no suit yields an empty set.
    pub fn matches(&self, suit: Option<Suit>) -> BTreeSet<Card> {
        match suit {
            Some(suit) => self
                .cards
                .iter()
                .copied()
                .filter(|card| card.suit == suit)
                .collect(),
            None => BTreeSet::new(),
        }
    }

    pub fn has_suit(&self, suit: Option<Suit>) -> bool {
        self.cards.iter().any(|card| card.is_suit(suit))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn lowest(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Independent copy; later changes to either hand do not show in the other.
    pub fn copy(&self) -> Hand {
        Hand {
            cards: self.cards.iter().copied().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::collections::btree_set::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
