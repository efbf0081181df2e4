use super::Policy;
use whist_core::model::card::Card;
use whist_core::model::player::Player;
use whist_core::model::trick::Trick;

/// Always plays its lowest legal card. Useful as a weak baseline opponent.
pub struct LowestCardPolicy<'a, P: Player + ?Sized> {
    player: &'a P,
}

impl<'a, P: Player + ?Sized> LowestCardPolicy<'a, P> {
    pub fn new(player: &'a P) -> Self {
        Self { player }
    }

    pub fn set_player(&mut self, player: &'a P) {
        self.player = player;
    }
}

impl<P: Player + ?Sized> Policy for LowestCardPolicy<'_, P> {
    fn name(&self) -> &'static str {
        "lowest"
    }

    fn choose_play(&self, trick: &Trick) -> Option<Card> {
        let hand = self.player.hand();
        match trick.lead_suit() {
            Some(lead) if hand.has_suit(Some(lead)) => hand.matches(Some(lead)).first().copied(),
            _ => hand.lowest(),
        }
    }
}
