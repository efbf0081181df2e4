use super::Policy;
use crate::bot::PlayPlanner;
use whist_core::model::card::Card;
use whist_core::model::player::Player;
use whist_core::model::trick::Trick;
use tracing::{Level, event};

/// The tiered heuristic player bound to one seat's player.
pub struct SimpleComputerPlayer<'a, P: Player + ?Sized> {
    player: &'a P,
}

impl<'a, P: Player + ?Sized> SimpleComputerPlayer<'a, P> {
    pub fn new(player: &'a P) -> Self {
        Self { player }
    }

    pub fn set_player(&mut self, player: &'a P) {
        self.player = player;
    }

    pub fn player(&self) -> &'a P {
        self.player
    }
}

impl<P: Player + ?Sized> Policy for SimpleComputerPlayer<'_, P> {
    fn name(&self) -> &'static str {
        "simple"
    }

    fn choose_play(&self, trick: &Trick) -> Option<Card> {
        let decision = PlayPlanner::choose(trick, self.player.hand())?;
        if tracing::enabled!(Level::DEBUG) {
            event!(
                target: "whist_bot::play",
                Level::DEBUG,
                seat = %self.player.seat(),
                tier = %decision.tier,
                can_win = decision.can_win,
                conservative = decision.conservative,
                played = trick.len(),
                card = %decision.card,
                "simple player decision"
            );
        }
        Some(decision.card)
    }
}
