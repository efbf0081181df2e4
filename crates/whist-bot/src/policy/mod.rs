mod lowest;
mod simple;

pub use lowest::LowestCardPolicy;
pub use simple::SimpleComputerPlayer;

use whist_core::model::card::Card;
use whist_core::model::trick::Trick;

/// Anything that can pick a card for its seat given the trick in progress.
/// Implementations only recommend; the caller plays the card.
pub trait Policy {
    fn name(&self) -> &'static str;

    /// Returns `None` only when the bound player holds no cards.
    fn choose_play(&self, trick: &Trick) -> Option<Card>;
}
