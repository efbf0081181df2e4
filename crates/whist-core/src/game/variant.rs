use crate::model::score::ScoreBoard;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Rules that differ between whist games: how many cards each hand deals and
/// when the game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Classic,
    SingleHand,
    KnockOut,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Classic, Variant::SingleHand, Variant::KnockOut];

    const FULL_HAND: u8 = 13;
    const CLASSIC_TARGET: u32 = 5;

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Classic => "Classic Whist",
            Variant::SingleHand => "Single Hand Whist",
            Variant::KnockOut => "Knock-Out Whist",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::SingleHand => "single_hand",
            Variant::KnockOut => "knock_out",
        }
    }

    /// Cards dealt to each seat for the 1-based `hand_number`.
    pub fn cards_per_seat(self, hand_number: u32) -> u8 {
        match self {
            Variant::Classic | Variant::SingleHand => Self::FULL_HAND,
            Variant::KnockOut => {
                let shed = hand_number.saturating_sub(1).min(u32::from(Self::FULL_HAND - 1));
                Self::FULL_HAND - shed as u8
            }
        }
    }

    pub fn is_finished(self, scores: &ScoreBoard, hands_played: u32) -> bool {
        match self {
            Variant::Classic => scores.max_score() >= Self::CLASSIC_TARGET,
            Variant::SingleHand => scores.max_score() >= 1,
            Variant::KnockOut => hands_played >= u32::from(Self::FULL_HAND),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "classic" => Ok(Variant::Classic),
            "single_hand" | "single" => Ok(Variant::SingleHand),
            "knock_out" | "knockout" => Ok(Variant::KnockOut),
            _ => Err(()),
        }
    }
}
