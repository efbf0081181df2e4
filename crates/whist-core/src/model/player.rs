use crate::model::hand::Hand;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One of the four fixed seats at the table. Play always proceeds clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Seat {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Seat {
    pub const LOOP: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Seat::North),
            1 => Some(Seat::East),
            2 => Some(Seat::South),
            3 => Some(Seat::West),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn next(self) -> Seat {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    /// Seat reached by moving `steps` places clockwise.
    pub const fn advance(self, steps: usize) -> Seat {
        match Seat::from_index((self.index() + steps) % 4) {
            Some(seat) => seat,
            None => self,
        }
    }

    pub const fn partnership(self) -> Partnership {
        match self {
            Seat::North | Seat::South => Partnership::NorthSouth,
            Seat::East | Seat::West => Partnership::EastWest,
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Partnership {
    NorthSouth,
    EastWest,
}

impl Partnership {
    pub const fn index(self) -> usize {
        match self {
            Partnership::NorthSouth => 0,
            Partnership::EastWest => 1,
        }
    }
}

impl fmt::Display for Partnership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partnership::NorthSouth => f.write_str("North/South"),
            Partnership::EastWest => f.write_str("East/West"),
        }
    }
}

/// What a trick needs from whoever plays into it: a fixed seat and the hand
/// that seat holds. The player keeps ownership of its hand.
pub trait Player {
    fn seat(&self) -> Seat;
    fn hand(&self) -> &Hand;
    fn hand_mut(&mut self) -> &mut Hand;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatedPlayer {
    seat: Seat,
    hand: Hand,
}

impl SeatedPlayer {
    pub fn new(seat: Seat) -> Self {
        Self {
            seat,
            hand: Hand::new(),
        }
    }

    pub fn with_hand(seat: Seat, hand: Hand) -> Self {
        Self { seat, hand }
    }
}

impl Player for SeatedPlayer {
    fn seat(&self) -> Seat {
        self.seat
    }

    fn hand(&self) -> &Hand {
        &self.hand
    }

    fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}
