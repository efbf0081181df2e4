#![deny(warnings)]
//! Four-seat partnership whist: cards, hands, tricks and the hand/match
//! bookkeeping that drives them.
pub mod game;
pub mod model;
