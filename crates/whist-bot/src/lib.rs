pub mod bot;
pub mod policy;

pub use bot::{Candidates, Decision, PlayPlanner, Tier};
pub use policy::{LowestCardPolicy, Policy, SimpleComputerPlayer};
