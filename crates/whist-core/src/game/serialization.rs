use super::match_state::MatchState;
use super::variant::Variant;
use crate::model::player::Seat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchSnapshot {
    pub seed: u64,
    pub variant: Variant,
    pub hand_number: u32,
    pub dealer: Seat,
    pub scores: [u32; 2],
}

impl MatchSnapshot {
    pub fn capture(state: &MatchState) -> Self {
        MatchSnapshot {
            seed: state.seed(),
            variant: state.variant(),
            hand_number: state.hand_number(),
            dealer: state.dealer(),
            scores: *state.scores().standings(),
        }
    }

    pub fn restore(self) -> MatchState {
        MatchState::from_snapshot(&self)
    }

    pub fn to_json(state: &MatchState) -> serde_json::Result<String> {
        let snapshot = Self::capture(state);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::MatchSnapshot;
    use crate::game::match_state::MatchState;
    use crate::game::variant::Variant;
    use crate::model::player::Seat;

    #[test]
    fn snapshot_serializes_to_json() {
        let state = MatchState::with_seed(Variant::KnockOut, 99);
        let json = MatchSnapshot::to_json(&state).unwrap();
        assert!(json.contains("\"seed\": 99"));
        assert!(json.contains("\"hand_number\": 1"));
        assert!(json.contains("\"variant\": \"knock_out\""));
        assert!(json.contains("\"dealer\": \"west\""));
    }

    #[test]
    fn snapshot_roundtrip_restores_seed_and_scores() {
        let mut state = MatchState::with_seed(Variant::Classic, 123);
        state.finish_hand_and_start_next();
        state.scores_mut().set_totals([3, 4]);
        let snapshot = MatchSnapshot::capture(&state);
        let restored = snapshot.clone().restore();
        assert_eq!(restored.seed(), 123);
        assert_eq!(restored.hand_number(), 2);
        assert_eq!(restored.dealer(), Seat::North);
        assert_eq!(restored.scores().standings(), &snapshot.scores);
        for seat in Seat::LOOP {
            assert_eq!(restored.round().hand(seat), state.round().hand(seat));
        }
    }

    #[test]
    fn snapshot_from_json_reads_fields() {
        let raw = r#"{
            "seed": 7,
            "variant": "single_hand",
            "hand_number": 2,
            "dealer": "east",
            "scores": [0, 1]
        }"#;

        let snapshot = MatchSnapshot::from_json(raw).unwrap();
        assert_eq!(snapshot.variant, Variant::SingleHand);
        assert_eq!(snapshot.hand_number, 2);
        assert_eq!(snapshot.dealer, Seat::East);
        assert_eq!(snapshot.scores, [0, 1]);
    }
}
