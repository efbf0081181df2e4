use crate::model::player::Partnership;

/// Running game points for the two partnerships.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    totals: [u32; 2],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 2] }
    }

    pub fn add_points(&mut self, side: Partnership, points: u32) {
        self.totals[side.index()] += points;
    }

    pub fn set_totals(&mut self, totals: [u32; 2]) {
        self.totals = totals;
    }

    pub fn score(&self, side: Partnership) -> u32 {
        self.totals[side.index()]
    }

    pub fn standings(&self) -> &[u32; 2] {
        &self.totals
    }

    pub fn max_score(&self) -> u32 {
        self.totals.iter().copied().max().unwrap_or(0)
    }

    pub fn leader(&self) -> Option<Partnership> {
        let [north_south, east_west] = self.totals;
        match north_south.cmp(&east_west) {
            core::cmp::Ordering::Greater => Some(Partnership::NorthSouth),
            core::cmp::Ordering::Less => Some(Partnership::EastWest),
            core::cmp::Ordering::Equal => None,
        }
    }

    /// Scores a finished hand. The side taking the majority of the tricks
    /// earns one point per trick above half of `cards_per_seat`.
    /// Returns the side that scored, if any.
    pub fn apply_hand(
        &mut self,
        tricks: [u8; 2],
        cards_per_seat: u8,
    ) -> Option<(Partnership, u32)> {
        let half = cards_per_seat / 2;
        let [north_south, east_west] = tricks;
        let (side, won) = match north_south.cmp(&east_west) {
            core::cmp::Ordering::Greater => (Partnership::NorthSouth, north_south),
            core::cmp::Ordering::Less => (Partnership::EastWest, east_west),
            core::cmp::Ordering::Equal => return None,
        };
        let points = u32::from(won.saturating_sub(half));
        if points == 0 {
            return None;
        }
        self.add_points(side, points);
        Some((side, points))
    }
}
