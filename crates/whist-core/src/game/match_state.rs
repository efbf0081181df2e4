use crate::game::variant::Variant;
use crate::model::deck::Deck;
use crate::model::player::{Partnership, Seat};
use crate::model::round::RoundState;
use crate::model::score::ScoreBoard;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, event};

#[derive(Debug, Clone)]
pub struct MatchState {
    variant: Variant,
    scores: ScoreBoard,
    hand_number: u32,
    dealer: Seat,
    current_round: RoundState,
    rng: StdRng,
    seed: u64,
}

impl MatchState {
    pub fn new(variant: Variant) -> Self {
        let seed: u64 = rand::random();
        Self::with_seed(variant, seed)
    }

    pub fn with_seed(variant: Variant, seed: u64) -> Self {
        Self::with_seed_hand_dealer(variant, seed, 1, Seat::West)
    }

    /// Rebuilds the state at `hand_number` by replaying the shuffles of the
    /// earlier hands from `seed`.
    pub fn with_seed_hand_dealer(
        variant: Variant,
        seed: u64,
        hand_number: u32,
        dealer: Seat,
    ) -> Self {
        let normalized_hand = hand_number.max(1);
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 1..normalized_hand {
            let _ = Deck::shuffled(&mut rng);
        }

        let deck = Deck::shuffled(&mut rng);
        let cards_per_seat = variant.cards_per_seat(normalized_hand);
        let current_round = RoundState::deal(&deck, dealer, cards_per_seat);

        Self {
            variant,
            scores: ScoreBoard::new(),
            hand_number: normalized_hand,
            dealer,
            current_round,
            rng,
            seed,
        }
    }

    pub fn from_snapshot(snapshot: &crate::game::serialization::MatchSnapshot) -> Self {
        let mut state = MatchState::with_seed_hand_dealer(
            snapshot.variant,
            snapshot.seed,
            snapshot.hand_number,
            snapshot.dealer,
        );
        state.scores_mut().set_totals(snapshot.scores);
        state
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    pub fn scores_mut(&mut self) -> &mut ScoreBoard {
        &mut self.scores
    }

    pub fn round(&self) -> &RoundState {
        &self.current_round
    }

    pub fn round_mut(&mut self) -> &mut RoundState {
        &mut self.current_round
    }

    pub fn hand_number(&self) -> u32 {
        self.hand_number
    }

    pub fn hands_played(&self) -> u32 {
        self.hand_number - 1
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn is_finished(&self) -> bool {
        self.variant.is_finished(&self.scores, self.hands_played())
    }

    /// Scores the current hand, passes the deal to the left and deals again.
    pub fn finish_hand_and_start_next(&mut self) -> Option<(Partnership, u32)> {
        let tricks = self.current_round.partnership_tricks();
        let awarded = self
            .scores
            .apply_hand(tricks, self.current_round.cards_per_seat());
        event!(
            Level::DEBUG,
            hand = self.hand_number,
            north_south = tricks[0],
            east_west = tricks[1],
            awarded = ?awarded,
            "hand scored"
        );

        self.hand_number += 1;
        self.dealer = self.dealer.next();
        let deck = Deck::shuffled(&mut self.rng);
        self.current_round = RoundState::deal(
            &deck,
            self.dealer,
            self.variant.cards_per_seat(self.hand_number),
        );
        awarded
    }
}
