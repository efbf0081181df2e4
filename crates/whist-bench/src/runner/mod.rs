use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{RngCore, SeedableRng, rngs::StdRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{Level, event};
use whist_bot::policy::{LowestCardPolicy, Policy, SimpleComputerPlayer};
use whist_core::game::match_state::MatchState;
use whist_core::game::variant::Variant;
use whist_core::model::card::Card;
use whist_core::model::player::{Partnership, Player, Seat, SeatedPlayer};
use whist_core::model::round::RoundError;
use whist_core::model::suit::Suit;

use crate::config::{AgentConfig, AgentKind, BenchConfig, ResolvedOutputs};

const MAX_HANDS_PER_MATCH: u32 = 64;

/// Plays every configured match and streams one JSON row per hand.
pub struct MatchRunner {
    config: BenchConfig,
    outputs: ResolvedOutputs,
}

/// Summary details returned after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub matches_played: usize,
    pub hands_played: usize,
    /// Matches won by North/South then East/West; drawn matches count for neither.
    pub match_wins: [usize; 2],
    pub jsonl_path: PathBuf,
}

#[derive(Debug, Serialize)]
struct HandLogRow<'a> {
    run_id: &'a str,
    variant: Variant,
    match_index: usize,
    match_seed: u64,
    hand_number: u32,
    dealer: Seat,
    trumps: Option<Suit>,
    cards_per_seat: u8,
    tricks: [u8; 2],
    awarded: Option<(Partnership, u32)>,
    scores: [u32; 2],
    agents: [&'a str; 4],
}

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("failed to serialize log row: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
    #[error("configuration requires exactly 4 agents but found {found}")]
    SeatCount { found: usize },
    #[error("agent '{agent}' at {seat} produced no card while holding {held}")]
    NoCard {
        agent: String,
        seat: Seat,
        held: usize,
    },
    #[error("agent '{agent}' at {seat} chose {card}: {source}")]
    IllegalMove {
        agent: String,
        seat: Seat,
        card: Card,
        #[source]
        source: RoundError,
    },
    #[error("match {match_index} did not finish within {limit} hands")]
    Runaway { match_index: usize, limit: u32 },
}

impl MatchRunner {
    /// Build a runner from a validated configuration.
    pub fn new(config: BenchConfig, outputs: ResolvedOutputs) -> Result<Self, RunnerError> {
        if config.agents.len() != 4 {
            return Err(RunnerError::SeatCount {
                found: config.agents.len(),
            });
        }
        Ok(Self { config, outputs })
    }

    pub fn run(&self) -> Result<RunSummary, RunnerError> {
        ensure_parent(self.outputs.jsonl.parent())?;
        let mut writer = BufWriter::new(File::create(&self.outputs.jsonl)?);
        let mut rng = StdRng::seed_from_u64(self.config.deals.seed.unwrap_or(0));
        let mut hands_played = 0usize;
        let mut match_wins = [0usize; 2];

        for match_index in 0..self.config.deals.matches {
            let match_seed = rng.next_u64();
            let mut state = MatchState::with_seed(self.config.variant, match_seed);

            while !state.is_finished() {
                if state.hand_number() > MAX_HANDS_PER_MATCH {
                    return Err(RunnerError::Runaway {
                        match_index,
                        limit: MAX_HANDS_PER_MATCH,
                    });
                }
                self.play_hand(&mut state)?;

                let hand_number = state.hand_number();
                let dealer = state.round().dealer();
                let trumps = state.round().trumps();
                let cards_per_seat = state.round().cards_per_seat();
                let tricks = state.round().partnership_tricks();
                let awarded = state.finish_hand_and_start_next();

                let row = HandLogRow {
                    run_id: &self.config.run_id,
                    variant: self.config.variant,
                    match_index,
                    match_seed,
                    hand_number,
                    dealer,
                    trumps,
                    cards_per_seat,
                    tricks,
                    awarded,
                    scores: *state.scores().standings(),
                    agents: self.agent_names(),
                };
                serde_json::to_writer(&mut writer, &row)?;
                writer.write_all(b"\n")?;
                hands_played += 1;
            }

            if let Some(winner) = state.scores().leader() {
                match_wins[winner.index()] += 1;
            }
            event!(
                target: "whist_bench::match",
                Level::INFO,
                run_id = %self.config.run_id,
                match_index,
                hands = state.hands_played(),
                north_south = state.scores().score(Partnership::NorthSouth),
                east_west = state.scores().score(Partnership::EastWest),
                "match finished"
            );
        }

        writer.flush()?;

        Ok(RunSummary {
            matches_played: self.config.deals.matches,
            hands_played,
            match_wins,
            jsonl_path: self.outputs.jsonl.clone(),
        })
    }

    fn play_hand(&self, state: &mut MatchState) -> Result<(), RunnerError> {
        while let Some(seat) = state.round().next_to_play() {
            let agent = &self.config.agents[seat.index()];
            let round = state.round();
            let player = round.player(seat);
            let choice = spawn_policy(agent, player).choose_play(round.current_trick());
            let Some(card) = choice else {
                return Err(RunnerError::NoCard {
                    agent: agent.name.clone(),
                    seat,
                    held: player.hand().len(),
                });
            };

            state
                .round_mut()
                .play_card(seat, card)
                .map_err(|source| RunnerError::IllegalMove {
                    agent: agent.name.clone(),
                    seat,
                    card,
                    source,
                })?;
        }
        Ok(())
    }

    fn agent_names(&self) -> [&str; 4] {
        let agents = &self.config.agents;
        [
            agents[0].name.as_str(),
            agents[1].name.as_str(),
            agents[2].name.as_str(),
            agents[3].name.as_str(),
        ]
    }
}

fn spawn_policy<'a>(agent: &AgentConfig, player: &'a SeatedPlayer) -> Box<dyn Policy + 'a> {
    match agent.kind {
        AgentKind::Simple => Box::new(SimpleComputerPlayer::new(player)),
        AgentKind::Lowest => Box::new(LowestCardPolicy::new(player)),
    }
}

fn ensure_parent(path: Option<&Path>) -> Result<(), RunnerError> {
    if let Some(dir) = path.filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
