//! The match driver.
//!
//! Runs one game between two agents: enumerate the legal moves, hand the
//! agent to move a snapshot and a fresh deadline, validate the reply and
//! apply it. Any protocol violation ends the match at once and awards it
//! to the other player.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::config::MatchConfig;
use crate::core::{GameRng, GameState, MoveRecord, PlayerId, PlayerMap};
use crate::search::{Agent, Deadline};

/// How a match ended.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Termination {
    /// The game reached a terminal state.
    #[display("finished")]
    Finished,
    /// An agent replied after its deadline.
    #[display("timeout")]
    Timeout,
    /// The player to move had no legal move, or its agent replied with
    /// nothing or with a move outside the legal set.
    #[display("forfeit")]
    Forfeit,
    /// The applicator rejected a move from the legal set.
    #[display("illegal move")]
    IllegalMove,
    /// The turn cap was reached; scored like a normal finish.
    #[display("turn limit")]
    TurnLimit,
}

impl Termination {
    /// True for endings caused by an agent breaking the protocol.
    #[must_use]
    pub fn is_violation(&self) -> bool {
        matches!(self, Termination::Timeout | Termination::Forfeit | Termination::IllegalMove)
    }
}

/// Everything a finished match reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Agent names by seat.
    pub names: PlayerMap<String>,

    /// Winning seat, `None` for a draw.
    pub winner: Option<PlayerId>,

    pub termination: Termination,

    /// The seat that broke the protocol, if any.
    pub offender: Option<PlayerId>,

    /// Total scores (bonus tokens included) when the match stopped.
    pub final_scores: PlayerMap<i32>,

    /// Every applied move, in order.
    pub history: Vec<MoveRecord>,
}

impl MatchOutcome {
    #[must_use]
    pub fn winner_name(&self) -> Option<&str> {
        self.winner.map(|p| self.names[p].as_str())
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Play one match. `first` moves first.
///
/// The game is dealt from `rng`, so a fixed seed and deterministic agents
/// replay the same match.
pub fn play_match(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    config: &MatchConfig,
    rng: &mut GameRng,
) -> MatchOutcome {
    let mut state = GameState::new_game(first.name(), second.name(), rng);
    let mut history = Vec::new();
    info!(first = first.name(), second = second.name(), "match started");

    loop {
        if state.is_terminal() {
            return conclude(&state, Termination::Finished, None, history);
        }
        if state.turn > config.max_turns {
            return conclude(&state, Termination::TurnLimit, None, history);
        }

        let mover = state.active_player();
        let legal = state.legal_moves();
        if legal.is_empty() {
            warn!(player = %mover, turn = state.turn, "no legal moves");
            return conclude(&state, Termination::Forfeit, Some(mover), history);
        }

        let agent: &mut dyn Agent = if mover == PlayerId::FIRST {
            &mut *first
        } else {
            &mut *second
        };
        let deadline = Deadline::after(config.move_time_limit);
        let reply = agent.choose_move(&state.snapshot(), &legal, &deadline);

        if deadline.is_expired() {
            warn!(
                agent = agent.name(),
                elapsed_ms = deadline.elapsed().as_millis() as u64,
                "reply after deadline"
            );
            return conclude(&state, Termination::Timeout, Some(mover), history);
        }
        let Some(mv) = reply else {
            warn!(agent = agent.name(), "agent returned no move");
            return conclude(&state, Termination::Forfeit, Some(mover), history);
        };
        if !legal.contains(&mv) {
            warn!(agent = agent.name(), %mv, "move not in the legal set");
            return conclude(&state, Termination::Forfeit, Some(mover), history);
        }

        let before = PlayerMap::new(|p| state.visible_score_for(p));
        let turn = state.turn;
        if let Err(err) = state.apply_move(mv) {
            warn!(agent = agent.name(), %mv, %err, "move rejected");
            return conclude(&state, Termination::IllegalMove, Some(mover), history);
        }
        history.push(MoveRecord {
            turn,
            player: mover,
            mv,
            visible_delta: before.map(|p, &score| state.visible_score_for(p) - score),
        });
    }
}

fn conclude(
    state: &GameState,
    termination: Termination,
    offender: Option<PlayerId>,
    history: Vec<MoveRecord>,
) -> MatchOutcome {
    let winner = match offender {
        Some(player) => Some(player.opponent()),
        None => state.result_by_score().winner(),
    };
    let outcome = MatchOutcome {
        names: PlayerMap::new(|p| state.name(p).to_owned()),
        winner,
        termination,
        offender,
        final_scores: PlayerMap::new(|p| state.total_score_for(p)),
        history,
    };
    info!(
        winner = outcome.winner_name().unwrap_or("draw"),
        %termination,
        turns = outcome.history.len(),
        first = outcome.final_scores[PlayerId::FIRST],
        second = outcome.final_scores[PlayerId::SECOND],
        "match over"
    );
    outcome
}
