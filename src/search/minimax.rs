//! Fixed-depth minimax.

use std::time::Instant;

use tracing::debug;

use super::agent::Agent;
use super::config::SearchConfig;
use super::context::{Expansion, SearchContext, SearchTimeout};
use super::deadline::Deadline;
use super::eval::Evaluator;
use super::stats::SearchStats;
use crate::core::{GameRng, GameState, Move};
use crate::rules::MoveSet;

/// Full-width minimax to `config.depth` plies.
///
/// The searching player maximises, the opponent minimises, and the turn
/// pointer of each node decides which is which. If the deadline
/// interrupts the search the agent plays a random legal move instead.
pub struct MinimaxAgent<V> {
    name: String,
    evaluator: V,
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl<V: Evaluator> MinimaxAgent<V> {
    pub fn new(name: impl Into<String>, evaluator: V, config: SearchConfig) -> Self {
        Self {
            name: name.into(),
            evaluator,
            rng: GameRng::new(config.seed),
            config,
            stats: SearchStats::default(),
        }
    }

    /// Statistics from the last decision.
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<V: Evaluator> Agent for MinimaxAgent<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, snapshot: &GameState, legal: &MoveSet, deadline: &Deadline) -> Option<Move> {
        let fallback = legal.choose(&mut self.rng)?;
        let depth = self.config.depth.max(1);
        let started = Instant::now();
        self.stats.reset();

        let outcome = {
            let mut ctx = SearchContext::new(
                snapshot.active_player(),
                &self.evaluator,
                deadline,
                self.config.timer_threshold,
                &mut self.stats,
            );
            search_root(&mut ctx, snapshot, legal, depth)
        };

        let chosen = match outcome {
            Ok(best) => {
                self.stats.completed_depth = depth;
                best.unwrap_or(fallback)
            }
            Err(SearchTimeout) => {
                self.stats.timed_out = true;
                debug!(agent = %self.name, nodes = self.stats.nodes, "minimax timed out, playing random move");
                fallback
            }
        };
        self.stats.time_us = started.elapsed().as_micros() as u64;
        Some(chosen)
    }
}

fn search_root<V: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, V>,
    state: &GameState,
    legal: &MoveSet,
    depth: u32,
) -> Result<Option<Move>, SearchTimeout> {
    ctx.checkpoint()?;

    let mut best: Option<(Move, f64)> = None;
    for &mv in legal {
        let Some(child) = ctx.child(state, mv) else {
            continue;
        };
        let value = minimax(ctx, &child, depth - 1)?;
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((mv, value));
        }
    }
    Ok(best.map(|(mv, _)| mv))
}

pub(crate) fn minimax<V: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, V>,
    state: &GameState,
    depth: u32,
) -> Result<f64, SearchTimeout> {
    let moves = match ctx.expand(state, depth)? {
        Expansion::Leaf(value) => return Ok(value),
        Expansion::Children(moves) => moves,
    };

    let maximizing = ctx.maximizing(state);
    let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
    for &mv in &moves {
        let Some(child) = ctx.child(state, mv) else {
            continue;
        };
        let value = minimax(ctx, &child, depth - 1)?;
        best = if maximizing { best.max(value) } else { best.min(value) };
    }
    Ok(best)
}
