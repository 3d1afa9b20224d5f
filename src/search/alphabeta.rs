//! Alpha-beta search with iterative deepening.
//!
//! Each iteration searches one ply deeper than the last, starting at 1.
//! The move from the deepest iteration that completed is kept; an
//! iteration interrupted by the deadline is thrown away. The previous
//! iteration's best move is searched first at the root, which tightens
//! the window early and lets later siblings prune harder.

use std::time::Instant;

use tracing::debug;

use super::agent::Agent;
use super::config::SearchConfig;
use super::context::{ordered_root, Expansion, SearchContext, SearchTimeout};
use super::deadline::Deadline;
use super::eval::Evaluator;
use super::stats::SearchStats;
use crate::core::{GameRng, GameState, Move};
use crate::rules::MoveSet;

/// Iterative-deepening alpha-beta agent.
pub struct AlphaBetaAgent<V> {
    name: String,
    evaluator: V,
    config: SearchConfig,
    rng: GameRng,
    stats: SearchStats,
}

impl<V: Evaluator> AlphaBetaAgent<V> {
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

impl<V: Evaluator> Agent for AlphaBetaAgent<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&mut self, snapshot: &GameState, legal: &MoveSet, deadline: &Deadline) -> Option<Move> {
        let mut best = legal.choose(&mut self.rng)?;
        let mut principal = None;
        let started = Instant::now();
        self.stats.reset();

        for depth in 1..=self.config.max_depth.max(1) {
            let (outcome, depth_limited) = {
                let mut ctx = SearchContext::new(
                    snapshot.active_player(),
                    &self.evaluator,
                    deadline,
                    self.config.timer_threshold,
                    &mut self.stats,
                );
                let outcome = search_root(&mut ctx, snapshot, legal, depth, principal);
                (outcome, ctx.depth_limited)
            };

            match outcome {
                Ok(Some(mv)) => {
                    best = mv;
                    principal = Some(mv);
                    self.stats.completed_depth = depth;
                }
                Ok(None) => break,
                Err(SearchTimeout) => {
                    self.stats.timed_out = true;
                    break;
                }
            }

            // Every line already reached the end of the game
            if !depth_limited {
                break;
            }
        }

        self.stats.time_us = started.elapsed().as_micros() as u64;
        debug!(
            agent = %self.name,
            depth = self.stats.completed_depth,
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            timed_out = self.stats.timed_out,
            %best,
            "alpha-beta decision"
        );
        Some(best)
    }
}

fn search_root<V: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, V>,
    state: &GameState,
    legal: &MoveSet,
    depth: u32,
    principal: Option<Move>,
) -> Result<Option<Move>, SearchTimeout> {
    ctx.checkpoint()?;

    let mut alpha = f64::NEG_INFINITY;
    let mut best: Option<(Move, f64)> = None;
    for mv in ordered_root(legal, principal) {
        let Some(child) = ctx.child(state, mv) else {
            continue;
        };
        let value = alphabeta(ctx, &child, depth - 1, alpha, f64::INFINITY)?;
        if best.map_or(true, |(_, b)| value > b) {
            best = Some((mv, value));
        }
        alpha = alpha.max(value);
    }
    Ok(best.map(|(mv, _)| mv))
}

fn alphabeta<V: Evaluator + ?Sized>(
    ctx: &mut SearchContext<'_, V>,
    state: &GameState,
    depth: u32,
    mut alpha: f64,
    mut beta: f64,
) -> Result<f64, SearchTimeout> {
    let moves = match ctx.expand(state, depth)? {
        Expansion::Leaf(value) => return Ok(value),
        Expansion::Children(moves) => moves,
    };

    if ctx.maximizing(state) {
        let mut value = f64::NEG_INFINITY;
        for &mv in &moves {
            let Some(child) = ctx.child(state, mv) else {
                continue;
            };
            value = value.max(alphabeta(ctx, &child, depth - 1, alpha, beta)?);
            if value >= beta {
                ctx.stats.cutoffs += 1;
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    } else {
        let mut value = f64::INFINITY;
        for &mv in &moves {
            let Some(child) = ctx.child(state, mv) else {
                continue;
            };
            value = value.min(alphabeta(ctx, &child, depth - 1, alpha, beta)?);
            if value <= alpha {
                ctx.stats.cutoffs += 1;
                return Ok(value);
            }
            beta = beta.min(value);
        }
        Ok(value)
    }
}
