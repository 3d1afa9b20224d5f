//! Round-robin tournaments.
//!
//! Every contender plays every opponent twice per round, once from each
//! seat. Only tallies are kept; formatting them is up to the caller.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::config::MatchConfig;
use super::driver::{play_match, MatchOutcome, Termination};
use crate::core::{GameRng, PlayerId};
use crate::search::Agent;

/// Results for one agent across a tournament.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// Matches this agent lost by replying late.
    pub timeouts: u32,
    /// Matches this agent lost by having or giving no legal move.
    pub forfeits: u32,
    /// Matches this agent lost to a move the applicator rejected.
    pub illegal_moves: u32,
}

impl Tally {
    #[must_use]
    pub fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Wins as a fraction of matches played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        match self.played() {
            0 => 0.0,
            played => f64::from(self.wins) / f64::from(played),
        }
    }

    fn record(&mut self, outcome: &MatchOutcome, seat: PlayerId) {
        if outcome.is_draw() {
            self.draws += 1;
        } else if outcome.winner == Some(seat) {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        if outcome.offender == Some(seat) {
            match outcome.termination {
                Termination::Timeout => self.timeouts += 1,
                Termination::Forfeit => self.forfeits += 1,
                Termination::IllegalMove => self.illegal_moves += 1,
                Termination::Finished | Termination::TurnLimit => {}
            }
        }
    }
}

/// One named row of a tournament table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    pub name: String,
    pub tally: Tally,
}

/// Tallies for contenders and opponents, in the order they were given.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub contenders: Vec<Standing>,
    pub opponents: Vec<Standing>,
    pub matches: u32,
}

impl TournamentReport {
    /// Look up a standing by agent name.
    #[must_use]
    pub fn standing(&self, name: &str) -> Option<&Standing> {
        self.contenders
            .iter()
            .chain(&self.opponents)
            .find(|s| s.name == name)
    }
}

/// A contenders-versus-opponents tournament.
#[derive(Clone, Debug)]
pub struct Tournament {
    config: MatchConfig,
    rounds: u32,
}

impl Tournament {
    pub fn new(config: MatchConfig, rounds: u32) -> Self {
        Self { config, rounds }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play every contender against every opponent, both seat orders,
    /// `rounds` times.
    pub fn run(
        &self,
        contenders: &mut [Box<dyn Agent>],
        opponents: &mut [Box<dyn Agent>],
        rng: &mut GameRng,
    ) -> TournamentReport {
        let standing = |name: &str| Standing {
            name: name.to_owned(),
            tally: Tally::default(),
        };
        let mut report = TournamentReport {
            contenders: contenders.iter().map(|a| standing(a.name())).collect(),
            opponents: opponents.iter().map(|a| standing(a.name())).collect(),
            matches: 0,
        };

        for _ in 0..self.rounds {
            for (c, contender) in contenders.iter_mut().enumerate() {
                for (o, opponent) in opponents.iter_mut().enumerate() {
                    // Each match deals from its own stream so one can be replayed alone
                    let mut deal = GameRng::new(rng.next_seed());
                    let home = play_match(contender.as_mut(), opponent.as_mut(), &self.config, &mut deal);
                    report.contenders[c].tally.record(&home, PlayerId::FIRST);
                    report.opponents[o].tally.record(&home, PlayerId::SECOND);

                    let mut deal = GameRng::new(rng.next_seed());
                    let away = play_match(opponent.as_mut(), contender.as_mut(), &self.config, &mut deal);
                    report.opponents[o].tally.record(&away, PlayerId::FIRST);
                    report.contenders[c].tally.record(&away, PlayerId::SECOND);

                    report.matches += 2;
                }
            }
        }

        info!(matches = report.matches, rounds = self.rounds, "tournament complete");
        report
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::search::{GreedyAgent, HeuristicFilterAgent, RandomAgent};

    #[test]
    fn test_every_pairing_plays_both_seats() {
        let mut contenders: Vec<Box<dyn Agent>> = vec![
            Box::new(GreedyAgent::new("greedy", 1)),
            Box::new(HeuristicFilterAgent::jewels("jewel", 2)),
        ];
        let mut opponents: Vec<Box<dyn Agent>> = vec![Box::new(RandomAgent::new("random", 3))];

        let config = MatchConfig::default().with_move_time_limit(Duration::from_secs(5));
        let report = Tournament::new(config, 2).run(&mut contenders, &mut opponents, &mut GameRng::new(9));

        assert_eq!(report.matches, 8);
        for standing in &report.contenders {
            assert_eq!(standing.tally.played(), 4);
        }
        assert_eq!(report.standing("random").map(|s| s.tally.played()), Some(8));
        assert_eq!(report.standing("nobody"), None);
    }

    #[test]
    fn test_same_seed_replays_the_tournament() {
        let agents = || -> (Vec<Box<dyn Agent>>, Vec<Box<dyn Agent>>) {
            (
                vec![Box::new(GreedyAgent::new("greedy", 4))],
                vec![Box::new(RandomAgent::new("random", 5))],
            )
        };
        let config = MatchConfig::default().with_move_time_limit(Duration::from_secs(5));
        let tournament = Tournament::new(config, 3);

        let (mut c1, mut o1) = agents();
        let first = tournament.run(&mut c1, &mut o1, &mut GameRng::new(77));
        let (mut c2, mut o2) = agents();
        let second = tournament.run(&mut c2, &mut o2, &mut GameRng::new(77));

        assert_eq!(first, second);
        assert_eq!(first.matches, 6);
    }

    #[test]
    fn test_tally_counts_draws() {
        let outcome = MatchOutcome {
            names: crate::core::PlayerMap::new(|p| p.to_string()),
            winner: None,
            termination: Termination::Finished,
            offender: None,
            final_scores: crate::core::PlayerMap::with_value(40),
            history: Vec::new(),
        };
        assert!(outcome.is_draw());

        let mut tally = Tally::default();
        tally.record(&outcome, PlayerId::FIRST);
        assert_eq!((tally.wins, tally.losses, tally.draws), (0, 0, 1));
        assert_eq!(tally.win_rate(), 0.0);
    }

    #[test]
    fn test_tally_records_violations() {
        let outcome = MatchOutcome {
            names: crate::core::PlayerMap::new(|p| p.to_string()),
            winner: Some(PlayerId::SECOND),
            termination: Termination::Timeout,
            offender: Some(PlayerId::FIRST),
            final_scores: crate::core::PlayerMap::with_value(0),
            history: Vec::new(),
        };

        let mut late = Tally::default();
        late.record(&outcome, PlayerId::FIRST);
        let mut patient = Tally::default();
        patient.record(&outcome, PlayerId::SECOND);

        assert_eq!((late.losses, late.timeouts), (1, 1));
        assert_eq!((patient.wins, patient.timeouts), (1, 0));
        assert_eq!(patient.win_rate(), 1.0);
    }
}
