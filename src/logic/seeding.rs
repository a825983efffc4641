//! Seeding: merge per-pool standings into one tournament-wide seed order.

use crate::logic::standings::{compare_across_pools, compute_standings, Standing};
use crate::models::{TeamId, Tiebreaker, Tournament};
use serde::Serialize;

/// The ordered list of teams advancing into the bracket. Pool winners rank
/// ahead of all runners-up; the 1-based position in `seeds()` is the team's
/// tournament seed number.
#[derive(Clone, Debug, Serialize)]
pub struct SeedList {
    pub winners: Vec<TeamId>,
    pub runners: Vec<TeamId>,
}

impl SeedList {
    /// Winners followed by runners-up.
    pub fn seeds(&self) -> Vec<TeamId> {
        self.winners
            .iter()
            .chain(self.runners.iter())
            .copied()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.winners.len() + self.runners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty() && self.runners.is_empty()
    }
}

/// Rank each pool's first and second place across the whole tournament.
///
/// Head-to-head never applies here: teams from different pools have no
/// direct result, so the global comparator skips it.
pub fn compute_seeds(per_pool_standings: &[Vec<Standing>], tiebreakers: &[Tiebreaker]) -> SeedList {
    let mut winners: Vec<&Standing> = Vec::new();
    let mut runners: Vec<&Standing> = Vec::new();
    for standings in per_pool_standings {
        if let Some(first) = standings.first() {
            winners.push(first);
        }
        if let Some(second) = standings.get(1) {
            runners.push(second);
        }
    }
    winners.sort_by(|a, b| compare_across_pools(a, b, tiebreakers));
    runners.sort_by(|a, b| compare_across_pools(a, b, tiebreakers));
    SeedList {
        winners: winners.iter().map(|s| s.team_id).collect(),
        runners: runners.iter().map(|s| s.team_id).collect(),
    }
}

/// Convenience: compute standings for every pool of a tournament and merge
/// them into the seed list, using the tournament's configured tiebreakers.
pub fn tournament_seeds(tournament: &Tournament) -> SeedList {
    let tiebreakers = &tournament.rules.tiebreakers;
    let per_pool: Vec<Vec<Standing>> = tournament
        .pools
        .iter()
        .map(|pool| {
            let teams = tournament.teams_in_pool(pool.id);
            let matches = tournament.pool_matches(pool.id);
            compute_standings(&teams, &matches, tiebreakers)
        })
        .collect();
    compute_seeds(&per_pool, tiebreakers)
}
