//! Pool standings: aggregate completed match results and rank teams.
//!
//! Standings are derived state. They are recomputed from the current set of
//! completed pool matches on every call and never persisted or cached.

use crate::models::{GameMatch, Team, TeamId, Tiebreaker};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Aggregate record for one team within its pool.
#[derive(Clone, Debug, Serialize)]
pub struct Standing {
    pub team_id: TeamId,
    pub name: String,
    pub seed_in_pool: Option<u32>,
    pub wins: u32,
    pub losses: u32,
    pub played: u32,
    pub sets_won: u32,
    pub sets_lost: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Standing {
    fn new(team: &Team) -> Self {
        Self {
            team_id: team.id,
            name: team.name.clone(),
            seed_in_pool: team.seed_in_pool,
            wins: 0,
            losses: 0,
            played: 0,
            sets_won: 0,
            sets_lost: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    /// Fraction of contested sets won; 0 when no sets have been recorded.
    pub fn set_ratio(&self) -> f64 {
        let total = self.sets_won + self.sets_lost;
        if total == 0 {
            0.0
        } else {
            f64::from(self.sets_won) / f64::from(total)
        }
    }

    /// Points scored minus points conceded.
    pub fn point_diff(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }
}

/// Compute ranked standings for one pool, best team first.
///
/// `teams` are the pool's teams; `matches` are the pool's matches (only
/// completed ones contribute). A match side referencing a team outside the
/// pool is ignored for that side. An empty pool yields an empty list.
pub fn compute_standings(
    teams: &[&Team],
    matches: &[&GameMatch],
    tiebreakers: &[Tiebreaker],
) -> Vec<Standing> {
    let mut by_team: HashMap<TeamId, Standing> = teams
        .iter()
        .map(|t| (t.id, Standing::new(t)))
        .collect();

    // Direct results for the head-to-head tiebreaker: (winner, loser) pairs.
    let mut direct_results: HashSet<(TeamId, TeamId)> = HashSet::new();

    for m in matches {
        if !m.is_completed() {
            continue;
        }
        let winner = m.winner();
        let sides = [
            (m.team1_id, m.team1_score, m.team2_score),
            (m.team2_id, m.team2_score, m.team1_score),
        ];
        for (team_id, score_for, score_against) in sides {
            let Some(team_id) = team_id else { continue };
            let Some(standing) = by_team.get_mut(&team_id) else {
                continue;
            };
            standing.played += 1;
            standing.points_for += score_for.unwrap_or(0);
            standing.points_against += score_against.unwrap_or(0);
            if let Some(w) = winner {
                if w == team_id {
                    standing.wins += 1;
                    standing.sets_won += 1;
                } else {
                    standing.losses += 1;
                    standing.sets_lost += 1;
                }
            }
        }
        if let (Some(w), Some(l)) = (winner, m.loser()) {
            direct_results.insert((w, l));
        }
    }

    let mut standings: Vec<Standing> = by_team.into_values().collect();

    // Head-to-head only applies when exactly two teams share a win count.
    let mut wins_counts: HashMap<u32, usize> = HashMap::new();
    for s in &standings {
        *wins_counts.entry(s.wins).or_insert(0) += 1;
    }

    standings.sort_by(|a, b| {
        compare_in_pool(a, b, tiebreakers, &wins_counts, &direct_results)
    });
    standings
}

/// Pool comparator: wins descending, then the configured tiebreakers, then
/// the stable fallback (pool seed ascending, then name).
fn compare_in_pool(
    a: &Standing,
    b: &Standing,
    tiebreakers: &[Tiebreaker],
    wins_counts: &HashMap<u32, usize>,
    direct_results: &HashSet<(TeamId, TeamId)>,
) -> Ordering {
    let by_wins = b.wins.cmp(&a.wins);
    if by_wins != Ordering::Equal {
        return by_wins;
    }
    for tb in tiebreakers {
        let ord = match tb {
            Tiebreaker::HeadToHead => {
                // Only a strict pairwise tie: exactly these two teams on this
                // win count, and a direct completed result between them.
                if wins_counts.get(&a.wins).copied() != Some(2) {
                    Ordering::Equal
                } else if direct_results.contains(&(a.team_id, b.team_id)) {
                    Ordering::Less
                } else if direct_results.contains(&(b.team_id, a.team_id)) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            }
            Tiebreaker::SetRatio => compare_set_ratio(a, b),
            Tiebreaker::PointDiff => b.point_diff().cmp(&a.point_diff()),
            Tiebreaker::Random => deterministic_order(a, b),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    fallback_order(a, b)
}

/// Global comparator for ranking teams across pools: identical to the pool
/// comparator except head-to-head is skipped (teams from different pools
/// never met).
pub(crate) fn compare_across_pools(
    a: &Standing,
    b: &Standing,
    tiebreakers: &[Tiebreaker],
) -> Ordering {
    let by_wins = b.wins.cmp(&a.wins);
    if by_wins != Ordering::Equal {
        return by_wins;
    }
    for tb in tiebreakers {
        let ord = match tb {
            Tiebreaker::HeadToHead => Ordering::Equal,
            Tiebreaker::SetRatio => compare_set_ratio(a, b),
            Tiebreaker::PointDiff => b.point_diff().cmp(&a.point_diff()),
            Tiebreaker::Random => deterministic_order(a, b),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    fallback_order(a, b)
}

fn compare_set_ratio(a: &Standing, b: &Standing) -> Ordering {
    b.set_ratio()
        .partial_cmp(&a.set_ratio())
        .unwrap_or(Ordering::Equal)
}

/// The "random" tiebreaker: deterministic lexical team-id order, a stable
/// substitute for a coin flip so standings never shift between recomputes.
fn deterministic_order(a: &Standing, b: &Standing) -> Ordering {
    a.team_id.to_string().cmp(&b.team_id.to_string())
}

fn fallback_order(a: &Standing, b: &Standing) -> Ordering {
    match (a.seed_in_pool, b.seed_in_pool) {
        (Some(sa), Some(sb)) if sa != sb => sa.cmp(&sb),
        _ => a.name.cmp(&b.name),
    }
}
