//! Integration tests for tournament-wide seeding across pools.

use beach_tournament_web::{
    tournament_seeds, GameMatch, PoolId, TeamId, Tournament, TournamentPhase,
};
use std::collections::HashSet;

fn add_pool_of(t: &mut Tournament, pool_name: &str, names: &[&str]) -> (PoolId, Vec<TeamId>) {
    let pool = t.add_pool(pool_name, None).unwrap();
    let mut ids = Vec::new();
    for (i, name) in names.iter().enumerate() {
        let id = t.add_team(*name).unwrap();
        t.assign_team_to_pool(id, pool).unwrap();
        t.set_seed_in_pool(id, i as u32 + 1).unwrap();
        ids.push(id);
    }
    (pool, ids)
}

fn completed_match(t: &mut Tournament, pool: PoolId, a: TeamId, b: TeamId, sa: u32, sb: u32) {
    let mut m = GameMatch::pool_match(t.id, pool, 1, Some(a), Some(b));
    m.team1_score = Some(sa);
    m.team2_score = Some(sb);
    m.winner_id = Some(if sa > sb { a } else { b });
    t.matches.push(m);
}

/// Two pools of two: both winners rank ahead of both runners-up, and the
/// stronger winner takes seed 1.
#[test]
fn winners_rank_ahead_of_runners() {
    let mut t = Tournament::new("Test Open");
    let (pool_a, a_ids) = add_pool_of(&mut t, "Pool A", &["Aces", "Blockers"]);
    let (pool_b, b_ids) = add_pool_of(&mut t, "Pool B", &["Cutters", "Daggers"]);
    t.phase = TournamentPhase::PoolPlay;
    // Pool A: Aces win big. Pool B: Cutters win narrowly.
    completed_match(&mut t, pool_a, a_ids[0], a_ids[1], 21, 8);
    completed_match(&mut t, pool_b, b_ids[0], b_ids[1], 21, 19);

    let seed_list = tournament_seeds(&t);
    assert_eq!(seed_list.winners, vec![a_ids[0], b_ids[0]]);
    assert_eq!(seed_list.runners, vec![b_ids[1], a_ids[1]]);
    assert_eq!(seed_list.seeds(), vec![a_ids[0], b_ids[0], b_ids[1], a_ids[1]]);
}

/// The seed list is a permutation: each advancing team exactly once, length
/// equal to winners + runners.
#[test]
fn seed_list_is_a_permutation() {
    let mut t = Tournament::new("Test Open");
    for (pool_name, names) in [
        ("Pool A", ["Aces", "Blockers", "Cutters"]),
        ("Pool B", ["Daggers", "Eagles", "Falcons"]),
        ("Pool C", ["Gators", "Herons", "Ibis"]),
    ] {
        let (pool, ids) = add_pool_of(&mut t, pool_name, &names);
        completed_match(&mut t, pool, ids[0], ids[1], 21, 10);
        completed_match(&mut t, pool, ids[1], ids[2], 21, 12);
        completed_match(&mut t, pool, ids[0], ids[2], 21, 14);
    }

    let seed_list = tournament_seeds(&t);
    let seeds = seed_list.seeds();
    assert_eq!(seeds.len(), seed_list.len());
    assert_eq!(seeds.len(), seed_list.winners.len() + seed_list.runners.len());
    let unique: HashSet<_> = seeds.iter().collect();
    assert_eq!(unique.len(), seeds.len());
    assert_eq!(seeds.len(), 6);
}

/// A single-team pool still produces a winner and no runner-up.
#[test]
fn short_pool_contributes_only_a_winner() {
    let mut t = Tournament::new("Test Open");
    let (_, ids) = add_pool_of(&mut t, "Pool A", &["Aces"]);
    let seed_list = tournament_seeds(&t);
    assert_eq!(seed_list.winners, vec![ids[0]]);
    assert!(seed_list.runners.is_empty());
}

/// No pools at all: empty seed list.
#[test]
fn no_pools_no_seeds() {
    let t = Tournament::new("Test Open");
    let seed_list = tournament_seeds(&t);
    assert!(seed_list.is_empty());
    assert!(seed_list.seeds().is_empty());
}
