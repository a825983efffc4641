//! Pool schedule generation: expand seed-number templates into match rows.

use crate::logic::templates::{default_template, SUPPORTED_POOL_SIZES};
use crate::models::{
    GameMatch, MatchId, MatchType, PoolId, Tournament, TournamentError, TournamentPhase,
};
use std::collections::{HashMap, HashSet};

/// Generate pool matches for every pool from the per-size schedule templates.
///
/// All prerequisites are checked up front and every failure is reported in
/// one validation list; nothing is generated unless all pools pass. Missing
/// templates are auto-created from the built-in defaults for the sizes they
/// cover. Seed numbers with no team behind them resolve to an empty slot.
///
/// Generation never deletes existing pool matches; callers that want a fresh
/// schedule must call [`clear_pool_matches`] first.
pub fn generate_pool_schedule(tournament: &mut Tournament) -> Result<usize, TournamentError> {
    let errors = check_prerequisites(tournament);
    if !errors.is_empty() {
        return Err(TournamentError::Validation(errors));
    }

    let mut new_matches = Vec::new();
    for pool in &tournament.pools {
        let teams = tournament.teams_in_pool(pool.id);
        let size = teams.len() as u32;
        // Presence checked in prerequisites.
        let Some(template) = tournament.templates.get(&size) else {
            continue;
        };
        let by_seed: HashMap<u32, _> = teams
            .iter()
            .filter_map(|t| t.seed_in_pool.map(|s| (s, t.id)))
            .collect();
        for round in &template.rounds {
            for pairing in &round.pairings {
                new_matches.push(GameMatch::pool_match(
                    tournament.id,
                    pool.id,
                    round.round,
                    by_seed.get(&pairing.a).copied(),
                    by_seed.get(&pairing.b).copied(),
                ));
            }
        }
    }

    let inserted = new_matches.len();
    tournament.matches.extend(new_matches);
    if tournament.phase == TournamentPhase::Setup {
        tournament.phase = TournamentPhase::PoolPlay;
    }
    log::info!(
        "Generated {} pool match(es) for tournament {}",
        inserted,
        tournament.id
    );
    Ok(inserted)
}

/// Collect every prerequisite failure: placeholder team names, unsupported
/// pool sizes, missing/duplicate/out-of-range seeds, and missing templates.
/// Auto-creates default templates for pool sizes the defaults cover.
fn check_prerequisites(tournament: &mut Tournament) -> Vec<String> {
    let mut errors = Vec::new();
    let mut sizes_in_use: HashSet<u32> = HashSet::new();

    for pool in &tournament.pools {
        let teams = tournament.teams_in_pool(pool.id);
        let size = teams.len() as u32;
        if !SUPPORTED_POOL_SIZES.contains(&size) {
            errors.push(format!(
                "Pool {} has {} team(s); supported sizes are {}-{}",
                pool.name,
                size,
                SUPPORTED_POOL_SIZES.start(),
                SUPPORTED_POOL_SIZES.end()
            ));
            continue;
        }
        sizes_in_use.insert(size);

        let mut seen_seeds: HashSet<u32> = HashSet::new();
        for team in &teams {
            if team.has_placeholder_name() {
                errors.push(format!(
                    "Team \"{}\" in pool {} still has its placeholder name",
                    team.name, pool.name
                ));
            }
            match team.seed_in_pool {
                None => errors.push(format!(
                    "Team \"{}\" in pool {} has no seed",
                    team.name, pool.name
                )),
                Some(seed) if seed < 1 || seed > size => errors.push(format!(
                    "Team \"{}\" in pool {} has seed {} outside 1..={}",
                    team.name, pool.name, seed, size
                )),
                Some(seed) => {
                    if !seen_seeds.insert(seed) {
                        errors.push(format!(
                            "Seed {} is assigned twice in pool {}",
                            seed, pool.name
                        ));
                    }
                }
            }
        }
    }

    for size in sizes_in_use {
        if !tournament.templates.contains_key(&size) {
            match default_template(size) {
                Some(template) => {
                    tournament.templates.insert(size, template);
                }
                None => errors.push(format!("No schedule template for pool size {}", size)),
            }
        }
        if let Some(template) = tournament.templates.get(&size) {
            if let Err(template_errors) = template.validate() {
                errors.extend(
                    template_errors
                        .into_iter()
                        .map(|e| format!("Template for pool size {}: {}", size, e)),
                );
            }
        }
    }

    errors
}

/// Delete pool matches: all of them, or only one pool's.
pub fn clear_pool_matches(tournament: &mut Tournament, pool_id: Option<PoolId>) -> usize {
    let before = tournament.matches.len();
    tournament.matches.retain(|m| {
        m.match_type != MatchType::Pool
            || pool_id.is_some_and(|p| m.pool_id != Some(p))
    });
    before - tournament.matches.len()
}

/// Record a final score on a pool match. Ties are rejected (every beach set
/// has a winner); live-scoring fields are cleared on submission.
pub fn report_pool_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    team1_score: u32,
    team2_score: u32,
) -> Result<(), TournamentError> {
    if team1_score == team2_score {
        return Err(TournamentError::TiedScore);
    }
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.match_type != MatchType::Pool {
        return Err(TournamentError::Validation(vec![
            "Not a pool match".to_string(),
        ]));
    }
    let winner = if team1_score > team2_score {
        m.team1_id
    } else {
        m.team2_id
    };
    let Some(winner) = winner else {
        return Err(TournamentError::Validation(vec![
            "Winning slot has no team assigned".to_string(),
        ]));
    };
    m.team1_score = Some(team1_score);
    m.team2_score = Some(team2_score);
    m.winner_id = Some(winner);
    m.clear_live();
    Ok(())
}
