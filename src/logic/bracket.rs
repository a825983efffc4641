//! Single-elimination bracket: generation, rebuild, and winner advancement.

use crate::logic::seeding::tournament_seeds;
use crate::models::{
    GameMatch, MatchId, MatchType, TeamId, Tournament, TournamentError, TournamentId,
    TournamentPhase,
};
use chrono::Utc;

/// Largest supported bracket. A product constraint, not a technical one:
/// extending it means adding a seeding-slot table below.
pub const MAX_BRACKET_SIZE: usize = 8;

/// Standard seeding-slot order per bracket size. Consecutive slot pairs form
/// the round-1 pairings (1v8, 4v5, 3v6, 2v7 for a full bracket of 8).
fn seeding_slots(size: usize) -> &'static [u32] {
    match size {
        2 => &[1, 2],
        4 => &[1, 4, 2, 3],
        8 => &[1, 8, 4, 5, 3, 6, 2, 7],
        _ => unreachable!("unsupported bracket size {size}"),
    }
}

/// Smallest supported power-of-two bracket holding `n` advancers.
pub fn bracket_size_for(n: usize) -> Result<usize, TournamentError> {
    if n == 0 {
        return Err(TournamentError::NoAdvancingTeams);
    }
    if n > MAX_BRACKET_SIZE {
        return Err(TournamentError::TooManyAdvancers {
            count: n,
            max: MAX_BRACKET_SIZE,
        });
    }
    let mut size = 2;
    while size < n {
        size *= 2;
    }
    Ok(size)
}

/// A round-1 slot pair with exactly one real team is a bye: the team skips
/// round 1 and is carried straight into the next round.
pub fn is_bye(pair: (Option<TeamId>, Option<TeamId>)) -> bool {
    pair.0.is_some() != pair.1.is_some()
}

/// Lay out bracket matches for an ordered seed list (1-based tournament
/// seeds). Bye teams get no round-1 row; they are pre-filled into the
/// correct slot of the following round. Pair indexes are preserved as
/// `bracket_match_index` even when sibling pairs are byes.
pub fn build_bracket_matches(
    tournament_id: TournamentId,
    seeds: &[TeamId],
) -> Result<Vec<GameMatch>, TournamentError> {
    let size = bracket_size_for(seeds.len())?;
    let slots: Vec<Option<TeamId>> = seeding_slots(size)
        .iter()
        .map(|&seed| seeds.get(seed as usize - 1).copied())
        .collect();

    let mut out = Vec::new();
    if size == 2 {
        // A single final. With one advancer there is nothing to play.
        let pair = (slots[0], slots[1]);
        if !is_bye(pair) {
            out.push(GameMatch::bracket_match(tournament_id, 1, 0, pair.0, pair.1));
        }
        return Ok(out);
    }

    let pair_count = size / 2;
    let mut next_round: Vec<(Option<TeamId>, Option<TeamId>)> = vec![(None, None); pair_count / 2];
    for i in 0..pair_count {
        let pair = (slots[2 * i], slots[2 * i + 1]);
        if is_bye(pair) {
            // Carry the lone team into its next-round slot; no row for the bye.
            let carried = pair.0.or(pair.1);
            let target = &mut next_round[i / 2];
            if i % 2 == 0 {
                target.0 = carried;
            } else {
                target.1 = carried;
            }
        } else if pair.0.is_some() {
            out.push(GameMatch::bracket_match(
                tournament_id,
                1,
                i as u32,
                pair.0,
                pair.1,
            ));
        }
        // A pair with zero teams cannot occur: the slot pattern fills seeds
        // top-down and n >= 1.
    }
    for (j, (t1, t2)) in next_round.iter().enumerate() {
        out.push(GameMatch::bracket_match(
            tournament_id,
            2,
            j as u32,
            *t1,
            *t2,
        ));
    }
    if size == 8 {
        // Finalists are never known at generation time.
        out.push(GameMatch::bracket_match(tournament_id, 3, 0, None, None));
    }
    Ok(out)
}

/// Generate the bracket from current pool standings.
///
/// Refuses when any bracket match already exists (protective, not
/// overwriting). On success the tournament phase advances to Bracket, the
/// generation timestamp is recorded, and the started flag stays false.
/// Returns the number of matches inserted.
pub fn generate_bracket(tournament: &mut Tournament) -> Result<usize, TournamentError> {
    let has_bracket = tournament
        .matches
        .iter()
        .any(|m| m.match_type == MatchType::Bracket);
    if has_bracket {
        return Err(TournamentError::BracketAlreadyExists);
    }

    let seeds = tournament_seeds(tournament).seeds();
    let matches = build_bracket_matches(tournament.id, &seeds)?;
    let inserted = matches.len();
    tournament.matches.extend(matches);
    tournament.phase = TournamentPhase::Bracket;
    tournament.bracket_generated_at = Some(Utc::now());
    tournament.bracket_started = false;
    log::info!(
        "Generated bracket for tournament {}: {} advancers, {} matches",
        tournament.id,
        seeds.len(),
        inserted
    );
    Ok(inserted)
}

/// Delete all bracket matches and regenerate from current standings.
///
/// Only allowed while no bracket match has gone live or been scored. After
/// that the started flag blocks the rebuild and nothing is deleted.
pub fn rebuild_bracket(tournament: &mut Tournament) -> Result<usize, TournamentError> {
    if tournament.bracket_started {
        return Err(TournamentError::BracketStarted);
    }
    tournament
        .matches
        .retain(|m| m.match_type != MatchType::Bracket);
    tournament.bracket_generated_at = None;
    generate_bracket(tournament)
}

/// Latch the started flag the first time a bracket match goes live or
/// receives a score. Idempotent; from then on rebuild is blocked.
pub fn mark_bracket_started(tournament: &mut Tournament) {
    if !tournament.bracket_started {
        tournament.bracket_started = true;
        log::info!("Bracket started for tournament {}", tournament.id);
    }
}

/// Record a final score on a bracket match and advance the winner.
///
/// The winner lands in the next round at index `i / 2`, slot team1 when `i`
/// is even, team2 when odd — but only if that slot is still empty, so a
/// manual admin override is never overwritten. Completing the last round
/// completes the tournament.
pub fn report_bracket_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    team1_score: u32,
    team2_score: u32,
) -> Result<(), TournamentError> {
    if team1_score == team2_score {
        return Err(TournamentError::TiedScore);
    }
    let m = tournament
        .game_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.match_type != MatchType::Bracket {
        return Err(TournamentError::Validation(vec![
            "Not a bracket match".to_string(),
        ]));
    }
    let winner_slot = if team1_score > team2_score {
        m.team1_id
    } else {
        m.team2_id
    };
    let Some(winner) = winner_slot else {
        return Err(TournamentError::Validation(vec![
            "Winning slot has no team assigned".to_string(),
        ]));
    };
    let round = m.bracket_round.unwrap_or(1);
    let index = m.bracket_match_index.unwrap_or(0);

    mark_bracket_started(tournament);
    {
        let m = tournament
            .game_match_mut(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        m.team1_score = Some(team1_score);
        m.team2_score = Some(team2_score);
        m.winner_id = Some(winner);
        m.clear_live();
    }
    advance_winner(tournament, round, index, winner);
    Ok(())
}

/// Propagate a decided winner into the next round's slot, if one exists and
/// the slot is still empty. Scoring the final completes the tournament.
fn advance_winner(tournament: &mut Tournament, round: u32, index: u32, winner: TeamId) {
    let next = tournament.matches.iter_mut().find(|m| {
        m.match_type == MatchType::Bracket
            && m.bracket_round == Some(round + 1)
            && m.bracket_match_index == Some(index / 2)
    });
    match next {
        Some(next) => {
            let slot = if index % 2 == 0 {
                &mut next.team1_id
            } else {
                &mut next.team2_id
            };
            if slot.is_none() {
                *slot = Some(winner);
            } else if *slot != Some(winner) {
                log::warn!(
                    "Round {} match {} slot already set manually; not overwriting",
                    round + 1,
                    index / 2
                );
            }
        }
        None => {
            tournament.phase = TournamentPhase::Completed;
        }
    }
}
