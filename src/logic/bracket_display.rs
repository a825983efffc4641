//! Read-side bracket projections: court assignment and referee inference.
//!
//! Everything here is recomputed per render and never written back to
//! tournament state.

use crate::logic::bracket::is_bye;
use crate::models::{GameMatch, MatchId, TeamId};
use std::collections::HashMap;

/// Order court labels for assignment: numeric labels first in numeric order,
/// then non-numeric labels alphabetically.
pub fn sort_court_labels(labels: &[String]) -> Vec<String> {
    let mut numeric: Vec<(u64, &String)> = Vec::new();
    let mut named: Vec<&String> = Vec::new();
    for label in labels {
        match label.trim().parse::<u64>() {
            Ok(n) => numeric.push((n, label)),
            Err(_) => named.push(label),
        }
    }
    numeric.sort_by_key(|(n, _)| *n);
    named.sort();
    numeric
        .into_iter()
        .map(|(_, l)| l.clone())
        .chain(named.into_iter().cloned())
        .collect()
}

/// Assign courts round-robin within each round by match order.
///
/// `matches` must be ordered by (round, index), as
/// `Tournament::bracket_matches` returns them. Empty court list assigns
/// nothing.
pub fn assign_courts(matches: &[&GameMatch], courts: &[String]) -> HashMap<MatchId, String> {
    let courts = sort_court_labels(courts);
    let mut out = HashMap::new();
    if courts.is_empty() {
        return out;
    }
    let mut current_round = None;
    let mut position = 0usize;
    for m in matches {
        if m.bracket_round != current_round {
            current_round = m.bracket_round;
            position = 0;
        }
        out.insert(m.id, courts[position % courts.len()].clone());
        position += 1;
    }
    out
}

/// Infer referees for bracket matches in global order (round ascending, then
/// index ascending).
///
/// Default rule: a match is refereed by the loser of the most recently
/// processed played match. Special case with priority: a round-1 play-in
/// whose next-round counterpart slot is already filled (a team idling on a
/// bye) is refereed by that waiting team. Bye rows get no referee.
pub fn infer_referees(matches: &[&GameMatch]) -> HashMap<MatchId, TeamId> {
    let mut out = HashMap::new();
    let mut last_loser: Option<TeamId> = None;
    for m in matches {
        let pair = (m.team1_id, m.team2_id);
        if m.bracket_round == Some(1) && is_bye(pair) {
            // No game is played for a bye; nobody referees it.
            continue;
        }
        let mut referee = None;
        if m.bracket_round == Some(1) && pair.0.is_some() && pair.1.is_some() {
            if let Some(index) = m.bracket_match_index {
                referee = waiting_next_round_team(matches, index);
            }
        }
        if let Some(r) = referee.or(last_loser) {
            out.insert(m.id, r);
        }
        if m.is_completed() {
            if let Some(loser) = m.loser() {
                last_loser = Some(loser);
            }
        }
    }
    out
}

/// The bye-advanced team already waiting in the other slot of the round-2
/// match this round-1 play-in feeds into, if any. Only applies when the
/// sibling pairing was a bye (no sibling round-1 row exists); a slot filled
/// by a sibling's winner follows the default previous-loser rule.
fn waiting_next_round_team(matches: &[&GameMatch], index: u32) -> Option<TeamId> {
    let sibling = index ^ 1;
    let sibling_exists = matches
        .iter()
        .any(|n| n.bracket_round == Some(1) && n.bracket_match_index == Some(sibling));
    if sibling_exists {
        return None;
    }
    let next = matches.iter().find(|n| {
        n.bracket_round == Some(2) && n.bracket_match_index == Some(index / 2)
    })?;
    if index % 2 == 0 {
        next.team2_id
    } else {
        next.team1_id
    }
}
