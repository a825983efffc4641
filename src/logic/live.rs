//! Live-scoring lease: exclusive, time-bounded claim of a match scoreboard.
//!
//! One scoreboard session at a time controls a match's live score. The lease
//! is an explicit state machine: Idle -> Claimed(owner, expires_at), renewed
//! by heartbeats, ending in Released (explicit) or Expired (heartbeat
//! absence). Any session may take over an expired lease; there is no other
//! cancellation signal.

use crate::logic::bracket::mark_bracket_started;
use crate::models::{MatchId, MatchType, Tournament, TournamentError};
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a lease lives without a heartbeat before any session may reclaim
/// it. Holders should heartbeat well inside this window.
pub const LEASE_WINDOW_SECS: i64 = 45;

/// Observed lease state of a match at a point in time.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LeaseState {
    /// Not live; free to claim.
    Idle,
    /// Held and current.
    Claimed {
        owner: String,
        expires_at: DateTime<Utc>,
    },
    /// Held but the heartbeat window has lapsed; free to reclaim.
    Expired { owner: String },
}

/// Classify a match's live fields into a lease state at `now`.
pub fn lease_state(
    tournament: &Tournament,
    match_id: MatchId,
    now: DateTime<Utc>,
) -> Result<LeaseState, TournamentError> {
    let m = tournament
        .game_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if !m.is_live {
        return Ok(LeaseState::Idle);
    }
    let owner = m.live_owner_id.clone().unwrap_or_default();
    match m.live_last_active_at {
        Some(last) => {
            let expires_at = last + Duration::seconds(LEASE_WINDOW_SECS);
            if now < expires_at {
                Ok(LeaseState::Claimed { owner, expires_at })
            } else {
                Ok(LeaseState::Expired { owner })
            }
        }
        // Live with no heartbeat on record counts as abandoned.
        None => Ok(LeaseState::Expired { owner }),
    }
}

/// Claim the live-scoring lease on a match.
///
/// Succeeds when the match is idle, the previous lease has expired, or the
/// caller already holds it (renewal). A current lease under another owner is
/// a conflict, reported distinctly so the caller disables its controls
/// rather than retrying. Claiming a bracket match latches the tournament's
/// bracket-started flag.
pub fn claim_live(
    tournament: &mut Tournament,
    match_id: MatchId,
    owner: &str,
    now: DateTime<Utc>,
) -> Result<(), TournamentError> {
    match lease_state(tournament, match_id, now)? {
        LeaseState::Claimed { owner: holder, .. } if holder != owner => {
            return Err(TournamentError::LeaseHeld { owner: holder });
        }
        _ => {}
    }
    let is_bracket = {
        let m = tournament
            .game_match_mut(match_id)
            .ok_or(TournamentError::MatchNotFound(match_id))?;
        m.is_live = true;
        m.live_owner_id = Some(owner.to_string());
        m.live_last_active_at = Some(now);
        if m.live_score_team1.is_none() {
            m.live_score_team1 = Some(0);
        }
        if m.live_score_team2.is_none() {
            m.live_score_team2 = Some(0);
        }
        m.match_type == MatchType::Bracket
    };
    if is_bracket {
        mark_bracket_started(tournament);
    }
    Ok(())
}

/// Renew the lease. Only the current holder may heartbeat; a holder whose
/// lease lapsed may still renew as long as nobody else claimed it.
pub fn heartbeat(
    tournament: &mut Tournament,
    match_id: MatchId,
    owner: &str,
    now: DateTime<Utc>,
) -> Result<(), TournamentError> {
    require_holder(tournament, match_id, owner, now)?;
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.live_last_active_at = Some(now);
    Ok(())
}

/// Update the live score. Implies a heartbeat.
pub fn update_live_score(
    tournament: &mut Tournament,
    match_id: MatchId,
    owner: &str,
    team1_score: u32,
    team2_score: u32,
    now: DateTime<Utc>,
) -> Result<(), TournamentError> {
    require_holder(tournament, match_id, owner, now)?;
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.live_score_team1 = Some(team1_score);
    m.live_score_team2 = Some(team2_score);
    m.live_last_active_at = Some(now);
    Ok(())
}

/// Release the lease: clears ownership, heartbeat, and live scores.
pub fn release_live(
    tournament: &mut Tournament,
    match_id: MatchId,
    owner: &str,
    now: DateTime<Utc>,
) -> Result<(), TournamentError> {
    require_holder(tournament, match_id, owner, now)?;
    let m = tournament
        .game_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.clear_live();
    Ok(())
}

/// A mutation on a live match requires the caller to be its owner; another
/// session holding a current lease is a conflict.
fn require_holder(
    tournament: &Tournament,
    match_id: MatchId,
    owner: &str,
    now: DateTime<Utc>,
) -> Result<(), TournamentError> {
    match lease_state(tournament, match_id, now)? {
        LeaseState::Idle => Err(TournamentError::NotLeaseOwner),
        LeaseState::Claimed { owner: holder, .. } => {
            if holder == owner {
                Ok(())
            } else {
                Err(TournamentError::LeaseHeld { owner: holder })
            }
        }
        LeaseState::Expired { owner: holder } => {
            if holder == owner {
                Ok(())
            } else {
                Err(TournamentError::NotLeaseOwner)
            }
        }
    }
}
