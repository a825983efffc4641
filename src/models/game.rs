//! Match data structure for pool and bracket play, including live-scoring fields.

use crate::models::pool::PoolId;
use crate::models::team::TeamId;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which phase the match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Pool,
    Bracket,
}

/// A single match. Pool matches carry `pool_id`/`round_number`; bracket
/// matches carry `bracket_round`/`bracket_match_index`. A match is completed
/// once both final scores are set.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub match_type: MatchType,
    /// Pool context only.
    pub pool_id: Option<PoolId>,
    /// Pool context only: round within the pool schedule, 1-based.
    pub round_number: Option<u32>,
    /// Bracket context only: round within the bracket, 1-based.
    pub bracket_round: Option<u32>,
    /// Bracket context only: match position within its round, 0-based.
    /// Preserved even when sibling pairings are byes so advancement math
    /// (`index / 2`) stays aligned.
    pub bracket_match_index: Option<u32>,
    pub team1_id: Option<TeamId>,
    pub team2_id: Option<TeamId>,
    pub team1_score: Option<u32>,
    pub team2_score: Option<u32>,
    pub winner_id: Option<TeamId>,
    /// True while a scoreboard session holds the live lease.
    pub is_live: bool,
    pub live_score_team1: Option<u32>,
    pub live_score_team2: Option<u32>,
    /// Opaque identity of the scoreboard session holding the lease.
    pub live_owner_id: Option<String>,
    /// Last heartbeat from the lease holder.
    pub live_last_active_at: Option<DateTime<Utc>>,
}

impl GameMatch {
    /// Create a pool match for a given round. Team slots may be empty when a
    /// seed number had no team behind it at generation time.
    pub fn pool_match(
        tournament_id: TournamentId,
        pool_id: PoolId,
        round_number: u32,
        team1_id: Option<TeamId>,
        team2_id: Option<TeamId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            match_type: MatchType::Pool,
            pool_id: Some(pool_id),
            round_number: Some(round_number),
            bracket_round: None,
            bracket_match_index: None,
            team1_id,
            team2_id,
            team1_score: None,
            team2_score: None,
            winner_id: None,
            is_live: false,
            live_score_team1: None,
            live_score_team2: None,
            live_owner_id: None,
            live_last_active_at: None,
        }
    }

    /// Create a bracket match at a fixed (round, index) position.
    pub fn bracket_match(
        tournament_id: TournamentId,
        bracket_round: u32,
        bracket_match_index: u32,
        team1_id: Option<TeamId>,
        team2_id: Option<TeamId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            match_type: MatchType::Bracket,
            pool_id: None,
            round_number: None,
            bracket_round: Some(bracket_round),
            bracket_match_index: Some(bracket_match_index),
            team1_id,
            team2_id,
            team1_score: None,
            team2_score: None,
            winner_id: None,
            is_live: false,
            live_score_team1: None,
            live_score_team2: None,
            live_owner_id: None,
            live_last_active_at: None,
        }
    }

    /// A match is completed once both final scores are recorded.
    pub fn is_completed(&self) -> bool {
        self.team1_score.is_some() && self.team2_score.is_some()
    }

    /// The winner of a completed match, validated against the team slots.
    pub fn winner(&self) -> Option<TeamId> {
        let w = self.winner_id?;
        if self.team1_id == Some(w) || self.team2_id == Some(w) {
            Some(w)
        } else {
            None
        }
    }

    /// The loser of a completed match (the team slot that is not the winner).
    pub fn loser(&self) -> Option<TeamId> {
        let w = self.winner()?;
        if self.team1_id == Some(w) {
            self.team2_id
        } else {
            self.team1_id
        }
    }

    /// Clear all live-scoring fields (lease release, or final-score submit).
    pub fn clear_live(&mut self) {
        self.is_live = false;
        self.live_score_team1 = None;
        self.live_score_team2 = None;
        self.live_owner_id = None;
        self.live_last_active_at = None;
    }
}
