//! Tournament aggregate, phases, advancement rules, and error type.

use crate::models::game::{GameMatch, MatchId, MatchType};
use crate::models::pool::{Pool, PoolId};
use crate::models::team::{Team, TeamId};
use crate::models::template::ScheduleTemplate;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, PartialEq)]
pub enum TournamentError {
    /// Prerequisite/validation failures, all collected before aborting.
    Validation(Vec<String>),
    /// Tournament is not in a phase that allows this action.
    InvalidPhase,
    /// Bracket matches already exist for this tournament.
    BracketAlreadyExists,
    /// The bracket has started (a match went live or was scored); rebuild refused.
    BracketStarted,
    /// No teams advance from pool play; nothing to build a bracket from.
    NoAdvancingTeams,
    /// More advancers than the largest supported bracket.
    TooManyAdvancers { count: usize, max: usize },
    /// Scores are equal; a match must have a winner.
    TiedScore,
    /// Live lease is held by another scoreboard session.
    LeaseHeld { owner: String },
    /// Caller is not the current lease holder.
    NotLeaseOwner,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Seed already taken by another team in the same pool.
    SeedTaken(u32),
    TeamNotFound(TeamId),
    PoolNotFound(PoolId),
    MatchNotFound(MatchId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::Validation(errors) => write!(f, "{}", errors.join("; ")),
            TournamentError::InvalidPhase => write!(f, "Invalid phase for this action"),
            TournamentError::BracketAlreadyExists => {
                write!(f, "Bracket already exists for this tournament")
            }
            TournamentError::BracketStarted => {
                write!(f, "Bracket has started; it can no longer be rebuilt")
            }
            TournamentError::NoAdvancingTeams => write!(f, "No advancing teams"),
            TournamentError::TooManyAdvancers { count, max } => {
                write!(f, "{} advancers exceed supported bracket size {}", count, max)
            }
            TournamentError::TiedScore => write!(f, "Scores may not be equal"),
            TournamentError::LeaseHeld { owner } => {
                write!(f, "Match is being scored by another session ({})", owner)
            }
            TournamentError::NotLeaseOwner => {
                write!(f, "This session does not hold the scoring lease")
            }
            TournamentError::DuplicateTeamName => {
                write!(f, "A team with this name already exists")
            }
            TournamentError::SeedTaken(seed) => {
                write!(f, "Seed {} is already taken in this pool", seed)
            }
            TournamentError::TeamNotFound(_) => write!(f, "Team not found"),
            TournamentError::PoolNotFound(_) => write!(f, "Pool not found"),
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Current phase of the tournament.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentPhase {
    /// Importing teams, assigning pools and seeds; not started.
    #[default]
    Setup,
    /// Pool round-robin in progress.
    PoolPlay,
    /// Elimination bracket generated.
    Bracket,
    /// Tournament finished.
    Completed,
}

/// Tiebreakers applied, in configured order, after wins when ranking teams.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tiebreaker {
    /// Direct result between two teams; only used for strict two-team ties.
    HeadToHead,
    /// Fraction of contested sets won.
    SetRatio,
    /// Points scored minus points conceded.
    PointDiff,
    /// Deterministic fallback: lexical team-id order. Named "random" in the
    /// admin UI but kept reproducible so standings never shift between reads.
    Random,
}

/// Admin-configurable advancement rules.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct AdvancementRules {
    pub tiebreakers: Vec<Tiebreaker>,
}

impl Default for AdvancementRules {
    fn default() -> Self {
        Self {
            tiebreakers: vec![
                Tiebreaker::HeadToHead,
                Tiebreaker::SetRatio,
                Tiebreaker::PointDiff,
                Tiebreaker::Random,
            ],
        }
    }
}

/// Full tournament state: teams, pools, matches, templates, and phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub phase: TournamentPhase,
    pub rules: AdvancementRules,
    pub teams: Vec<Team>,
    pub pools: Vec<Pool>,
    pub matches: Vec<GameMatch>,
    /// Schedule templates keyed by pool size.
    pub templates: HashMap<u32, ScheduleTemplate>,
    /// Court labels available for bracket play.
    pub courts: Vec<String>,
    /// Set when the bracket was (last) generated.
    pub bracket_generated_at: Option<DateTime<Utc>>,
    /// Latched true the first time any bracket match goes live or is scored.
    /// Blocks bracket rebuild from then on.
    pub bracket_started: bool,
}

impl Tournament {
    /// Create a new tournament in Setup phase with default advancement rules.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            phase: TournamentPhase::Setup,
            rules: AdvancementRules::default(),
            teams: Vec::new(),
            pools: Vec::new(),
            matches: Vec::new(),
            templates: HashMap::new(),
            courts: Vec::new(),
            bracket_generated_at: None,
            bracket_started: false,
        }
    }

    /// Add a team (Setup or PoolPlay). Names must be unique (case-insensitive).
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<TeamId, TournamentError> {
        use TournamentPhase::*;
        if !matches!(self.phase, Setup | PoolPlay) {
            return Err(TournamentError::InvalidPhase);
        }
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(TournamentError::Validation(vec![
                "Team name may not be empty".to_string(),
            ]));
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let mut team = Team::new(self.id, name_trimmed);
        team.seed_global = Some(self.teams.len() as u32 + 1);
        let id = team.id;
        self.teams.push(team);
        Ok(id)
    }

    /// Add a pool (Setup only).
    pub fn add_pool(
        &mut self,
        name: impl Into<String>,
        court_label: Option<String>,
    ) -> Result<PoolId, TournamentError> {
        if self.phase != TournamentPhase::Setup {
            return Err(TournamentError::InvalidPhase);
        }
        let pool = Pool::new(self.id, name, court_label);
        let id = pool.id;
        self.pools.push(pool);
        Ok(id)
    }

    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn pool(&self, id: PoolId) -> Option<&Pool> {
        self.pools.iter().find(|p| p.id == id)
    }

    pub fn game_match(&self, id: MatchId) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn game_match_mut(&mut self, id: MatchId) -> Option<&mut GameMatch> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Teams currently assigned to a pool.
    pub fn teams_in_pool(&self, pool_id: PoolId) -> Vec<&Team> {
        self.teams
            .iter()
            .filter(|t| t.pool_id == Some(pool_id))
            .collect()
    }

    /// Completed and pending pool matches belonging to one pool.
    pub fn pool_matches(&self, pool_id: PoolId) -> Vec<&GameMatch> {
        self.matches
            .iter()
            .filter(|m| m.match_type == MatchType::Pool && m.pool_id == Some(pool_id))
            .collect()
    }

    /// All bracket matches, ordered by round then index.
    pub fn bracket_matches(&self) -> Vec<&GameMatch> {
        let mut out: Vec<&GameMatch> = self
            .matches
            .iter()
            .filter(|m| m.match_type == MatchType::Bracket)
            .collect();
        out.sort_by_key(|m| (m.bracket_round, m.bracket_match_index));
        out
    }

    /// Assign a team to a pool (Setup only). Clears any previous seed.
    pub fn assign_team_to_pool(
        &mut self,
        team_id: TeamId,
        pool_id: PoolId,
    ) -> Result<(), TournamentError> {
        if self.phase != TournamentPhase::Setup {
            return Err(TournamentError::InvalidPhase);
        }
        if self.pool(pool_id).is_none() {
            return Err(TournamentError::PoolNotFound(pool_id));
        }
        let team = self
            .team_mut(team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.pool_id = Some(pool_id);
        team.seed_in_pool = None;
        Ok(())
    }

    /// Set a team's seed within its pool (Setup only). Seeds are unique per pool.
    pub fn set_seed_in_pool(&mut self, team_id: TeamId, seed: u32) -> Result<(), TournamentError> {
        if self.phase != TournamentPhase::Setup {
            return Err(TournamentError::InvalidPhase);
        }
        let pool_id = self
            .team(team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?
            .pool_id
            .ok_or_else(|| {
                TournamentError::Validation(vec!["Team is not assigned to a pool".to_string()])
            })?;
        let taken = self.teams.iter().any(|t| {
            t.id != team_id && t.pool_id == Some(pool_id) && t.seed_in_pool == Some(seed)
        });
        if taken {
            return Err(TournamentError::SeedTaken(seed));
        }
        if let Some(team) = self.team_mut(team_id) {
            team.seed_in_pool = Some(seed);
        }
        Ok(())
    }

    /// Rename a team (any phase before Completed).
    pub fn rename_team(
        &mut self,
        team_id: TeamId,
        name: impl Into<String>,
    ) -> Result<(), TournamentError> {
        if self.phase == TournamentPhase::Completed {
            return Err(TournamentError::InvalidPhase);
        }
        let name = name.into();
        let name_trimmed = name.trim().to_string();
        if name_trimmed.is_empty() {
            return Err(TournamentError::Validation(vec![
                "Team name may not be empty".to_string(),
            ]));
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.id != team_id && t.name.eq_ignore_ascii_case(&name_trimmed));
        if is_duplicate {
            return Err(TournamentError::DuplicateTeamName);
        }
        let team = self
            .team_mut(team_id)
            .ok_or(TournamentError::TeamNotFound(team_id))?;
        team.name = name_trimmed;
        Ok(())
    }

    /// Replace the tiebreaker order (Setup or PoolPlay).
    pub fn set_tiebreakers(&mut self, tiebreakers: Vec<Tiebreaker>) -> Result<(), TournamentError> {
        use TournamentPhase::*;
        if !matches!(self.phase, Setup | PoolPlay) {
            return Err(TournamentError::InvalidPhase);
        }
        if tiebreakers.is_empty() {
            return Err(TournamentError::Validation(vec![
                "Tiebreaker order may not be empty".to_string(),
            ]));
        }
        self.rules.tiebreakers = tiebreakers;
        Ok(())
    }

    /// Replace the court labels used for bracket court assignment.
    pub fn set_courts(&mut self, courts: Vec<String>) {
        self.courts = courts;
    }
}
