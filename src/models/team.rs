//! Team data structure: pool membership and seeding fields.

use crate::models::pool::PoolId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches and lookups).
pub type TeamId = Uuid;

/// A team registered in a tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub tournament_id: TournamentId,
    /// None until the team is assigned to a pool.
    pub pool_id: Option<PoolId>,
    pub name: String,
    /// Seed within the pool, 1-based. None until seeded. Unique per pool.
    pub seed_in_pool: Option<u32>,
    /// Import/insertion order across the whole tournament.
    pub seed_global: Option<u32>,
}

impl Team {
    /// Create a new team with the given name, not yet pooled or seeded.
    pub fn new(tournament_id: TournamentId, name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            pool_id: None,
            name: name.into(),
            seed_in_pool: None,
            seed_global: None,
        }
    }

    /// The auto-generated name a team carries before an admin renames it.
    /// Schedule generation refuses to run while any team still has one.
    pub fn placeholder_name(seed: u32) -> String {
        format!("Team {seed}")
    }

    /// True while the team name is still the seed-level placeholder.
    pub fn has_placeholder_name(&self) -> bool {
        match self.seed_in_pool {
            Some(seed) => self.name == Self::placeholder_name(seed),
            None => false,
        }
    }
}
