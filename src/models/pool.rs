//! Pool data structure: a round-robin group within a tournament.

use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a pool.
pub type PoolId = Uuid;

/// A pool: small round-robin group played before the elimination bracket.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pool {
    pub id: PoolId,
    pub tournament_id: TournamentId,
    pub name: String,
    /// Court the pool plays on, e.g. "1" or "Center".
    pub court_label: Option<String>,
}

impl Pool {
    pub fn new(
        tournament_id: TournamentId,
        name: impl Into<String>,
        court_label: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
            court_label,
        }
    }
}
