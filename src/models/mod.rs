//! Data structures for the beach tournament: teams, pools, matches, templates.

mod game;
mod pool;
mod team;
mod template;
mod tournament;

pub use game::{GameMatch, MatchId, MatchType};
pub use pool::{Pool, PoolId};
pub use team::{Team, TeamId};
pub use template::{ScheduleTemplate, SeedPair, TemplateRound};
pub use tournament::{
    AdvancementRules, Tiebreaker, Tournament, TournamentError, TournamentId, TournamentPhase,
};
