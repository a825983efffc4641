//! Beach volleyball tournament web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{
    assign_courts, bracket_size_for, build_bracket_matches, claim_live, clear_pool_matches,
    compute_seeds, compute_standings, default_template, generate_bracket, generate_pool_schedule,
    heartbeat, infer_referees, is_bye, lease_state, mark_bracket_started, rebuild_bracket,
    release_live, report_bracket_result, report_pool_result, sort_court_labels, tournament_seeds,
    update_live_score, LeaseState, SeedList, Standing, LEASE_WINDOW_SECS, MAX_BRACKET_SIZE,
    SUPPORTED_POOL_SIZES,
};
pub use models::{
    AdvancementRules, GameMatch, MatchId, MatchType, Pool, PoolId, ScheduleTemplate, SeedPair,
    Team, TeamId, TemplateRound, Tiebreaker, Tournament, TournamentError, TournamentId,
    TournamentPhase,
};
